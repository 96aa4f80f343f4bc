//! QR Mail API Server
//!
//! Generates QR code images from text and sends transactional emails with a
//! QR code embedded in their HTML body.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::any::Any;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    http::HeaderValue,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{QrCodeRenderer, SesEmailTransport};
use app::{EmailService, QrService};
use config::Config;
use domain::ports::{EmailTransport, QrRenderer};
use error::AppError;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub qr_service: Arc<QrService<dyn QrRenderer>>,
    pub email_service: Arc<EmailService<dyn QrRenderer, dyn EmailTransport>>,
}

impl AppState {
    pub fn new(renderer: Arc<dyn QrRenderer>, transport: Arc<dyn EmailTransport>) -> Self {
        Self {
            qr_service: Arc::new(QrService::new(renderer.clone())),
            email_service: Arc::new(EmailService::new(renderer, transport)),
        }
    }
}

#[derive(Serialize)]
struct RootResponse {
    message: &'static str,
}

async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "QR Code Generator API is running!",
    })
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Turn a handler panic into a 500 instead of dropping the connection
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    AppError::Internal(format!("Failed to process request: {}", detail)).into_response()
}

/// Credentialed CORS restricted to `origins`; methods and headers are mirrored
/// from the request since wildcards are not allowed together with credentials.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}

/// Build the application router
pub fn build_router(state: AppState, allowed_origins: &[String]) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/gen-qr", post(handlers::gen_qr))
        .route("/download-qr", get(handlers::download_qr))
        .route("/send-email-with-qr", post(handlers::send_email_with_qr))
        // Middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CatchPanicLayer::custom(handle_panic))
                .layer(cors_layer(allowed_origins)),
        )
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,qrmail_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting QR Mail API...");

    // Load configuration
    let config = Config::from_env();

    // Create adapters
    let renderer: Arc<dyn QrRenderer> = Arc::new(QrCodeRenderer::new());
    let transport: Arc<dyn EmailTransport> = Arc::new(
        SesEmailTransport::new(config.aws_region.clone(), config.email_send_timeout).await,
    );
    tracing::info!(region = %config.aws_region, "SES client ready");

    let state = AppState::new(renderer, transport);
    let app = build_router(state, &config.allowed_origins);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
