use std::env;
use std::time::Duration;

const DEFAULT_ALLOWED_ORIGINS: &str =
    "https://app.nexpo.vn,http://app.nexpo.vn,https://cms.nexpo.vn,https://api-stillgood.tsx.vn";

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    /// SES region; credentials come from the AWS default provider chain
    pub aws_region: String,
    /// Origins allowed to call the API with credentials
    pub allowed_origins: Vec<String>,
    /// Upper bound for a single SES send, including connect and response
    pub email_send_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            aws_region: env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
            allowed_origins: parse_origins(
                &env::var("CORS_ALLOWED_ORIGINS")
                    .unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGINS.to_string()),
            ),
            email_send_timeout: Duration::from_secs(
                env::var("EMAIL_SEND_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(30),
            ),
        }
    }
}

/// Split a comma separated origin list, dropping blanks and trailing slashes
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|o| o.trim().trim_end_matches('/'))
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}
