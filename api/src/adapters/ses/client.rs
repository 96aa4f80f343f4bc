//! SES v2 email transport implementation

use std::fmt::Debug;
use std::time::Duration;

use async_trait::async_trait;
use aws_config::retry::RetryConfig;
use aws_config::timeout::TimeoutConfig;
use aws_config::BehaviorVersion;
use aws_sdk_sesv2::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_sesv2::operation::send_email::{SendEmailError, SendEmailOutput};
use aws_sdk_sesv2::types::{Body, Content, Destination, EmailContent, Message};
use aws_sdk_sesv2::Client;

use crate::domain::entities::{DeliveryId, OutgoingEmail};
use crate::domain::ports::EmailTransport;
use crate::error::EmailTransportError;

const CHARSET: &str = "UTF-8";

/// Email transport backed by Amazon SES
pub struct SesEmailTransport {
    client: Client,
}

impl SesEmailTransport {
    /// Build the SES client once at startup.
    ///
    /// Credentials come from the default AWS provider chain
    /// (`AWS_ACCESS_KEY_ID` / `AWS_SECRET_ACCESS_KEY`, profiles, instance roles).
    /// SDK retries are disabled: each send is a single attempt bounded by `timeout`.
    pub async fn new(region: String, timeout: Duration) -> Self {
        let config = aws_config::defaults(BehaviorVersion::latest())
            .region(aws_config::Region::new(region))
            .retry_config(RetryConfig::disabled())
            .timeout_config(
                TimeoutConfig::builder()
                    .operation_timeout(timeout)
                    .build(),
            )
            .load()
            .await;

        Self {
            client: Client::new(&config),
        }
    }

    fn build_content(data: &str) -> Result<Content, EmailTransportError> {
        Content::builder()
            .data(data)
            .charset(CHARSET)
            .build()
            .map_err(|e| EmailTransportError::new("InvalidMessage", e.to_string()))
    }
}

/// Map an SDK failure onto the provider's own code and message
fn map_sdk_error<R: Debug + 'static>(err: SdkError<SendEmailError, R>) -> EmailTransportError {
    match &err {
        SdkError::ServiceError(service_err) => {
            let e = service_err.err();
            EmailTransportError::new(
                e.code().unwrap_or("Unknown"),
                e.message().unwrap_or("No message returned by SES"),
            )
        }
        SdkError::TimeoutError(_) => {
            EmailTransportError::new("Timeout", "SES did not respond before the send timeout")
        }
        _ => EmailTransportError::new("DispatchFailure", DisplayErrorContext(&err).to_string()),
    }
}

#[async_trait]
impl EmailTransport for SesEmailTransport {
    async fn send(&self, email: &OutgoingEmail) -> Result<DeliveryId, EmailTransportError> {
        let message = Message::builder()
            .subject(Self::build_content(&email.subject)?)
            .body(
                Body::builder()
                    .html(Self::build_content(&email.html)?)
                    .build(),
            )
            .build();

        let output = self
            .client
            .send_email()
            .from_email_address(&email.from)
            .destination(Destination::builder().to_addresses(&email.to).build())
            .content(EmailContent::builder().simple(message).build())
            .send()
            .await
            .map_err(map_sdk_error)?;

        delivery_id(&output)
    }
}

fn delivery_id(output: &SendEmailOutput) -> Result<DeliveryId, EmailTransportError> {
    output
        .message_id()
        .map(|id| DeliveryId(id.to_string()))
        .ok_or_else(|| {
            EmailTransportError::new("MissingMessageId", "SES accepted the message without an id")
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_sesv2::error::ErrorMetadata;

    fn service_error(meta: ErrorMetadata) -> SdkError<SendEmailError, ()> {
        SdkError::service_error(SendEmailError::generic(meta), ())
    }

    #[test]
    fn service_error_keeps_provider_code_and_message() {
        let err = service_error(
            ErrorMetadata::builder()
                .code("MessageRejected")
                .message("Email address is not verified.")
                .build(),
        );

        assert_eq!(
            map_sdk_error(err),
            EmailTransportError::new("MessageRejected", "Email address is not verified.")
        );
    }

    #[test]
    fn service_error_without_metadata_uses_defaults() {
        let err = service_error(ErrorMetadata::builder().build());

        assert_eq!(
            map_sdk_error(err),
            EmailTransportError::new("Unknown", "No message returned by SES")
        );
    }

    #[test]
    fn timeout_maps_to_timeout_code() {
        let err: SdkError<SendEmailError, ()> = SdkError::timeout_error("operation timed out");

        let mapped = map_sdk_error(err);

        assert_eq!(mapped.code, "Timeout");
        assert_eq!(mapped.message, "SES did not respond before the send timeout");
    }

    #[test]
    fn other_failures_map_to_dispatch_failure() {
        let err: SdkError<SendEmailError, ()> =
            SdkError::construction_failure("failed to build request");

        let mapped = map_sdk_error(err);

        assert_eq!(mapped.code, "DispatchFailure");
        assert!(mapped.message.contains("failed to build request"));
    }

    #[test]
    fn message_id_becomes_delivery_id() {
        let output = SendEmailOutput::builder().message_id("0100018e-abc").build();

        assert_eq!(
            delivery_id(&output).unwrap(),
            DeliveryId("0100018e-abc".to_string())
        );
    }

    #[test]
    fn missing_message_id_is_an_error() {
        let output = SendEmailOutput::builder().build();

        let err = delivery_id(&output).unwrap_err();

        assert_eq!(err.code, "MissingMessageId");
    }
}
