//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::{NaiveDate, NaiveDateTime};
use serde_json::{json, Value};

use crate::domain::entities::QrEmail;

/// 2024-03-05 14:07:09
pub fn test_timestamp() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 5)
        .unwrap()
        .and_hms_opt(14, 7, 9)
        .unwrap()
}

/// A valid email request with an HTML document body
pub fn test_qr_email() -> QrEmail {
    QrEmail {
        from_email: "events@example.com".to_string(),
        to: "guest@example.com".to_string(),
        subject: "Your ticket".to_string(),
        html: "<html><body><p>Welcome!</p></body></html>".to_string(),
        content_qr: "TICKET-2024-0042".to_string(),
    }
}

/// JSON body for `POST /send-email-with-qr` matching `test_qr_email`
pub fn test_email_body() -> Value {
    json!({
        "from_email": "events@example.com",
        "to": "guest@example.com",
        "subject": "Your ticket",
        "html": "<html><body><p>Welcome!</p></body></html>",
        "content_qr": "TICKET-2024-0042",
    })
}
