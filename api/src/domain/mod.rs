//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Request-scoped value objects (generated codes, emails)
//! - `ports`: Trait definitions for external capabilities (QR rendering, email delivery)

pub mod entities;
pub mod ports;
