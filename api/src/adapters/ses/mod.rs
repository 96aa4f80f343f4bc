//! AWS SES adapter
//!
//! Implementation of the email transport on top of the SES v2 API.

pub mod client;

pub use client::SesEmailTransport;
