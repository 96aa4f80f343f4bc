//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! The mocks implement the domain ports directly, so services and the full
//! router can be exercised without AWS credentials or network access.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
