//! Backend test support utilities
//!
//! Shared helpers for backend tests, currently limited to unified logging
//! initialization for unit and integration tests.

pub mod test_logging;
