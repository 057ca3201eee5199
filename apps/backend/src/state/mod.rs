//! Shared application state.

pub mod app_state;
