//! Service layer orchestrating the engine against the store.

pub mod games;
pub mod notify;
