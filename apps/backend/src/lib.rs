#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod errors;
pub mod services;
pub mod state;
pub mod store;

// Re-exports for public API
pub use config::engine::EngineConfig;
pub use errors::domain::DomainError;
pub use errors::error_code::ErrorCode;
pub use services::games::{GameService, TurnAction};
pub use services::notify::{GameEvent, GameNotifier, NoopNotifier};
pub use state::app_state::AppState;
pub use store::memory::MemoryGameStore;
pub use store::{GameId, GameStore, StoreError, StoredGame, Version};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    backend_test_support::test_logging::init();
}
