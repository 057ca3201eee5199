use std::sync::Arc;

use crate::config::engine::EngineConfig;
use crate::services::games::GameService;
use crate::services::notify::{GameNotifier, NoopNotifier};
use crate::store::memory::MemoryGameStore;
use crate::store::GameStore;

/// Application state containing shared resources.
#[derive(Clone)]
pub struct AppState {
    /// Game orchestration service shared across transport handlers.
    pub games: Arc<GameService>,
}

impl AppState {
    pub fn new(
        store: Arc<dyn GameStore>,
        notifier: Arc<dyn GameNotifier>,
        config: &EngineConfig,
    ) -> Self {
        Self {
            games: Arc::new(GameService::new(store, notifier, config)),
        }
    }

    /// In-memory state with no messaging collaborator attached.
    pub fn in_memory(config: &EngineConfig) -> Self {
        Self::new(
            Arc::new(MemoryGameStore::new()),
            Arc::new(NoopNotifier),
            config,
        )
    }

    #[cfg(test)]
    pub fn for_tests() -> Self {
        Self::in_memory(&EngineConfig::for_tests())
    }
}
