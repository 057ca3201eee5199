//! Persistence contract for game state under optimistic concurrency.
//!
//! Every persisted game carries an opaque version token, reassigned on every
//! successful write. The store never merges and never retries: a version
//! mismatch is reported to the caller, who must reload and recompute the
//! transition against fresh state.

pub mod memory;

use std::fmt::{Display, Formatter, Result as FmtResult};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::domain::Game;

/// Identity of a persisted game.
pub type GameId = Uuid;

/// Opaque version token used for compare-and-swap writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Version(Uuid);

impl Version {
    /// A token distinct from every previously issued one.
    /// For store implementations only; callers treat tokens as opaque.
    pub fn fresh() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Display for Version {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

/// A persisted game together with its current version token.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredGame {
    pub game: Game,
    pub version: Version,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("game {0} not found")]
    NotFound(GameId),
    #[error("version mismatch: expected {expected}, actual {actual}")]
    VersionMismatch { expected: Version, actual: Version },
    #[error("storage backend failure: {0}")]
    Backend(String),
}

/// Storage backend seam. The in-memory backend lives in [`memory`]; remote
/// engines (SQL, wide-column) plug in behind the same contract.
#[async_trait]
pub trait GameStore: Send + Sync {
    /// Current state and version token for a game.
    async fn load(&self, id: GameId) -> Result<StoredGame, StoreError>;

    /// Unconditional create-or-replace; assigns a fresh version token.
    async fn store(&self, id: GameId, game: Game) -> Result<StoredGame, StoreError>;

    /// Conditional write: succeeds only while the persisted token still
    /// equals `expected`. A mismatch leaves the persisted value untouched.
    async fn compare_and_swap(
        &self,
        id: GameId,
        expected: Version,
        game: Game,
    ) -> Result<StoredGame, StoreError>;
}
