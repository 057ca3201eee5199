//! In-memory store backend on a sharded concurrent map.

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tracing::debug;

use crate::domain::Game;
use crate::store::{GameId, GameStore, StoreError, StoredGame, Version};

/// Process-local [`GameStore`]. Compare-and-swap is atomic per map shard, so
/// two racing writers against the same game cannot both succeed.
#[derive(Debug, Default)]
pub struct MemoryGameStore {
    games: DashMap<GameId, StoredGame>,
}

impl MemoryGameStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GameStore for MemoryGameStore {
    async fn load(&self, id: GameId) -> Result<StoredGame, StoreError> {
        self.games
            .get(&id)
            .map(|entry| entry.value().clone())
            .ok_or(StoreError::NotFound(id))
    }

    async fn store(&self, id: GameId, game: Game) -> Result<StoredGame, StoreError> {
        let stored = StoredGame {
            game,
            version: Version::fresh(),
        };
        self.games.insert(id, stored.clone());
        debug!(game_id = %id, version = %stored.version, "game stored");
        Ok(stored)
    }

    async fn compare_and_swap(
        &self,
        id: GameId,
        expected: Version,
        game: Game,
    ) -> Result<StoredGame, StoreError> {
        match self.games.entry(id) {
            Entry::Vacant(_) => Err(StoreError::NotFound(id)),
            Entry::Occupied(mut entry) => {
                let actual = entry.get().version;
                if actual != expected {
                    return Err(StoreError::VersionMismatch { expected, actual });
                }
                let stored = StoredGame {
                    game,
                    version: Version::fresh(),
                };
                entry.insert(stored.clone());
                debug!(game_id = %id, version = %stored.version, "game swapped");
                Ok(stored)
            }
        }
    }
}
