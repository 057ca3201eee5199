//! Game orchestration: load state, apply one engine transition, write back
//! conditioned on the version token, then notify subscribers.
//!
//! The end-to-end turn operation is not atomic across the two store calls;
//! safety comes entirely from the compare-and-swap write. On a version
//! conflict the whole operation is discarded and surfaced to the caller,
//! who must reload and resubmit against fresh state. Nothing retries here.

use std::sync::Arc;

use parking_lot::Mutex;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::config::engine::EngineConfig;
use crate::domain::{self, Bid, CardId, Game, GameView, PlayerId, Seat};
use crate::errors::domain::DomainError;
use crate::services::notify::{GameEvent, GameNotifier};
use crate::store::{GameId, GameStore, Version};

/// One turn submission: exactly one engine transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnAction {
    PlayCard { card: CardId },
    PlaceBid { bid: Bid },
    FlipCard { target: Seat },
}

pub struct GameService {
    store: Arc<dyn GameStore>,
    notifier: Arc<dyn GameNotifier>,
    /// Source of the Skull penalty draw; seedable for deterministic replays.
    rng: Mutex<ChaCha8Rng>,
}

impl GameService {
    pub fn new(
        store: Arc<dyn GameStore>,
        notifier: Arc<dyn GameNotifier>,
        config: &EngineConfig,
    ) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_os_rng(),
        };
        Self {
            store,
            notifier,
            rng: Mutex::new(rng),
        }
    }

    /// Create and persist a game for the given roster.
    pub async fn create_game(
        &self,
        player_ids: Vec<PlayerId>,
    ) -> Result<(GameId, Version), DomainError> {
        let game = domain::create_game(player_ids)?;
        let id = GameId::new_v4();
        let stored = self.store.store(id, game).await?;
        info!(game_id = %id, version = %stored.version, "game created");
        self.notifier
            .notify(GameEvent::GameStateAvailable {
                game_id: id,
                version: stored.version,
            })
            .await;
        Ok((id, stored.version))
    }

    /// Apply one turn for `player` against the game's current state.
    ///
    /// Rule violations come back as `DomainError::Validation` with the game
    /// unchanged; a lost write race comes back as
    /// `DomainError::Conflict(OptimisticLock, ..)` and means "stale state,
    /// refetch and retry". The two are distinguishable by the caller.
    pub async fn submit_turn(
        &self,
        game_id: GameId,
        player: &PlayerId,
        action: TurnAction,
    ) -> Result<Version, DomainError> {
        debug!(game_id = %game_id, player = %player, ?action, "submitting turn");
        let current = self.store.load(game_id).await?;

        let next = self
            .apply(&current.game, player, action)
            .map_err(|err| {
                debug!(game_id = %game_id, code = %err.code(), "turn rejected");
                err
            })?;

        let stored = self
            .store
            .compare_and_swap(game_id, current.version, next)
            .await?;
        debug!(game_id = %game_id, version = %stored.version, "turn accepted");
        self.notifier
            .notify(GameEvent::GameStateAvailable {
                game_id,
                version: stored.version,
            })
            .await;
        Ok(stored.version)
    }

    /// Read projection for an optional viewer identity.
    pub async fn game_view(
        &self,
        game_id: GameId,
        viewer: Option<&PlayerId>,
    ) -> Result<GameView, DomainError> {
        let stored = self.store.load(game_id).await?;
        Ok(domain::view_for(&stored.game, viewer))
    }

    fn apply(
        &self,
        game: &Game,
        player: &PlayerId,
        action: TurnAction,
    ) -> Result<Game, DomainError> {
        let next = match action {
            TurnAction::PlayCard { card } => domain::play_card(game, player, card)?,
            TurnAction::PlaceBid { bid } => domain::place_bid(game, player, bid)?,
            TurnAction::FlipCard { target } => {
                let mut rng = self.rng.lock();
                domain::flip_card(game, player, target, &mut *rng)?
            }
        };
        Ok(next)
    }
}
