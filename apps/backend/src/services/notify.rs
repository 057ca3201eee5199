//! Post-write notification seam.
//!
//! After every successful write the service informs a messaging collaborator
//! which game changed, so subscribers can re-fetch. Delivery semantics are a
//! transport concern; this module only defines the seam and the envelope.

use async_trait::async_trait;

use crate::store::{GameId, Version};

/// Event published exactly once per successful write, never on a rejected
/// or conflicted one.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    GameStateAvailable { game_id: GameId, version: Version },
}

#[async_trait]
pub trait GameNotifier: Send + Sync {
    async fn notify(&self, event: GameEvent);
}

/// Notifier that drops every event; for deployments without a messaging
/// collaborator attached.
#[derive(Debug, Default)]
pub struct NoopNotifier;

#[async_trait]
impl GameNotifier for NoopNotifier {
    async fn notify(&self, _event: GameEvent) {}
}
