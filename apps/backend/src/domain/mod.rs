//! Domain layer: pure game rules and read projections.
//!
//! Every operation transforms one immutable `Game` into the next or rejects
//! the attempt with a typed error; no I/O, no clock, and no randomness
//! beyond the one injected penalty draw in `flipping`.

pub mod bidding;
pub mod cards;
pub mod errors;
pub mod flipping;
pub mod playing;
pub mod rules;
pub mod setup;
pub mod snapshot;
pub mod state;

#[cfg(test)]
mod tests_bidding;
#[cfg(test)]
mod tests_snapshot_phases;

// Re-exports for ergonomics
pub use bidding::place_bid;
pub use cards::{deal_hand, Card, CardId, CardKind};
pub use errors::{CreateGameError, FlipCardError, PlaceBidError, PlayCardError};
pub use flipping::flip_card;
pub use playing::play_card;
pub use setup::create_game;
pub use snapshot::{public_view, view_for, GameView, PlayerGameView, PublicGameView};
pub use state::{round_phase, Bid, BidState, Game, PlayerId, Round, RoundPhase, Seat};
