//! Fixed rule constants shared by every layer.

/// Minimum players in a game.
pub const MIN_PLAYERS: usize = 3;
/// Maximum players in a game.
pub const MAX_PLAYERS: usize = 6;
/// Cards dealt to each player at game start; hands are never replenished.
pub const HAND_SIZE: usize = 4;
/// Flowers per hand; the remaining card is the Skull.
pub const FLOWERS_PER_HAND: usize = 3;
/// Round wins a single player needs to end the game.
pub const WINS_TO_COMPLETE: usize = 2;
