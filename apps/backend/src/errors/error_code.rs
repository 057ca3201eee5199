//! Stable error codes for the Skull backend.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings an
//! excluded transport layer surfaces to clients. Add new codes here; never
//! pass ad-hoc strings as error codes.

use core::fmt;

/// Centralized error codes for the Skull backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Game creation
    /// Player count outside 3..=6
    InvalidPlayerCount,
    /// Duplicate player id in the roster
    DuplicatePlayer,

    // Turn submission
    /// Acting player is unknown or not the active player
    OutOfTurn,
    /// Card is unknown, discarded, or already played this round
    InvalidCard,
    /// Card play attempted after bidding began
    CardPlayAfterBid,
    /// Bid (or withdrawal) before it is permitted
    BidTooEarly,
    /// Bid exceeds the number of cards in play
    BidTooHigh,
    /// Bid does not exceed the current highest bid
    BidTooLow,
    /// Bidding already resolved to a single bidder
    BiddingFinished,
    /// Flip targeted another seat before the flipper's own stack was exhausted
    MustRevealOwnFirst,
    /// Flip target has no unrevealed played cards
    NoCardsToFlip,
    /// General validation error
    ValidationError,

    // Storage
    /// Game not found
    GameNotFound,
    /// Resource not found
    NotFound,
    /// Version token mismatch; caller must reload and retry
    OptimisticLock,
    /// General conflict
    Conflict,
    /// Underlying storage failure
    StorageError,
    /// Internal error
    Internal,
}

impl ErrorCode {
    /// Canonical SCREAMING_SNAKE_CASE representation.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidPlayerCount => "INVALID_PLAYER_COUNT",
            ErrorCode::DuplicatePlayer => "DUPLICATE_PLAYER",
            ErrorCode::OutOfTurn => "OUT_OF_TURN",
            ErrorCode::InvalidCard => "INVALID_CARD",
            ErrorCode::CardPlayAfterBid => "CARD_PLAY_AFTER_BID",
            ErrorCode::BidTooEarly => "BID_TOO_EARLY",
            ErrorCode::BidTooHigh => "BID_TOO_HIGH",
            ErrorCode::BidTooLow => "BID_TOO_LOW",
            ErrorCode::BiddingFinished => "BIDDING_FINISHED",
            ErrorCode::MustRevealOwnFirst => "MUST_REVEAL_OWN_FIRST",
            ErrorCode::NoCardsToFlip => "NO_CARDS_TO_FLIP",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::GameNotFound => "GAME_NOT_FOUND",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::OptimisticLock => "OPTIMISTIC_LOCK",
            ErrorCode::Conflict => "CONFLICT",
            ErrorCode::StorageError => "STORAGE_ERROR",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
