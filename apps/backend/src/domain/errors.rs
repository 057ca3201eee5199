//! Closed, per-operation error taxonomies for the rules engine.
//!
//! Each engine operation returns its own error enum so call sites keep
//! exhaustive matching. A rejected transition leaves the caller's copy of
//! the prior state untouched.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CreateGameError {
    #[error("a game takes between 3 and 6 players")]
    InvalidPlayerCount,
    #[error("player ids must be distinct")]
    DuplicatePlayer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayCardError {
    #[error("not this player's turn")]
    InvalidPlayerId,
    #[error("no more cards may be played once bidding has begun")]
    CannotPlayCardAfterBid,
    #[error("card is unknown, discarded, or already played this round")]
    InvalidCardId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlaceBidError {
    #[error("not this player's turn")]
    InvalidPlayerId,
    #[error("bidding cannot start until every player has played a card")]
    CannotBidYet,
    #[error("bid exceeds the number of cards in play")]
    MaxBidExceeded,
    #[error("bid must exceed the current highest bid")]
    MinBidNotMet,
    #[error("bidding has already resolved to a single bidder")]
    BiddingHasFinished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FlipCardError {
    #[error("not this player's turn")]
    InvalidPlayerId,
    #[error("the flipper must reveal all of their own played cards first")]
    MustRevealAllOwnCardsFirst,
    #[error("the target has no unrevealed played cards left")]
    NoCardsLeftToFlip,
}
