use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

use crate::domain::cards::{Card, CardId, CardKind};
use crate::domain::rules::HAND_SIZE;

/// External player identity, fixed for the game's lifetime.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for PlayerId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for PlayerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Positional index into `Game::players`; meaning depends on phase
/// (card-player, bidder, or flipper).
pub type Seat = usize;

/// A player's bid submission for the current round.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Bid {
    /// Withdraw from this round's bidding.
    Skip,
    /// Commit to revealing `n` cards without exposing a Skull.
    Reveal(u8),
}

/// Per-seat bid state within a round.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum BidState {
    /// No bid recorded yet this round.
    #[default]
    NotPlaced,
    /// An active bid of `n` reveals.
    Placed(u8),
    /// Withdrawn from this round's bidding.
    Skipped,
}

impl BidState {
    pub fn is_skipped(&self) -> bool {
        matches!(self, BidState::Skipped)
    }

    /// The active bid value, if one is placed.
    pub fn placed(&self) -> Option<u8> {
        match self {
            BidState::Placed(n) => Some(*n),
            _ => None,
        }
    }
}

/// One bidding-and-flipping cycle. History is retained: the last element of
/// `Game::rounds` is the live round, earlier rounds are an audit trail.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Round {
    /// Per-seat card ids put into play this round, in play order (append-only).
    pub played: Vec<Vec<CardId>>,
    /// Per-seat bid state.
    pub bids: Vec<BidState>,
    /// One seat entry per flip taken this round, in chronological order.
    /// Repeated entries are expected; each repeat advances that seat's next
    /// unrevealed card.
    pub reveals: Vec<Seat>,
}

impl Round {
    pub fn empty(seats: usize) -> Self {
        Self {
            played: vec![Vec::new(); seats],
            bids: vec![BidState::NotPlaced; seats],
            reveals: Vec::new(),
        }
    }

    /// Total cards played by all seats this round; the theoretical maximum
    /// reveal count and therefore the bid ceiling.
    pub fn played_total(&self) -> usize {
        self.played.iter().map(Vec::len).sum()
    }

    /// How many of `seat`'s played cards have been revealed this round.
    pub fn reveal_count(&self, seat: Seat) -> usize {
        self.reveals.iter().filter(|&&s| s == seat).count()
    }

    /// Highest active bid this round, if any.
    pub fn highest_bid(&self) -> Option<u8> {
        self.bids.iter().filter_map(BidState::placed).max()
    }

    /// True once any seat has placed a positive bid this round.
    pub fn bidding_started(&self) -> bool {
        self.bids.iter().any(|b| b.placed().is_some())
    }

    /// Seats that have not withdrawn from bidding.
    pub fn unskipped_seats(&self) -> Vec<Seat> {
        (0..self.bids.len())
            .filter(|&s| !self.bids[s].is_skipped())
            .collect()
    }
}

/// Phase of the live round, derived from current-round data only. Clients
/// use this to decide which action is legal next.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Not every (non-eliminated) seat has played a card yet.
    PlayFirstCards,
    /// All seats have played; no bid placed yet.
    PlayCards,
    /// Bidding underway; more than one seat remains un-skipped.
    Bidding,
    /// Bidding resolved; the sole remaining bidder flips.
    Flipping,
}

/// Entire game container, sufficient for pure domain operations.
///
/// Every transition builds and returns a new `Game` value; internal
/// collections are never aliased between old and new states.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Game {
    /// Seat-ordered player identities, fixed for the game's lifetime.
    pub players: Vec<PlayerId>,
    /// Per-seat hands of four cards, dealt once at game start.
    pub hands: Vec<[Card; HAND_SIZE]>,
    /// Seat expected to act next; meaning depends on the current phase.
    pub active_seat: Seat,
    /// Round history, append-only; the last element is the live round.
    pub rounds: Vec<Round>,
    /// One seat entry per round won (bid met without exposing a Skull).
    pub round_wins: Vec<Seat>,
    /// Permanently true once a seat accrues two round wins.
    pub complete: bool,
}

impl Game {
    pub fn seats(&self) -> usize {
        self.players.len()
    }

    /// Seat occupied by `player`, if they are in this game.
    pub fn seat_of(&self, player: &PlayerId) -> Option<Seat> {
        self.players.iter().position(|p| p == player)
    }

    /// The live round. A game always holds at least one round from creation.
    pub fn current_round(&self) -> &Round {
        self.rounds.last().expect("a game always has a live round")
    }

    pub(crate) fn current_round_mut(&mut self) -> &mut Round {
        self.rounds
            .last_mut()
            .expect("a game always has a live round")
    }

    /// A seat with all four cards discarded can no longer participate.
    pub fn is_eliminated(&self, seat: Seat) -> bool {
        self.hands[seat].iter().all(|c| c.discarded)
    }

    /// Kind of the card `id` in `seat`'s hand, if it exists there.
    pub fn card_kind(&self, seat: Seat, id: CardId) -> Option<CardKind> {
        self.hands
            .get(seat)?
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.kind)
    }

    /// Round wins accrued by `seat`.
    pub fn wins_for(&self, seat: Seat) -> usize {
        self.round_wins.iter().filter(|&&w| w == seat).count()
    }

    /// True once every seat that still holds cards has played at least one
    /// card this round.
    pub fn everyone_has_played(&self) -> bool {
        let round = self.current_round();
        (0..self.seats())
            .filter(|&s| !self.is_eliminated(s))
            .all(|s| !round.played[s].is_empty())
    }
}

/// Next seat clockwise (plain rotation, no skip logic).
#[inline]
pub fn seat_after(seat: Seat, seats: usize) -> Seat {
    (seat + 1) % seats
}

/// Classify the live round. Computed from current-round data only.
pub fn round_phase(game: &Game) -> RoundPhase {
    if !game.everyone_has_played() {
        return RoundPhase::PlayFirstCards;
    }
    let round = game.current_round();
    if !round.bidding_started() {
        return RoundPhase::PlayCards;
    }
    if round.unskipped_seats().len() > 1 {
        RoundPhase::Bidding
    } else {
        RoundPhase::Flipping
    }
}
