//! Role-appropriate read projections of game state.
//!
//! `view_for` produces either a `PublicGameView` (no hand contents) or, when
//! the viewer occupies a seat, a `PlayerGameView` that adds the viewer's own
//! hand and played-card history. Unrevealed played cards never leak their
//! kind to a non-owning viewer.

use serde::{Deserialize, Serialize};

use crate::domain::cards::{Card, CardId, CardKind};
use crate::domain::state::{round_phase, BidState, Game, PlayerId, RoundPhase, Seat};

/// One entry in a seat's played stack as seen by a non-owning viewer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "kind")]
pub enum PlayedCardView {
    FaceDown,
    Revealed(CardKind),
}

/// Public facts about a single seat.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeatPublic {
    pub seat: Seat,
    pub player_id: PlayerId,
    /// Cards this seat still owns (not discarded); contents are never public.
    pub cards_remaining: u8,
    /// This seat's played stack for the live round, masked to its reveal count.
    pub played: Vec<PlayedCardView>,
    pub bid: BidState,
    pub round_wins: u8,
}

/// What any observer may see.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PublicGameView {
    pub phase: RoundPhase,
    pub active_seat: Seat,
    /// 1-based number of the live round.
    pub round_no: usize,
    pub seats: Vec<SeatPublic>,
    pub complete: bool,
}

/// Public view enriched with the viewer's own private information.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerGameView {
    pub public: PublicGameView,
    pub seat: Seat,
    /// The viewer's own four cards, including discard flags.
    pub hand: Vec<Card>,
    /// Ids of the viewer's own played cards, one list per round in round
    /// order; the last list is the live round.
    pub played_cards: Vec<Vec<CardId>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "view", content = "data")]
pub enum GameView {
    Public(PublicGameView),
    Player(PlayerGameView),
}

/// Project the game for an optional viewer identity.
pub fn view_for(game: &Game, viewer: Option<&PlayerId>) -> GameView {
    match viewer.and_then(|p| game.seat_of(p)) {
        Some(seat) => GameView::Player(PlayerGameView {
            public: public_view(game),
            seat,
            hand: game.hands[seat].to_vec(),
            played_cards: game
                .rounds
                .iter()
                .map(|r| r.played[seat].clone())
                .collect(),
        }),
        None => GameView::Public(public_view(game)),
    }
}

/// Entry point for the no-hand projection. Never panics; inconsistent ids
/// degrade to face-down entries.
pub fn public_view(game: &Game) -> PublicGameView {
    let round = game.current_round();
    let seats = (0..game.seats())
        .map(|s| {
            let revealed = round.reveal_count(s);
            let played = round.played[s]
                .iter()
                .enumerate()
                .map(|(i, &id)| match game.card_kind(s, id) {
                    Some(kind) if i < revealed => PlayedCardView::Revealed(kind),
                    _ => PlayedCardView::FaceDown,
                })
                .collect();

            SeatPublic {
                seat: s,
                player_id: game.players[s].clone(),
                cards_remaining: game.hands[s].iter().filter(|c| !c.discarded).count() as u8,
                played,
                bid: round.bids[s],
                round_wins: game.wins_for(s) as u8,
            }
        })
        .collect();

    PublicGameView {
        phase: round_phase(game),
        active_seat: game.active_seat,
        round_no: game.rounds.len(),
        seats,
        complete: game.complete,
    }
}
