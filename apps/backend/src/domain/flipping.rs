//! Card-flip resolution: reveals, the Skull penalty, and round/game endings.

use rand::Rng;

use crate::domain::cards::CardKind;
use crate::domain::errors::FlipCardError;
use crate::domain::rules::WINS_TO_COMPLETE;
use crate::domain::state::{round_phase, Game, PlayerId, Round, RoundPhase, Seat};

/// Reveal the target seat's next unrevealed played card, in that seat's play
/// order (FIFO, never chosen ad hoc).
///
/// The caller must be the resolved bidder and must exhaust their own stack
/// before targeting anyone else.
///
/// A revealed Skull starts a fresh round, discards one card drawn uniformly
/// at random from the flipper's non-discarded cards (`rng` is the injected
/// source of that draw), and hands the next round's opening to the target.
/// A revealed Flower that brings the reveal count up to the winning bid wins
/// the round for the flipper; a second such win completes the game.
pub fn flip_card(
    game: &Game,
    player: &PlayerId,
    target: Seat,
    rng: &mut impl Rng,
) -> Result<Game, FlipCardError> {
    let seat = game
        .seat_of(player)
        .ok_or(FlipCardError::InvalidPlayerId)?;
    if game.complete || seat != game.active_seat {
        return Err(FlipCardError::InvalidPlayerId);
    }
    if round_phase(game) != RoundPhase::Flipping {
        return Err(FlipCardError::InvalidPlayerId);
    }

    let round = game.current_round();
    if target != seat && round.reveal_count(seat) < round.played[seat].len() {
        return Err(FlipCardError::MustRevealAllOwnCardsFirst);
    }
    if target >= game.seats() || round.reveal_count(target) >= round.played[target].len() {
        return Err(FlipCardError::NoCardsLeftToFlip);
    }

    let card_id = round.played[target][round.reveal_count(target)];
    let kind = game
        .card_kind(target, card_id)
        .expect("played card ids always resolve to the owner's hand");

    let mut next = game.clone();
    next.current_round_mut().reveals.push(target);

    match kind {
        CardKind::Skull => {
            // The flipper, not the target, loses one card.
            let available: Vec<usize> = next.hands[seat]
                .iter()
                .enumerate()
                .filter(|(_, c)| !c.discarded)
                .map(|(i, _)| i)
                .collect();
            if !available.is_empty() {
                let pick = available[rng.random_range(0..available.len())];
                next.hands[seat][pick].discarded = true;
            }

            next.rounds.push(Round::empty(next.seats()));
            next.active_seat = target;
        }
        CardKind::Flower => {
            let bid = next.current_round().highest_bid().unwrap_or(0) as usize;
            if next.current_round().reveals.len() == bid {
                next.round_wins.push(seat);
                if next.wins_for(seat) >= WINS_TO_COMPLETE {
                    next.complete = true;
                } else {
                    next.rounds.push(Round::empty(next.seats()));
                    next.active_seat = seat;
                }
            }
            // Bid not yet reached: the reveal is recorded and the flipper
            // keeps flipping.
        }
    }

    Ok(next)
}
