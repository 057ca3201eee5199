//! Card play into the live round.

use crate::domain::cards::CardId;
use crate::domain::errors::PlayCardError;
use crate::domain::state::{seat_after, Game, PlayerId};

/// Put one of the active player's cards into play for the live round.
///
/// The card must belong to the active player, be non-discarded, and not
/// already be in play this round. The turn advances by plain rotation; skip
/// logic only exists during bidding.
pub fn play_card(game: &Game, player: &PlayerId, card: CardId) -> Result<Game, PlayCardError> {
    let seat = game
        .seat_of(player)
        .ok_or(PlayCardError::InvalidPlayerId)?;
    if game.complete || seat != game.active_seat {
        return Err(PlayCardError::InvalidPlayerId);
    }

    let round = game.current_round();
    if round.bidding_started() {
        return Err(PlayCardError::CannotPlayCardAfterBid);
    }

    let available = game.hands[seat]
        .iter()
        .any(|c| c.id == card && !c.discarded);
    if !available || round.played[seat].contains(&card) {
        return Err(PlayCardError::InvalidCardId);
    }

    let mut next = game.clone();
    next.current_round_mut().played[seat].push(card);
    next.active_seat = seat_after(seat, game.seats());
    Ok(next)
}
