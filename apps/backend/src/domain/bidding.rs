//! Bidding with skip/withdraw semantics.

use crate::domain::errors::PlaceBidError;
use crate::domain::state::{round_phase, seat_after, Bid, BidState, Game, PlayerId, RoundPhase};

/// Record a bid or a withdrawal for the active player.
///
/// A positive bid must exceed the current highest bid and may not exceed the
/// total number of cards in play. The turn advances clockwise, skipping
/// withdrawn seats. The moment exactly one seat remains un-skipped, bidding
/// resolves and that seat becomes the flipper, even mid-call.
pub fn place_bid(game: &Game, player: &PlayerId, bid: Bid) -> Result<Game, PlaceBidError> {
    let seat = game
        .seat_of(player)
        .ok_or(PlaceBidError::InvalidPlayerId)?;
    if game.complete || seat != game.active_seat {
        return Err(PlaceBidError::InvalidPlayerId);
    }
    // A seat with no cards left has nothing in play and never bids; letting
    // one become the flipper would leave the Skull penalty with no card to
    // discard.
    if game.is_eliminated(seat) {
        return Err(PlaceBidError::InvalidPlayerId);
    }

    match round_phase(game) {
        RoundPhase::PlayFirstCards => return Err(PlaceBidError::CannotBidYet),
        RoundPhase::Flipping => return Err(PlaceBidError::BiddingHasFinished),
        RoundPhase::PlayCards | RoundPhase::Bidding => {}
    }

    let round = game.current_round();
    let recorded = match bid {
        Bid::Skip => {
            // Withdrawing is only meaningful once a positive bid exists;
            // otherwise the round could end up with no bidder at all.
            if !round.bidding_started() {
                return Err(PlaceBidError::CannotBidYet);
            }
            BidState::Skipped
        }
        Bid::Reveal(n) => {
            if n as usize > round.played_total() {
                return Err(PlaceBidError::MaxBidExceeded);
            }
            if n <= round.highest_bid().unwrap_or(0) {
                return Err(PlaceBidError::MinBidNotMet);
            }
            BidState::Placed(n)
        }
    };

    let mut bids = round.bids.clone();
    bids[seat] = recorded;

    let unskipped: Vec<_> = (0..game.seats()).filter(|&s| !bids[s].is_skipped()).collect();
    let next_active = if unskipped.len() == 1 {
        // Bidding resolved: the sole remaining bidder becomes the flipper.
        unskipped[0]
    } else {
        let mut s = seat_after(seat, game.seats());
        while bids[s].is_skipped() {
            s = seat_after(s, game.seats());
        }
        s
    };

    let mut next = game.clone();
    next.current_round_mut().bids = bids;
    next.active_seat = next_active;
    Ok(next)
}
