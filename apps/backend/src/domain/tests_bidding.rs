use crate::domain::bidding::place_bid;
use crate::domain::errors::{FlipCardError, PlaceBidError, PlayCardError};
use crate::domain::flipping::flip_card;
use crate::domain::playing::play_card;
use crate::domain::state::{round_phase, Bid, BidState, RoundPhase};
use crate::domain::test_state_helpers::{
    active_player, bid_and_skip_rest, eliminate_seat, new_game, play_one_card_each,
    playable_flower, test_rng,
};

#[test]
fn bidding_cannot_start_until_everyone_has_played() {
    let game = new_game(3);
    let err = place_bid(&game, &active_player(&game), Bid::Reveal(1)).unwrap_err();
    assert_eq!(err, PlaceBidError::CannotBidYet);
}

#[test]
fn a_withdrawal_cannot_open_the_bidding() {
    let game = play_one_card_each(new_game(3), &[]);
    let err = place_bid(&game, &active_player(&game), Bid::Skip).unwrap_err();
    assert_eq!(err, PlaceBidError::CannotBidYet);
}

#[test]
fn a_bid_must_beat_the_current_highest() {
    let game = play_one_card_each(new_game(3), &[]);
    // Reveal(0) never beats anything, not even an empty board.
    let err = place_bid(&game, &active_player(&game), Bid::Reveal(0)).unwrap_err();
    assert_eq!(err, PlaceBidError::MinBidNotMet);

    let game = place_bid(&game, &active_player(&game), Bid::Reveal(2)).unwrap();
    for lower in [1, 2] {
        let err = place_bid(&game, &active_player(&game), Bid::Reveal(lower)).unwrap_err();
        assert_eq!(err, PlaceBidError::MinBidNotMet);
    }
}

#[test]
fn a_bid_cannot_exceed_the_cards_in_play() {
    let game = play_one_card_each(new_game(3), &[]);
    let err = place_bid(&game, &active_player(&game), Bid::Reveal(4)).unwrap_err();
    assert_eq!(err, PlaceBidError::MaxBidExceeded);
    // Bidding every card on the table is allowed.
    assert!(place_bid(&game, &active_player(&game), Bid::Reveal(3)).is_ok());
}

#[test]
fn bidding_out_of_turn_is_rejected() {
    let game = play_one_card_each(new_game(3), &[]);
    let err = place_bid(&game, &game.players[2].clone(), Bid::Reveal(1)).unwrap_err();
    assert_eq!(err, PlaceBidError::InvalidPlayerId);
}

#[test]
fn the_last_unwithdrawn_bidder_becomes_the_flipper() {
    let game = play_one_card_each(new_game(3), &[]);
    let game = place_bid(&game, &game.players[0].clone(), Bid::Reveal(1)).unwrap();
    let game = place_bid(&game, &game.players[1].clone(), Bid::Skip).unwrap();
    let game = place_bid(&game, &game.players[2].clone(), Bid::Skip).unwrap();
    assert_eq!(game.active_seat, 0);
    assert_eq!(round_phase(&game), RoundPhase::Flipping);
    assert_eq!(game.current_round().bids[0], BidState::Placed(1));
    assert!(game.current_round().bids[1].is_skipped());
    assert!(game.current_round().bids[2].is_skipped());
}

#[test]
fn turn_order_skips_withdrawn_seats() {
    let game = play_one_card_each(new_game(4), &[]);
    let game = place_bid(&game, &game.players[0].clone(), Bid::Reveal(1)).unwrap();
    let game = place_bid(&game, &game.players[1].clone(), Bid::Skip).unwrap();
    let game = place_bid(&game, &game.players[2].clone(), Bid::Reveal(2)).unwrap();
    let game = place_bid(&game, &game.players[3].clone(), Bid::Skip).unwrap();
    // Seats 1 and 3 are out, so the turn returns to seat 0.
    assert_eq!(game.active_seat, 0);
    assert_eq!(round_phase(&game), RoundPhase::Bidding);
    let game = place_bid(&game, &game.players[0].clone(), Bid::Skip).unwrap();
    assert_eq!(game.active_seat, 2);
    assert_eq!(round_phase(&game), RoundPhase::Flipping);
}

#[test]
fn a_seat_with_no_cards_left_cannot_bid() {
    let mut game = new_game(3);
    eliminate_seat(&mut game, 2);
    let card = playable_flower(&game, 0);
    let game = play_card(&game, &game.players[0].clone(), card).unwrap();
    let card = playable_flower(&game, 1);
    let game = play_card(&game, &game.players[1].clone(), card).unwrap();

    // Plain rotation still hands the turn to the cardless seat, and the
    // round counts as fully played without it.
    assert_eq!(game.active_seat, 2);
    assert_eq!(round_phase(&game), RoundPhase::PlayCards);

    let err = place_bid(&game, &game.players[2].clone(), Bid::Reveal(1)).unwrap_err();
    assert_eq!(err, PlaceBidError::InvalidPlayerId);
}

#[test]
fn an_eliminated_seat_on_turn_has_no_legal_move() {
    let mut game = new_game(3);
    eliminate_seat(&mut game, 2);
    let card = playable_flower(&game, 0);
    let game = play_card(&game, &game.players[0].clone(), card).unwrap();
    let card = playable_flower(&game, 1);
    let game = play_card(&game, &game.players[1].clone(), card).unwrap();
    assert_eq!(game.active_seat, 2);

    // Every operation rejects; the game cannot advance past this seat.
    let p2 = game.players[2].clone();
    let own_card = game.hands[2][0].id;
    assert_eq!(
        play_card(&game, &p2, own_card).unwrap_err(),
        PlayCardError::InvalidCardId
    );
    assert_eq!(
        place_bid(&game, &p2, Bid::Skip).unwrap_err(),
        PlaceBidError::InvalidPlayerId
    );
    assert_eq!(
        flip_card(&game, &p2, 0, &mut test_rng(1)).unwrap_err(),
        FlipCardError::InvalidPlayerId
    );
}

#[test]
fn no_bids_are_accepted_once_bidding_resolves() {
    let game = bid_and_skip_rest(play_one_card_each(new_game(3), &[]), 1);
    let err = place_bid(&game, &active_player(&game), Bid::Reveal(2)).unwrap_err();
    assert_eq!(err, PlaceBidError::BiddingHasFinished);
    // Everyone else is simply out of turn.
    let bystander = game.players[(game.active_seat + 1) % 3].clone();
    let err = place_bid(&game, &bystander, Bid::Reveal(2)).unwrap_err();
    assert_eq!(err, PlaceBidError::InvalidPlayerId);
}
