use crate::domain::bidding::place_bid;
use crate::domain::cards::CardKind;
use crate::domain::flipping::flip_card;
use crate::domain::playing::play_card;
use crate::domain::snapshot::{public_view, view_for, GameView, PlayedCardView};
use crate::domain::state::{round_phase, Bid, BidState, PlayerId, RoundPhase};
use crate::domain::test_state_helpers::{
    active_player, bid_and_skip_rest, eliminate_seat, new_game, play_one_card_each,
    playable_flower, test_rng,
};

#[test]
fn the_phase_tracks_the_round_lifecycle() {
    let game = new_game(3);
    assert_eq!(round_phase(&game), RoundPhase::PlayFirstCards);

    let game = play_one_card_each(game, &[]);
    assert_eq!(round_phase(&game), RoundPhase::PlayCards);

    let game = place_bid(&game, &active_player(&game), Bid::Reveal(1)).unwrap();
    assert_eq!(round_phase(&game), RoundPhase::Bidding);

    let game = place_bid(&game, &active_player(&game), Bid::Skip).unwrap();
    let game = place_bid(&game, &active_player(&game), Bid::Skip).unwrap();
    assert_eq!(round_phase(&game), RoundPhase::Flipping);
}

#[test]
fn seats_with_a_card_down_can_keep_playing_while_others_wait() {
    // One play in, the round is still waiting on the remaining seats.
    let mut game = new_game(3);
    let card = playable_flower(&game, 0);
    game = play_card(&game, &game.players[0].clone(), card).unwrap();
    assert_eq!(round_phase(&game), RoundPhase::PlayFirstCards);
}

#[test]
fn the_classifier_does_not_wait_on_seats_with_no_cards_left() {
    let mut game = new_game(3);
    eliminate_seat(&mut game, 2);
    assert_eq!(round_phase(&game), RoundPhase::PlayFirstCards);

    let card = playable_flower(&game, 0);
    let game = play_card(&game, &game.players[0].clone(), card).unwrap();
    let card = playable_flower(&game, 1);
    let game = play_card(&game, &game.players[1].clone(), card).unwrap();

    // Seat 2 has nothing to contribute; the round is fully played without it.
    assert_eq!(round_phase(&game), RoundPhase::PlayCards);
    let view = public_view(&game);
    assert_eq!(view.seats[2].cards_remaining, 0);
    assert!(view.seats[2].played.is_empty());
}

#[test]
fn unrevealed_plays_stay_face_down_to_everyone() {
    let game = play_one_card_each(new_game(3), &[1]);
    let view = public_view(&game);
    for seat in &view.seats {
        assert_eq!(seat.played, vec![PlayedCardView::FaceDown]);
        assert_eq!(seat.cards_remaining, 4);
        assert_eq!(seat.bid, BidState::NotPlaced);
    }
}

#[test]
fn revealed_cards_show_their_kind_in_reveal_order() {
    let game = bid_and_skip_rest(play_one_card_each(new_game(3), &[]), 2);
    let game = flip_card(&game, &game.players[0].clone(), 0, &mut test_rng(9)).unwrap();

    let view = public_view(&game);
    assert_eq!(
        view.seats[0].played,
        vec![PlayedCardView::Revealed(CardKind::Flower)]
    );
    assert_eq!(view.seats[1].played, vec![PlayedCardView::FaceDown]);
    assert_eq!(view.phase, RoundPhase::Flipping);
    assert_eq!(view.seats[0].bid, BidState::Placed(2));
    assert!(view.seats[1].bid.is_skipped());
}

#[test]
fn a_seated_viewer_sees_their_own_hand_and_nothing_more() {
    let game = play_one_card_each(new_game(3), &[]);
    let viewer = game.players[1].clone();
    match view_for(&game, Some(&viewer)) {
        GameView::Player(player) => {
            assert_eq!(player.seat, 1);
            assert_eq!(player.hand.len(), 4);
            assert_eq!(player.played_cards.len(), 1);
            assert_eq!(player.played_cards[0].len(), 1);
            assert!(game.hands[1]
                .iter()
                .any(|c| c.id == player.played_cards[0][0]));
            // The embedded public half still masks everyone's stacks.
            assert!(player
                .public
                .seats
                .iter()
                .all(|s| s.played == vec![PlayedCardView::FaceDown]));
        }
        GameView::Public(_) => panic!("seated viewer got the public projection"),
    }
}

#[test]
fn a_player_view_keeps_played_history_per_round() {
    let game = bid_and_skip_rest(play_one_card_each(new_game(3), &[]), 1);
    let game = flip_card(&game, &game.players[0].clone(), 0, &mut test_rng(5)).unwrap();

    // Round one is won and archived; round two is live and empty.
    let viewer = game.players[0].clone();
    match view_for(&game, Some(&viewer)) {
        GameView::Player(player) => {
            assert_eq!(player.played_cards.len(), 2);
            assert_eq!(player.played_cards[0].len(), 1);
            assert!(player.played_cards[1].is_empty());
            assert!(game.hands[0]
                .iter()
                .any(|c| c.id == player.played_cards[0][0]));
        }
        GameView::Public(_) => panic!("seated viewer got the public projection"),
    }
}

#[test]
fn an_unknown_viewer_falls_back_to_the_public_projection() {
    let game = new_game(3);
    let stranger = PlayerId::from("stranger");
    assert!(matches!(
        view_for(&game, Some(&stranger)),
        GameView::Public(_)
    ));
    assert!(matches!(view_for(&game, None), GameView::Public(_)));
}

#[test]
fn views_serialize_with_tagged_shapes() {
    let game = play_one_card_each(new_game(3), &[]);
    let json = serde_json::to_value(view_for(&game, None)).unwrap();
    assert_eq!(json["view"], "Public");
    assert_eq!(json["data"]["phase"], "PlayCards");
    assert_eq!(json["data"]["round_no"], 1);
    assert_eq!(json["data"]["seats"][0]["played"][0]["state"], "FaceDown");

    let viewer = game.players[0].clone();
    let json = serde_json::to_value(view_for(&game, Some(&viewer))).unwrap();
    assert_eq!(json["view"], "Player");
    assert_eq!(json["data"]["seat"], 0);
}
