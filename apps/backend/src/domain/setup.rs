//! Game creation.

use crate::domain::cards::deal_hand;
use crate::domain::errors::CreateGameError;
use crate::domain::rules::{MAX_PLAYERS, MIN_PLAYERS};
use crate::domain::state::{Game, PlayerId, Round};

/// Create a game for 3 to 6 distinct players.
///
/// Each player receives three Flowers and one Skull. Exactly one empty round
/// is opened and the first seat is active.
pub fn create_game(player_ids: Vec<PlayerId>) -> Result<Game, CreateGameError> {
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&player_ids.len()) {
        return Err(CreateGameError::InvalidPlayerCount);
    }
    for (i, id) in player_ids.iter().enumerate() {
        if player_ids[..i].contains(id) {
            return Err(CreateGameError::DuplicatePlayer);
        }
    }

    let seats = player_ids.len();
    Ok(Game {
        hands: (0..seats).map(|_| deal_hand()).collect(),
        players: player_ids,
        active_seat: 0,
        rounds: vec![Round::empty(seats)],
        round_wins: Vec::new(),
        complete: false,
    })
}
