//! Core card types: CardKind, CardId, Card, and hand dealing.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::rules::{FLOWERS_PER_HAND, HAND_SIZE};

/// The two card kinds; a revealed Skull triggers the flip penalty.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Flower,
    Skull,
}

/// Opaque card identifier. Cards are always addressed by id, never by hand
/// position, so positions stay stable when cards are marked discarded.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct CardId(Uuid);

impl CardId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CardId {
    fn default() -> Self {
        Self::new()
    }
}

/// A single card in a player's hand. Cards are only ever marked discarded,
/// never removed from the hand. Whether a card is currently in play is
/// derived from round membership, not stored here.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub kind: CardKind,
    pub discarded: bool,
}

/// Deal one starting hand: three Flowers and one Skull, all available.
pub fn deal_hand() -> [Card; HAND_SIZE] {
    std::array::from_fn(|i| Card {
        id: CardId::new(),
        kind: if i < FLOWERS_PER_HAND {
            CardKind::Flower
        } else {
            CardKind::Skull
        },
        discarded: false,
    })
}
