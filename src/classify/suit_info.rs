use crate::cards::{Card, Suit};

/// Whether a card group shares a single suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuitInfo {
    pub is_uniform: bool,
    pub suit: Option<Suit>,
}

impl SuitInfo {
    /// Detect a shared suit across any group size (non-empty).
    pub fn detect(cards: &[Card]) -> Self {
        let first = cards[0].suit();
        if cards.iter().all(|c| c.suit() == first) {
            SuitInfo { is_uniform: true, suit: Some(first) }
        } else {
            SuitInfo { is_uniform: false, suit: None }
        }
    }
}
