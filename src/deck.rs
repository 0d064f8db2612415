use crate::cards::{Card, Rank, Suit};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// The ordered sequence of undealt cards.
///
/// Cards are drawn from the END of the sequence, one at a time. Together with
/// the board the deck accounts for all 52 cards of a standard deck: cards are
/// never created or destroyed mid-game, only moved between deck and board.
///
/// ```
/// use poker_grid::deck::Deck;
///
/// let mut deck = Deck::standard();
/// assert_eq!(deck.len(), 52);
/// deck.shuffle_seeded(9);
/// assert!(deck.draw().is_some());
/// assert_eq!(deck.len(), 51);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// A full, unshuffled 52-card deck.
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(52);
        for &s in Suit::ALL.iter() {
            for &r in Rank::ALL.iter() {
                cards.push(Card::new(r, s));
            }
        }
        Self { cards }
    }

    /// An empty deck; useful for fixtures exercising deck exhaustion.
    pub fn empty() -> Self {
        Self { cards: Vec::new() }
    }

    /// A deck holding exactly `cards`, drawn back-to-front.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.cards.shuffle(&mut rng);
    }

    /// Shuffle using the provided RNG.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Restore all 52 cards and shuffle them with the provided RNG.
    pub fn reset_shuffled<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        *self = Deck::standard();
        self.shuffle_with(rng);
    }

    /// Draw one card from the end of the sequence. `None` when exhausted.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Draw up to `n` cards; fewer when the deck runs out.
    pub fn draw_n(&mut self, n: usize) -> Vec<Card> {
        (0..n).filter_map(|_| self.draw()).collect()
    }
}
