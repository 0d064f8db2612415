//! Post-play board mutation: gravity compaction, then deck replenishment.
//!
//! The two phases are deliberately separate calls so the embedding
//! application can pace them (animate the slide, then the deal); the engine
//! itself completes each instantly.

use crate::board::{Board, Pos, SIZE};
use crate::deck::Deck;

/// Slide every column's cards toward the bottom row, closing gaps while
/// preserving top-to-bottom order. Columns are independent; calling this
/// twice without an intervening removal changes nothing.
pub fn compact(board: &mut Board) {
    for col in 0..SIZE as u8 {
        // Cards top-to-bottom, then re-place them flush with the bottom.
        let stack: Vec<_> = (0..SIZE as u8)
            .filter_map(|row| board.take(Pos::new(row, col)))
            .collect();
        let first_row = (SIZE - stack.len()) as u8;
        for (i, card) in stack.into_iter().enumerate() {
            board.place(Pos::new(first_row + i as u8, col), card);
        }
    }
}

/// Fill empty cells from the deck, in (row asc, col asc) order, drawing from
/// the end of the deck one card per cell. A deck that runs dry leaves the
/// remaining cells empty; that is a valid board state, not an error.
/// Returns the number of cells filled.
pub fn replenish(board: &mut Board, deck: &mut Deck) -> usize {
    let mut filled = 0;
    for pos in board.empty_positions() {
        match deck.draw() {
            Some(card) => {
                board.place(pos, card);
                filled += 1;
            }
            None => break,
        }
    }
    filled
}
