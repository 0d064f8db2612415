//! Exhaustive search for a remaining play: does any connected group of 2–5
//! occupied cells still classify to a hand?
//!
//! Connected subsets are enumerated by incremental expansion from every
//! occupied root cell. Subsets are 25-bit masks over the grid, so a visited
//! set of masks deduplicates groups reachable from multiple roots and keeps
//! the bounded (size ≤ 5) enumeration cheap even on a full board.

use crate::board::{Board, Pos, CELLS};
use crate::classify::{classify, HandKind};
use crate::connect::neighbors;
use std::collections::HashSet;

/// Per-cell king-move neighborhood as bit masks.
fn neighbor_masks() -> [u32; CELLS] {
    let mut masks = [0u32; CELLS];
    for (i, mask) in masks.iter_mut().enumerate() {
        for n in neighbors(Pos::from_index(i)) {
            *mask |= 1 << n.index();
        }
    }
    masks
}

fn mask_positions(mask: u32) -> Vec<Pos> {
    (0..CELLS).filter(|i| mask & (1 << i) != 0).map(Pos::from_index).collect()
}

/// Find one playable group, or `None` when the board is terminal.
///
/// The group returned is the first hit of the search, not the best-scoring
/// play; callers wanting a hint get a valid one, callers wanting game-over
/// detection only care that it exists.
pub fn find_playable(board: &Board) -> Option<(Vec<Pos>, HandKind)> {
    let adjacency = neighbor_masks();
    let mut occupied: u32 = 0;
    for pos in board.occupied_positions() {
        occupied |= 1 << pos.index();
    }

    let mut seen: HashSet<u32> = HashSet::new();
    let mut stack: Vec<u32> = Vec::new();

    for root in 0..CELLS {
        let root_mask = 1u32 << root;
        if occupied & root_mask == 0 || !seen.insert(root_mask) {
            continue;
        }
        stack.push(root_mask);

        while let Some(group) = stack.pop() {
            let size = group.count_ones();
            if size >= 2 {
                let positions = mask_positions(group);
                let cards = board
                    .collect_cards(&positions)
                    .expect("enumerated cells are occupied");
                if let Some(kind) = classify(&cards) {
                    return Some((positions, kind));
                }
            }
            if size == 5 {
                continue;
            }

            let mut frontier = 0u32;
            let mut members = group;
            while members != 0 {
                let i = members.trailing_zeros() as usize;
                members &= members - 1;
                frontier |= adjacency[i];
            }
            frontier &= occupied & !group;

            while frontier != 0 {
                let i = frontier.trailing_zeros();
                frontier &= frontier - 1;
                let extended = group | (1 << i);
                if seen.insert(extended) {
                    stack.push(extended);
                }
            }
        }
    }
    None
}

/// Whether the board admits no play at all: no connected group of 2–5
/// occupied cells classifies to any hand. Deck contents are irrelevant,
/// replenishment cannot happen before a cell is freed.
///
/// ```
/// use poker_grid::board::Board;
/// use poker_grid::search::is_terminal;
///
/// let lone_pair = Board::from_rows([
///     ".  .  .  .  .",
///     ".  .  .  .  .",
///     ".  .  .  .  .",
///     "Ah .  .  .  .",
///     "As .  .  .  .",
/// ]).unwrap();
/// assert!(!is_terminal(&lone_pair));
///
/// assert!(is_terminal(&Board::new()));
/// ```
pub fn is_terminal(board: &Board) -> bool {
    find_playable(board).is_none()
}
