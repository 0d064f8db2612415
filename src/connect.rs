//! King-move adjacency and connectivity over board positions.
//!
//! Two cells are adjacent when both their row and column differ by at most 1
//! (Chebyshev distance 1). Connectivity is purely positional; card ranks and
//! suits never enter into it.

use crate::board::{Pos, SIZE};

/// Chebyshev distance between two cells.
pub fn chebyshev(a: Pos, b: Pos) -> u8 {
    let dr = (a.row() as i8 - b.row() as i8).unsigned_abs();
    let dc = (a.col() as i8 - b.col() as i8).unsigned_abs();
    dr.max(dc)
}

/// Whether two distinct cells touch, diagonals included.
pub fn are_adjacent(a: Pos, b: Pos) -> bool {
    chebyshev(a, b) == 1
}

/// In-bounds king-move neighbors of a cell (3 to 8 of them).
pub fn neighbors(pos: Pos) -> impl Iterator<Item = Pos> {
    let (row, col) = (pos.row() as i8, pos.col() as i8);
    (-1i8..=1)
        .flat_map(move |dr| (-1i8..=1).map(move |dc| (row + dr, col + dc)))
        .filter(move |&(r, c)| {
            (r, c) != (row, col) && (0..SIZE as i8).contains(&r) && (0..SIZE as i8).contains(&c)
        })
        .map(|(r, c)| Pos::new(r as u8, c as u8))
}

/// Whether `positions` form a single connected component under king-move
/// adjacency. Sets of size 0 or 1 are trivially connected.
///
/// ```
/// use poker_grid::board::Pos;
/// use poker_grid::connect::is_connected;
///
/// let diagonal = [Pos::new(0, 0), Pos::new(1, 1)];
/// assert!(is_connected(&diagonal));
///
/// let gap = [Pos::new(0, 0), Pos::new(0, 2)];
/// assert!(!is_connected(&gap));
/// ```
pub fn is_connected(positions: &[Pos]) -> bool {
    if positions.len() <= 1 {
        return true;
    }
    let mut visited = vec![false; positions.len()];
    let mut stack = vec![0usize];
    visited[0] = true;
    let mut reached = 1;
    while let Some(i) = stack.pop() {
        for (j, &other) in positions.iter().enumerate() {
            if !visited[j] && are_adjacent(positions[i], other) {
                visited[j] = true;
                reached += 1;
                stack.push(j);
            }
        }
    }
    reached == positions.len()
}

/// Whether `candidate` can join `positions` and keep the set connected.
/// Joining an empty set is always allowed.
pub fn extends(positions: &[Pos], candidate: Pos) -> bool {
    positions.is_empty() || positions.iter().any(|&p| are_adjacent(p, candidate))
}
