use crate::cards::{Card, CardParseError};
use std::fmt;
use std::str::FromStr;

/// Side length of the square board.
pub const SIZE: usize = 5;

/// Number of cells on the board.
pub const CELLS: usize = SIZE * SIZE;

/// A board cell address. Row 0 is the top, row 4 the bottom; gravity pulls
/// cards toward higher row indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    row: u8,
    col: u8,
}

impl Pos {
    /// Build a position. Out-of-range coordinates are a caller bug.
    pub const fn new(row: u8, col: u8) -> Self {
        debug_assert!((row as usize) < SIZE && (col as usize) < SIZE);
        Self { row, col }
    }

    pub const fn row(self) -> u8 {
        self.row
    }
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Row-major cell index in `0..CELLS`.
    pub const fn index(self) -> usize {
        self.row as usize * SIZE + self.col as usize
    }

    pub const fn from_index(i: usize) -> Self {
        debug_assert!(i < CELLS);
        Self { row: (i / SIZE) as u8, col: (i % SIZE) as u8 }
    }

    /// All in-bounds positions in row-major order.
    pub fn all() -> impl Iterator<Item = Pos> {
        (0..CELLS).map(Pos::from_index)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BoardSetupError {
    #[error("row {0} has {1} cells, expected {SIZE}")]
    WrongRowWidth(usize, usize),
    #[error("card parse error: {0}")]
    Card(#[from] CardParseError),
    #[error("card {0} appears more than once")]
    DuplicateCard(Card),
}

/// The 5×5 grid of cells, each empty or holding exactly one card.
///
/// ```
/// use poker_grid::board::{Board, Pos};
///
/// let board = Board::from_rows([
///     ".  .  .  .  .",
///     ".  .  .  .  .",
///     ".  .  .  .  .",
///     "Ah .  .  .  .",
///     "As .  .  .  .",
/// ]).unwrap();
/// assert_eq!(board.occupied_count(), 2);
/// assert!(board.card_at(Pos::new(3, 0)).is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Card>; CELLS],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// A fully empty board.
    pub const fn new() -> Self {
        Self { cells: [None; CELLS] }
    }

    /// Build a board from five rows of whitespace-separated tokens, `.` for an
    /// empty cell. Intended for tests and fixtures.
    pub fn from_rows(rows: [&str; SIZE]) -> Result<Self, BoardSetupError> {
        let mut board = Board::new();
        for (r, row) in rows.iter().enumerate() {
            let tokens: Vec<&str> = row.split_whitespace().collect();
            if tokens.len() != SIZE {
                return Err(BoardSetupError::WrongRowWidth(r, tokens.len()));
            }
            for (c, token) in tokens.iter().enumerate() {
                if *token == "." {
                    continue;
                }
                let card = Card::from_str(token)?;
                let pos = Pos::new(r as u8, c as u8);
                if board.position_of(card).is_some() {
                    return Err(BoardSetupError::DuplicateCard(card));
                }
                board.place(pos, card);
            }
        }
        Ok(board)
    }

    pub fn card_at(&self, pos: Pos) -> Option<Card> {
        self.cells[pos.index()]
    }

    pub fn is_empty_at(&self, pos: Pos) -> bool {
        self.cells[pos.index()].is_none()
    }

    /// Put a card into an empty cell. Double occupancy or a card already
    /// somewhere on the board is an engine defect.
    pub fn place(&mut self, pos: Pos, card: Card) {
        debug_assert!(self.cells[pos.index()].is_none(), "cell {pos} already occupied");
        debug_assert!(self.position_of(card).is_none(), "card {card} already on board");
        self.cells[pos.index()] = Some(card);
    }

    /// Remove and return the card at `pos`, if any.
    pub fn take(&mut self, pos: Pos) -> Option<Card> {
        self.cells[pos.index()].take()
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }

    pub fn is_cleared(&self) -> bool {
        self.cells.iter().all(|c| c.is_none())
    }

    /// All occupied positions in row-major order.
    pub fn occupied_positions(&self) -> Vec<Pos> {
        Pos::all().filter(|p| self.cells[p.index()].is_some()).collect()
    }

    /// All empty positions in row-major order, the replenishment fill order.
    pub fn empty_positions(&self) -> Vec<Pos> {
        Pos::all().filter(|p| self.cells[p.index()].is_none()).collect()
    }

    /// Where a card currently sits, if anywhere.
    pub fn position_of(&self, card: Card) -> Option<Pos> {
        Pos::all().find(|p| self.cells[p.index()] == Some(card))
    }

    /// The cards at `positions`, or `None` when any cell is empty.
    pub fn collect_cards(&self, positions: &[Pos]) -> Option<Vec<Card>> {
        positions.iter().map(|&p| self.card_at(p)).collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..SIZE {
            for col in 0..SIZE {
                let pos = Pos::new(row as u8, col as u8);
                match self.card_at(pos) {
                    Some(card) => write!(f, "{:<4}", card.to_string())?,
                    None => write!(f, "{:<4}", ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn pos_index_round_trips() {
        for i in 0..CELLS {
            assert_eq!(Pos::from_index(i).index(), i);
        }
        assert_eq!(Pos::new(4, 4).index(), 24);
    }

    #[test]
    fn place_take_and_lookup() {
        let mut b = Board::new();
        let ah = Card::new(Rank::Ace, Suit::Hearts);
        let p = Pos::new(2, 3);
        b.place(p, ah);
        assert_eq!(b.card_at(p), Some(ah));
        assert_eq!(b.position_of(ah), Some(p));
        assert_eq!(b.occupied_count(), 1);
        assert_eq!(b.take(p), Some(ah));
        assert!(b.is_cleared());
        assert_eq!(b.take(p), None);
    }

    #[test]
    fn from_rows_parses_fixture() {
        let b = Board::from_rows([
            "Ah Kh Qh Jh 10h",
            ".  .  .  .  .",
            ".  .  2c .  .",
            ".  .  .  .  .",
            ".  .  .  .  2d",
        ])
        .unwrap();
        assert_eq!(b.occupied_count(), 7);
        assert_eq!(b.card_at(Pos::new(0, 4)), Some(Card::new(Rank::Ten, Suit::Hearts)));
        assert_eq!(b.card_at(Pos::new(4, 4)), Some(Card::new(Rank::Two, Suit::Diamonds)));
        assert!(b.is_empty_at(Pos::new(1, 0)));
    }

    #[test]
    fn from_rows_rejects_duplicates_and_bad_rows() {
        let dup = Board::from_rows([
            "Ah .  .  .  .",
            "Ah .  .  .  .",
            ".  .  .  .  .",
            ".  .  .  .  .",
            ".  .  .  .  .",
        ]);
        assert!(matches!(dup, Err(BoardSetupError::DuplicateCard(_))));

        let short = Board::from_rows([
            "Ah .  .  .",
            ".  .  .  .  .",
            ".  .  .  .  .",
            ".  .  .  .  .",
            ".  .  .  .  .",
        ]);
        assert!(matches!(short, Err(BoardSetupError::WrongRowWidth(0, 4))));
    }

    #[test]
    fn display_renders_five_rows() {
        let mut b = Board::new();
        b.place(Pos::new(0, 0), Card::new(Rank::Ten, Suit::Hearts));
        let text = b.to_string();
        assert_eq!(text.lines().count(), 5);
        assert!(text.starts_with("10h"));
        assert!(text.contains('.'));
    }

    #[test]
    fn empty_positions_are_row_major() {
        let mut b = Board::new();
        b.place(Pos::new(0, 0), Card::new(Rank::Two, Suit::Clubs));
        let empties = b.empty_positions();
        assert_eq!(empties.len(), CELLS - 1);
        assert_eq!(empties[0], Pos::new(0, 1));
        assert_eq!(*empties.last().unwrap(), Pos::new(4, 4));
    }
}
