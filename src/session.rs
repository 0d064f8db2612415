use crate::board::{Board, Pos};
use crate::cards::Card;
use crate::classify::{classify, HandKind};
use crate::connect::{extends, is_connected};
use crate::deck::Deck;
use crate::mutate;
use crate::score::ScoreTracker;
use crate::search;
use rand::Rng;

/// A selection never grows past one full hand.
pub const MAX_SELECTION: usize = 5;

/// Smallest playable group (a pair).
pub const MIN_PLAY: usize = 2;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SelectError {
    #[error("cell {0} is empty")]
    EmptyCell(Pos),
    #[error("cell {0} is already selected")]
    AlreadySelected(Pos),
    #[error("selection already holds {MAX_SELECTION} cards")]
    SelectionFull,
    #[error("cell {0} does not touch the current selection")]
    Disconnected(Pos),
    #[error("cell {0} is not selected")]
    NotSelected(Pos),
    #[error("deselecting {0} would split the selection")]
    WouldSplit(Pos),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PlayError {
    #[error("a play needs at least {MIN_PLAY} cards, selection holds {0}")]
    TooFewCards(usize),
    #[error("selected cards form no hand")]
    NoHand,
}

/// What an accepted play removed and scored.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct PlayOutcome {
    pub kind: HandKind,
    pub points: u32,
    pub positions: Vec<Pos>,
    pub cards: Vec<Card>,
}

/// One player's complete game state: board, undealt deck, in-progress
/// selection, running score, and the terminal flag.
///
/// Every operation is synchronous and mutates nothing on rejection. The
/// post-play phases (`compact`, `replenish`, `refresh_game_over`) are
/// separate calls so the embedding application controls pacing; `advance`
/// runs all three for callers that don't.
///
/// ```
/// use poker_grid::session::GameSession;
///
/// let session = GameSession::new_seeded(7);
/// assert_eq!(session.board().occupied_count(), 25);
/// assert_eq!(session.deck_len(), 27);
/// assert!(!session.is_game_over());
/// ```
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    deck: Deck,
    selection: Vec<Pos>,
    discards: Vec<Card>,
    score: ScoreTracker,
    game_over: bool,
}

impl GameSession {
    /// Fresh game: full shuffled deck, 25-card deal.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Deck::standard();
        deck.shuffle_with(rng);
        Self::start(deck)
    }

    /// Fresh game from a seed, reproducible deal included.
    pub fn new_seeded(seed: u64) -> Self {
        let mut deck = Deck::standard();
        deck.shuffle_seeded(seed);
        Self::start(deck)
    }

    /// Resume or stage a game from explicit board and deck state. Used by
    /// scenario tests and by applications restoring a game.
    pub fn from_parts(board: Board, deck: Deck) -> Self {
        let game_over = search::is_terminal(&board);
        Self {
            board,
            deck,
            selection: Vec::new(),
            discards: Vec::new(),
            score: ScoreTracker::new(),
            game_over,
        }
    }

    fn start(mut deck: Deck) -> Self {
        let mut board = Board::new();
        mutate::replenish(&mut board, &mut deck);
        Self::from_parts(board, deck)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    /// Cards removed by accepted plays, oldest first. Played cards never
    /// return to the deck; the pile keeps the 52-card accounting exact:
    /// deck + board + discards is constant for the life of a game.
    pub fn discards(&self) -> &[Card] {
        &self.discards
    }

    /// Positions currently selected, in selection order.
    pub fn selection(&self) -> &[Pos] {
        &self.selection
    }

    /// The cards under the current selection.
    pub fn selected_cards(&self) -> Vec<Card> {
        self.board
            .collect_cards(&self.selection)
            .expect("selection only ever covers occupied cells")
    }

    pub fn score(&self) -> u32 {
        self.score.total()
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Add a cell to the selection.
    ///
    /// Rejected without mutation when the cell is empty, already selected,
    /// the selection is full, or the cell touches no selected cell. The
    /// selection is a connected component at all times, not only at play
    /// time.
    pub fn try_select(&mut self, pos: Pos) -> Result<(), SelectError> {
        if self.selection.contains(&pos) {
            return Err(SelectError::AlreadySelected(pos));
        }
        if self.board.is_empty_at(pos) {
            return Err(SelectError::EmptyCell(pos));
        }
        if self.selection.len() >= MAX_SELECTION {
            return Err(SelectError::SelectionFull);
        }
        if !extends(&self.selection, pos) {
            return Err(SelectError::Disconnected(pos));
        }
        self.selection.push(pos);
        debug_assert!(is_connected(&self.selection));
        Ok(())
    }

    /// Remove one cell from the selection, the way a tap-to-untap UI does.
    ///
    /// Rejected when the cell is not selected or when removing it would
    /// split the remainder into disconnected pieces.
    pub fn try_deselect(&mut self, pos: Pos) -> Result<(), SelectError> {
        let Some(idx) = self.selection.iter().position(|&p| p == pos) else {
            return Err(SelectError::NotSelected(pos));
        };
        let mut remainder = self.selection.clone();
        remainder.remove(idx);
        if !is_connected(&remainder) {
            return Err(SelectError::WouldSplit(pos));
        }
        self.selection = remainder;
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Cells that could join the current selection: occupied, unselected,
    /// and touching it. The whole occupied board when nothing is selected;
    /// empty when the selection is full.
    pub fn eligible_extensions(&self) -> Vec<Pos> {
        if self.selection.len() >= MAX_SELECTION {
            return Vec::new();
        }
        self.board
            .occupied_positions()
            .into_iter()
            .filter(|&p| !self.selection.contains(&p) && extends(&self.selection, p))
            .collect()
    }

    /// Play the current selection. On success the cards leave the board, the
    /// score grows, and the selection clears; the board stays un-compacted
    /// until [`GameSession::compact`]. On rejection nothing changes.
    pub fn try_play(&mut self) -> Result<PlayOutcome, PlayError> {
        if self.selection.len() < MIN_PLAY {
            return Err(PlayError::TooFewCards(self.selection.len()));
        }
        let cards = self.selected_cards();
        let kind = classify(&cards).ok_or(PlayError::NoHand)?;

        let positions = std::mem::take(&mut self.selection);
        for &pos in &positions {
            let removed = self.board.take(pos);
            debug_assert!(removed.is_some());
            self.discards.extend(removed);
        }
        let points = self.score.add(kind);
        Ok(PlayOutcome { kind, points, positions, cards })
    }

    /// Gravity phase. Drops any in-progress selection, positions would go
    /// stale under the shift.
    pub fn compact(&mut self) {
        self.selection.clear();
        let occupied = self.board.occupied_count();
        mutate::compact(&mut self.board);
        debug_assert_eq!(self.board.occupied_count(), occupied);
    }

    /// Deal phase; returns the number of cells filled. Deck exhaustion is
    /// not an error, the board simply stays sparse.
    pub fn replenish(&mut self) -> usize {
        self.selection.clear();
        let deck_before = self.deck.len();
        let filled = mutate::replenish(&mut self.board, &mut self.deck);
        debug_assert_eq!(deck_before - self.deck.len(), filled);
        filled
    }

    /// Re-run terminal detection against the current board and record it.
    pub fn refresh_game_over(&mut self) -> bool {
        self.game_over = search::is_terminal(&self.board);
        self.game_over
    }

    /// Whether the current board admits no play. Pure query; does not touch
    /// the recorded flag.
    pub fn is_terminal(&self) -> bool {
        search::is_terminal(&self.board)
    }

    /// A playable group on the current board, if one exists.
    pub fn find_playable(&self) -> Option<(Vec<Pos>, HandKind)> {
        search::find_playable(&self.board)
    }

    /// Convenience: compact, replenish, then refresh the terminal flag.
    /// Returns `true` when the game just ended.
    pub fn advance(&mut self) -> bool {
        self.compact();
        self.replenish();
        self.refresh_game_over()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn session_from_rows(rows: [&str; 5], deck: &str) -> GameSession {
        let board = Board::from_rows(rows).unwrap();
        let deck = Deck::from_cards(parse_cards(deck).unwrap());
        GameSession::from_parts(board, deck)
    }

    #[test]
    fn new_game_deals_twenty_five() {
        let s = GameSession::new_seeded(123);
        assert_eq!(s.board().occupied_count(), 25);
        assert_eq!(s.deck_len(), 27);
        assert_eq!(s.score(), 0);
        assert!(s.selection().is_empty());
    }

    #[test]
    fn seeded_games_are_identical() {
        let a = GameSession::new_seeded(5);
        let b = GameSession::new_seeded(5);
        assert_eq!(a.board(), b.board());
    }

    #[test]
    fn select_rejects_empty_cell_and_gap() {
        let mut s = session_from_rows(
            [
                "2c .  2d .  .",
                ".  .  .  .  .",
                ".  .  .  .  .",
                ".  .  .  .  .",
                ".  .  .  .  .",
            ],
            "",
        );
        s.try_select(Pos::new(0, 0)).unwrap();
        assert_eq!(
            s.try_select(Pos::new(0, 1)),
            Err(SelectError::EmptyCell(Pos::new(0, 1)))
        );
        assert_eq!(
            s.try_select(Pos::new(0, 2)),
            Err(SelectError::Disconnected(Pos::new(0, 2)))
        );
        assert_eq!(s.selection().len(), 1);
    }

    #[test]
    fn select_caps_at_five() {
        let mut s = session_from_rows(
            [
                "2c 3c 4c 5c 6c",
                "7c .  .  .  .",
                ".  .  .  .  .",
                ".  .  .  .  .",
                ".  .  .  .  .",
            ],
            "",
        );
        for col in 0..5 {
            s.try_select(Pos::new(0, col)).unwrap();
        }
        assert_eq!(s.try_select(Pos::new(1, 0)), Err(SelectError::SelectionFull));
    }

    #[test]
    fn reselecting_a_cell_is_rejected() {
        let mut s = session_from_rows(
            [
                "2c 3c .  .  .",
                ".  .  .  .  .",
                ".  .  .  .  .",
                ".  .  .  .  .",
                ".  .  .  .  .",
            ],
            "",
        );
        s.try_select(Pos::new(0, 0)).unwrap();
        assert_eq!(
            s.try_select(Pos::new(0, 0)),
            Err(SelectError::AlreadySelected(Pos::new(0, 0)))
        );
        assert_eq!(s.selection().len(), 1);
    }

    #[test]
    fn deselect_drops_cells_unless_it_splits() {
        let mut s = session_from_rows(
            [
                "2c 3c 4c .  .",
                ".  .  .  .  .",
                ".  .  .  .  .",
                ".  .  .  .  .",
                ".  .  .  .  .",
            ],
            "",
        );
        for col in 0..3 {
            s.try_select(Pos::new(0, col)).unwrap();
        }
        // Dropping the middle card would leave (0,0) and (0,2) split.
        assert_eq!(
            s.try_deselect(Pos::new(0, 1)),
            Err(SelectError::WouldSplit(Pos::new(0, 1)))
        );
        // Dropping an end card is fine; dropping it twice is not.
        s.try_deselect(Pos::new(0, 2)).unwrap();
        assert_eq!(
            s.try_deselect(Pos::new(0, 2)),
            Err(SelectError::NotSelected(Pos::new(0, 2)))
        );
        assert_eq!(s.selection().len(), 2);
    }

    #[test]
    fn eligible_extensions_track_the_selection() {
        let mut s = session_from_rows(
            [
                "2c 3c .  .  2d",
                ".  .  .  .  .",
                ".  .  .  .  .",
                ".  .  .  .  .",
                ".  .  .  .  .",
            ],
            "",
        );
        assert_eq!(s.eligible_extensions().len(), 3);
        s.try_select(Pos::new(0, 0)).unwrap();
        assert_eq!(s.eligible_extensions(), vec![Pos::new(0, 1)]);
        s.try_select(Pos::new(0, 1)).unwrap();
        assert!(s.eligible_extensions().is_empty());
    }

    #[test]
    fn play_rejects_short_and_handless_selections() {
        let mut s = session_from_rows(
            [
                "2c 3d .  .  .",
                ".  .  .  .  .",
                ".  .  .  .  .",
                ".  .  .  .  .",
                ".  .  .  .  .",
            ],
            "",
        );
        assert_eq!(s.try_play(), Err(PlayError::TooFewCards(0)));
        s.try_select(Pos::new(0, 0)).unwrap();
        assert_eq!(s.try_play(), Err(PlayError::TooFewCards(1)));
        s.try_select(Pos::new(0, 1)).unwrap();
        assert_eq!(s.try_play(), Err(PlayError::NoHand));
        // Rejection left the selection alone.
        assert_eq!(s.selection().len(), 2);
        assert_eq!(s.board().occupied_count(), 2);
    }

    #[test]
    fn accepted_play_removes_scores_and_clears() {
        let mut s = session_from_rows(
            [
                ".  .  .  .  .",
                ".  .  .  .  .",
                ".  .  .  .  .",
                "Ah .  .  .  .",
                "As .  .  .  .",
            ],
            "",
        );
        s.try_select(Pos::new(3, 0)).unwrap();
        s.try_select(Pos::new(4, 0)).unwrap();
        let outcome = s.try_play().unwrap();
        assert_eq!(outcome.kind, HandKind::Pair);
        assert_eq!(outcome.points, HandKind::Pair.points());
        assert_eq!(s.score(), HandKind::Pair.points());
        assert!(s.selection().is_empty());
        assert!(s.board().is_cleared());
        assert!(s.is_terminal());
    }

    #[test]
    fn advance_runs_all_three_phases() {
        let mut s = session_from_rows(
            [
                ".  .  .  .  .",
                ".  .  .  .  .",
                ".  .  .  .  .",
                "9c .  .  .  .",
                "9d .  .  .  .",
            ],
            "",
        );
        s.try_select(Pos::new(3, 0)).unwrap();
        s.try_select(Pos::new(4, 0)).unwrap();
        s.try_play().unwrap();
        let over = s.advance();
        assert!(over);
        assert!(s.is_game_over());
        assert!(s.board().is_cleared());
    }

    #[test]
    fn selection_is_dropped_by_phase_calls() {
        let mut s = session_from_rows(
            [
                ".  .  .  .  .",
                ".  .  .  .  .",
                ".  .  .  .  .",
                ".  .  .  .  .",
                "7h 8h .  .  .",
            ],
            "",
        );
        s.try_select(Pos::new(4, 0)).unwrap();
        s.compact();
        assert!(s.selection().is_empty());
    }
}
