// Minimal engine API boundary. The trait exposes the selection/play/phase
// surface so front-ends, bots, and tests can drive a game without depending
// on `GameSession` internals. It is implemented for the core session type.

use crate::board::Pos;
use crate::classify::HandKind;
use crate::session::{GameSession, PlayError, PlayOutcome, SelectError};

pub trait PuzzleEngine {
    // Selection
    fn try_select(&mut self, pos: Pos) -> Result<(), SelectError>;
    fn try_deselect(&mut self, pos: Pos) -> Result<(), SelectError>;
    fn clear_selection(&mut self);
    fn eligible_extensions(&self) -> Vec<Pos>;

    // Play + post-play phases
    fn try_play(&mut self) -> Result<PlayOutcome, PlayError>;
    fn compact(&mut self);
    fn replenish(&mut self) -> usize;
    fn refresh_game_over(&mut self) -> bool;

    // Queries
    fn selection(&self) -> &[Pos];
    fn score(&self) -> u32;
    fn is_terminal(&self) -> bool;
    fn find_playable(&self) -> Option<(Vec<Pos>, HandKind)>;
    fn is_game_over(&self) -> bool;
}

impl PuzzleEngine for GameSession {
    fn try_select(&mut self, pos: Pos) -> Result<(), SelectError> {
        self.try_select(pos)
    }
    fn try_deselect(&mut self, pos: Pos) -> Result<(), SelectError> {
        self.try_deselect(pos)
    }
    fn clear_selection(&mut self) {
        self.clear_selection();
    }
    fn eligible_extensions(&self) -> Vec<Pos> {
        self.eligible_extensions()
    }

    fn try_play(&mut self) -> Result<PlayOutcome, PlayError> {
        self.try_play()
    }
    fn compact(&mut self) {
        self.compact();
    }
    fn replenish(&mut self) -> usize {
        self.replenish()
    }
    fn refresh_game_over(&mut self) -> bool {
        self.refresh_game_over()
    }

    fn selection(&self) -> &[Pos] {
        self.selection()
    }
    fn score(&self) -> u32 {
        self.score()
    }
    fn is_terminal(&self) -> bool {
        self.is_terminal()
    }
    fn find_playable(&self) -> Option<(Vec<Pos>, HandKind)> {
        self.find_playable()
    }
    fn is_game_over(&self) -> bool {
        self.is_game_over()
    }
}
