//! poker-grid: card-matching puzzle engine
//!
//! A 5×5 board of cards; the player selects a spatially connected group of
//! 2–5 cards forming a poker-style hand. Valid plays remove the cards, the
//! board re-compacts under gravity, and the deck refills the gaps. The engine
//! also decides, after every mutation, whether any play remains.
//!
//! Goals:
//! - Deterministic, synchronous operations; the caller paces the phases
//! - Small, well-documented public API
//! - No panics for invalid input; rejections are `Result` values
//!
//! ## Quick start: play a pair
//! ```
//! use poker_grid::board::{Board, Pos};
//! use poker_grid::classify::HandKind;
//! use poker_grid::deck::Deck;
//! use poker_grid::session::GameSession;
//!
//! let board = Board::from_rows([
//!     ".  .  .  .  .",
//!     ".  .  .  .  .",
//!     ".  .  .  .  .",
//!     "Ah .  .  .  .",
//!     "As .  .  .  .",
//! ]).unwrap();
//! let mut session = GameSession::from_parts(board, Deck::empty());
//!
//! session.try_select(Pos::new(3, 0)).unwrap();
//! session.try_select(Pos::new(4, 0)).unwrap();
//! let outcome = session.try_play().unwrap();
//! assert_eq!(outcome.kind, HandKind::Pair);
//!
//! // Game over: the deck is empty and nothing is left to play.
//! assert!(session.advance());
//! ```
//!
//! For a real game use [`session::GameSession::new`] with your RNG (or
//! [`session::GameSession::new_seeded`]), which shuffles a full deck and
//! deals all 25 cells.

pub mod board;
pub mod cards;
pub mod classify;
pub mod connect;
pub mod deck;
pub mod engine;
pub mod mutate;
pub mod score;
pub mod search;
pub mod session;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
