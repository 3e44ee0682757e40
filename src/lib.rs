//! # chessvar_engine - Rules Engine for a Capture-the-Type Chess Variant
//!
//! ## Overview
//!
//! This crate implements the rules of a chess variant played on a standard
//! 8×8 board with the standard initial setup and standard per-piece movement
//! and capture geometry, but a non-standard win condition: a player wins
//! immediately upon capturing *every* piece of some single opponent type —
//! all 8 pawns, both rooks, both knights, both bishops, the queen, or the
//! king. There is no check or checkmate, no castling, no en passant and no
//! promotion; the king is an ordinary piece.
//!
//! The crate is an in-process library. It owns the board state and exposes
//! one mutating operation, [`Engine::attempt_move`], plus read-only queries.
//! Anything to do with I/O — printing, a REPL, parsing notation beyond
//! mapping a file/rank pair to indices — belongs to the host.
//!
//! ## Example
//!
//! ```
//! use chessvar_engine::{Engine, GameState, Square};
//!
//! let mut game = Engine::new();
//! let from = Square::from_algebraic('e', '2').unwrap();
//! let to = Square::from_algebraic('e', '4').unwrap();
//!
//! let applied = game.attempt_move(from, to).unwrap();
//! assert_eq!(applied.state, GameState::InProgress);
//! ```
//!
//! ## Module map
//!
//! - [`types`]: sides, piece kinds, squares, capture tallies, game state
//! - [`board`]: the 8×8 store and standard setup
//! - [`move_gen`]: per-piece destination generation (the bulk of the logic)
//! - [`engine`]: the validation pipeline and state machine
//! - [`error`]: the rejection taxonomy
//!
//! ## Observability
//!
//! The engine emits [`tracing`] events (debug-level for applied and rejected
//! moves, info-level when a game is won). Installing a subscriber is the
//! host's responsibility; without one the events cost almost nothing.

pub mod board;
pub mod constants;
pub mod engine;
pub mod error;
pub mod move_gen;
pub mod types;

pub use board::Board;
pub use engine::{Applied, Engine};
pub use error::{EngineResult, Rejected};
pub use types::{CaptureTally, GameState, Piece, PieceKind, Side, Square};
