//! The rules engine: move validation pipeline and game state machine
//!
//! [`Engine`] owns the board, both capture tallies, the side to move and the
//! game state, and exposes exactly one mutating operation, [`attempt_move`],
//! plus read-only queries for rendering and inspection. A successful move
//! runs the full pipeline: legality via the movement generator, application
//! with capture bookkeeping, outcome evaluation against the mover's tally,
//! then the turn toggle. Every rejection is non-mutating.
//!
//! The engine is single-threaded and synchronous; a host that needs
//! concurrent access must serialize calls itself (one engine per game behind
//! a lock, or a single-threaded actor owning the instance).
//!
//! [`attempt_move`]: Engine::attempt_move

use tracing::{debug, info};

use crate::board::Board;
use crate::error::{EngineResult, Rejected};
use crate::move_gen;
use crate::types::{CaptureTally, GameState, Piece, PieceKind, Side, Square};

/// What a successful [`Engine::attempt_move`] produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Applied {
    /// Kind of the opposing piece removed from the destination, if the move
    /// was a capture.
    pub captured: Option<PieceKind>,
    /// Game state after the move: still `InProgress`, or `Won` by the mover
    /// if this move completed an opponent type.
    pub state: GameState,
}

/// A single game of the capture-the-type variant.
///
/// Created with the standard starting position, White to move, and never
/// reset mid-lifetime; a new game is a new `Engine` value.
#[derive(Clone, Debug)]
pub struct Engine {
    board: Board,
    captured: [CaptureTally; 2],
    to_move: Side,
    state: GameState,
}

impl Engine {
    /// A fresh game: standard setup, zero tallies, White to move.
    pub fn new() -> Engine {
        Engine::from_position(Board::standard(), Side::White)
    }

    /// A game starting from an arbitrary position. Tallies start at zero,
    /// so only captures made from here on count toward the win condition.
    pub fn from_position(board: Board, to_move: Side) -> Engine {
        Engine {
            board,
            captured: [CaptureTally::default(); 2],
            to_move,
            state: GameState::InProgress,
        }
    }

    /// Validate and, if legal, apply the move `from` → `to`.
    ///
    /// The pipeline, in order: the game must be in progress, `from` must
    /// hold a piece of the side on turn, and `to` must be in that piece's
    /// generated destination set. Then the move is applied (recording any
    /// capture in the mover's tally), the win condition is evaluated, and
    /// the turn passes to the opponent.
    ///
    /// On rejection no state changes at all, including the side to move.
    pub fn attempt_move(&mut self, from: Square, to: Square) -> EngineResult<Applied> {
        if let GameState::Won(_) = self.state {
            return Err(Rejected::GameAlreadyOver);
        }

        let piece = self
            .board
            .piece_at(from)
            .ok_or(Rejected::NoPieceAtSource { square: from })?;

        if piece.side != self.to_move {
            return Err(Rejected::WrongSideToMove {
                square: from,
                side: piece.side,
            });
        }

        if !move_gen::destinations(&self.board, from).contains(&to) {
            debug!("rejected {} {}: {} -> {}", piece.side, piece.kind, from, to);
            return Err(Rejected::IllegalForPiece {
                kind: piece.kind,
                from,
                to,
            });
        }

        let mover = self.to_move;
        let captured = self.apply(from, to, piece);
        debug!(
            "applied {} {}: {} -> {} (captured: {:?})",
            mover, piece.kind, from, to, captured
        );

        // Win the instant the mover's tally for some kind reaches that
        // kind's full complement
        if let Some(kind) = self.captured[mover.index()].completed_kind() {
            self.state = GameState::Won(mover);
            info!("{} wins: every opposing {} captured", mover, kind);
        }

        self.to_move = mover.opponent();

        Ok(Applied {
            captured,
            state: self.state,
        })
    }

    /// Move applier: pure mutation, no validation. Records any capture in
    /// the mover's tally *before* the destination is overwritten, then moves
    /// the piece. One code path for every piece class.
    fn apply(&mut self, from: Square, to: Square, piece: Piece) -> Option<PieceKind> {
        let captured = self.board.piece_at(to).map(|taken| taken.kind);
        if let Some(kind) = captured {
            self.captured[self.to_move.index()].record(kind);
        }
        self.board.place(to, piece);
        self.board.clear(from);
        captured
    }

    /// Current game state.
    #[inline]
    pub fn state(&self) -> GameState {
        self.state
    }

    /// The side whose turn it is.
    #[inline]
    pub fn side_to_move(&self) -> Side {
        self.to_move
    }

    /// The piece at `square`, for rendering.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board.piece_at(square)
    }

    /// Read-only view of the board, for rendering.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The tally of opponent pieces `side` has captured so far.
    #[inline]
    pub fn captured(&self, side: Side) -> &CaptureTally {
        &self.captured[side.index()]
    }
}

impl Default for Engine {
    fn default() -> Engine {
        Engine::new()
    }
}
