//! Rejection types for the rules engine
//!
//! Every failed move is a *rejection*, not a fault: the engine has no I/O
//! and no external dependency, so nothing in the legality pipeline can fail
//! in a way that warrants aborting. A rejection leaves the engine state
//! completely untouched.

use thiserror::Error;

use crate::types::{PieceKind, Side, Square};

/// Why a requested move was not applied.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejected {
    /// The game has already been won; no further moves are accepted.
    #[error("game is already over")]
    GameAlreadyOver,

    /// The source square is empty.
    #[error("no piece at {square}")]
    NoPieceAtSource { square: Square },

    /// The piece at the source square belongs to the player not on turn.
    #[error("piece at {square} belongs to {side}, who is not on turn")]
    WrongSideToMove { square: Square, side: Side },

    /// The destination is not reachable for this piece's movement class
    /// under current occupancy.
    #[error("{kind} cannot move from {from} to {to}")]
    IllegalForPiece {
        kind: PieceKind,
        from: Square,
        to: Square,
    },
}

/// Result type alias for engine operations.
pub type EngineResult<T> = Result<T, Rejected>;
