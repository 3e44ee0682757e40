//! Pawn move generation
//!
//! Pawns are the one asymmetric piece: direction depends on side (White
//! advances toward rank index 0, Black toward rank index 7) and moving is
//! disjoint from capturing.
//!
//! - Forward push: one square straight ahead when empty; two squares from
//!   the starting rank when both the intermediate and destination squares
//!   are empty. A push never captures.
//! - Diagonal capture: the two forward-diagonal squares, each a destination
//!   only when occupied by an opposing piece.
//!
//! There is no en passant and no promotion in this variant.

use crate::board::Board;
use crate::constants::{BLACK_PAWN_START_RANK, WHITE_PAWN_START_RANK};
use crate::types::{Side, Square};

/// Generate pawn moves from a given square.
pub fn generate_pawn_moves(board: &Board, from: Square, side: Side, moves: &mut Vec<Square>) {
    let (forward, start_rank) = match side {
        Side::White => (-1, WHITE_PAWN_START_RANK),
        Side::Black => (1, BLACK_PAWN_START_RANK),
    };

    // Pushes: the double push requires the intermediate square empty as
    // well, so a pawn cannot jump a blocker on its first move.
    if let Some(one) = from.offset(0, forward) {
        if board.piece_at(one).is_none() {
            moves.push(one);
            if from.rank() == start_rank {
                if let Some(two) = one.offset(0, forward) {
                    if board.piece_at(two).is_none() {
                        moves.push(two);
                    }
                }
            }
        }
    }

    // Diagonal captures, only onto an opposing piece
    for file_delta in [-1, 1] {
        let Some(diagonal) = from.offset(file_delta, forward) else {
            continue;
        };
        if matches!(board.piece_at(diagonal), Some(piece) if piece.side != side) {
            moves.push(diagonal);
        }
    }
}
