//! King move generation
//!
//! The king steps one square in any of the eight directions. In this variant
//! the king has no special status: no castling, no check, no restriction on
//! stepping into attacked squares. It is an ordinary one-step piece whose
//! only constraints are the board edge and its own pieces.

use crate::board::Board;
use crate::constants::KING_DIRS;
use crate::types::{Side, Square};

/// Generate king moves from a given square.
pub fn generate_king_moves(board: &Board, from: Square, side: Side, moves: &mut Vec<Square>) {
    for &(file_delta, rank_delta) in &KING_DIRS {
        let Some(to) = from.offset(file_delta, rank_delta) else {
            continue;
        };
        match board.piece_at(to) {
            Some(piece) if piece.side == side => {}
            _ => moves.push(to),
        }
    }
}
