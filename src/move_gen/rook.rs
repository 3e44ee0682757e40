//! Rook move generation
//!
//! Rooks slide along the four orthogonal rays (up, down, left, right) until
//! blocked by another piece or the board edge. Delegates to the shared
//! ray-walking logic.

use super::sliding;
use crate::board::Board;
use crate::constants::ROOK_DIRS;
use crate::types::{Side, Square};

/// Generate rook moves from a given square.
pub fn generate_rook_moves(board: &Board, from: Square, side: Side, moves: &mut Vec<Square>) {
    sliding::walk_rays(board, from, side, &ROOK_DIRS, moves);
}
