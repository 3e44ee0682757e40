//! Bishop move generation
//!
//! Bishops slide along the four diagonal rays until blocked by another piece
//! or the board edge. Delegates to the shared ray-walking logic.

use super::sliding;
use crate::board::Board;
use crate::constants::BISHOP_DIRS;
use crate::types::{Side, Square};

/// Generate bishop moves from a given square.
pub fn generate_bishop_moves(board: &Board, from: Square, side: Side, moves: &mut Vec<Square>) {
    sliding::walk_rays(board, from, side, &BISHOP_DIRS, moves);
}
