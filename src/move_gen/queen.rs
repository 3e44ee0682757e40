//! Queen move generation
//!
//! A queen's moves are the union of the rook's orthogonal rays and the
//! bishop's diagonal rays, with the same walking rule. The two component
//! generators never overlap, so the union needs no dedup.

use super::{bishop, rook};
use crate::board::Board;
use crate::types::{Side, Square};

/// Generate queen moves from a given square.
pub fn generate_queen_moves(board: &Board, from: Square, side: Side, moves: &mut Vec<Square>) {
    rook::generate_rook_moves(board, from, side, moves);
    bishop::generate_bishop_moves(board, from, side, moves);
}
