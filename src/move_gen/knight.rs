//! Knight move generation
//!
//! Knights jump in the eight L-shaped offsets, (±1, ±2) and (±2, ±1).
//! Occupancy of intermediate squares is irrelevant; only the destination
//! matters, and it must not hold a same-side piece.

use crate::board::Board;
use crate::constants::KNIGHT_JUMPS;
use crate::types::{Side, Square};

/// Generate knight moves from a given square.
pub fn generate_knight_moves(board: &Board, from: Square, side: Side, moves: &mut Vec<Square>) {
    for &(file_delta, rank_delta) in &KNIGHT_JUMPS {
        let Some(to) = from.offset(file_delta, rank_delta) else {
            continue;
        };
        match board.piece_at(to) {
            Some(piece) if piece.side == side => {}
            _ => moves.push(to),
        }
    }
}
