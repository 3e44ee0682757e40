//! Per-piece move generation
//!
//! One generator per piece class, each producing the set of squares the
//! occupying piece could move or capture to under current board occupancy.
//! Generation is pure: it takes an immutable board view plus a source square
//! and returns a freshly computed set, with no lookahead beyond the current
//! position. There is no check concept in this variant, so no destination is
//! ever filtered for king safety.
//!
//! Sliding pieces (rook, bishop, queen) share one ray-walking routine in
//! [`sliding`]; the rest filter fixed offset patterns. No generator ever
//! yields a square occupied by a same-side piece, and no ray ever continues
//! past its first obstruction.

pub mod bishop;
pub mod king;
pub mod knight;
pub mod pawn;
pub mod queen;
pub mod rook;
mod sliding;

use crate::board::Board;
use crate::types::{PieceKind, Square};

/// Compute every legal destination for the piece at `from`.
///
/// Returns an empty set if `from` is unoccupied. Dispatch is an exhaustive
/// match over the closed [`PieceKind`] set.
pub fn destinations(board: &Board, from: Square) -> Vec<Square> {
    let Some(piece) = board.piece_at(from) else {
        return Vec::new();
    };

    let mut moves = Vec::new();
    match piece.kind {
        PieceKind::King => king::generate_king_moves(board, from, piece.side, &mut moves),
        PieceKind::Queen => queen::generate_queen_moves(board, from, piece.side, &mut moves),
        PieceKind::Rook => rook::generate_rook_moves(board, from, piece.side, &mut moves),
        PieceKind::Bishop => bishop::generate_bishop_moves(board, from, piece.side, &mut moves),
        PieceKind::Knight => knight::generate_knight_moves(board, from, piece.side, &mut moves),
        PieceKind::Pawn => pawn::generate_pawn_moves(board, from, piece.side, &mut moves),
    }
    moves
}
