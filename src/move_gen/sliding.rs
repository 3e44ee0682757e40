//! Sliding piece move generation
//!
//! Common ray-walking logic for rooks, bishops and queens. A ray extends
//! square by square from the source until one of three things happens:
//! the board edge is reached (ray ends), a same-side piece is hit (stop
//! *before* that square), or an opposing piece is hit (include that square
//! as a capture, then stop). Every unobstructed square strictly between the
//! source and the first obstruction is included.

use crate::board::Board;
use crate::types::{Side, Square};

/// Walk each direction in `dirs` from `from`, appending reachable squares.
pub(crate) fn walk_rays(
    board: &Board,
    from: Square,
    side: Side,
    dirs: &[(i8, i8)],
    moves: &mut Vec<Square>,
) {
    for &(file_delta, rank_delta) in dirs {
        let mut current = from;
        while let Some(next) = current.offset(file_delta, rank_delta) {
            match board.piece_at(next) {
                // Empty square: reachable, keep walking this ray
                None => {
                    moves.push(next);
                    current = next;
                }
                // Opposing piece: capture square, ray ends here
                Some(piece) if piece.side != side => {
                    moves.push(next);
                    break;
                }
                // Own piece: ray ends before this square
                Some(_) => break,
            }
        }
    }
}
