//! Movement geometry and setup constants
//!
//! Direction vectors are `(file_delta, rank_delta)` pairs applied through
//! [`Square::offset`], which drops anything that leaves the board. Rank
//! deltas are in internal orientation: negative moves toward rank index 0
//! (Black's back rank at the top), positive toward rank index 7.
//!
//! [`Square::offset`]: crate::types::Square

use crate::types::PieceKind;

/// The four orthogonal ray directions (rook component).
pub const ROOK_DIRS: [(i8, i8); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

/// The four diagonal ray directions (bishop component).
pub const BISHOP_DIRS: [(i8, i8); 4] = [(-1, -1), (1, -1), (-1, 1), (1, 1)];

/// All eight directions: the king's single steps and the queen's rays.
pub const KING_DIRS: [(i8, i8); 8] = [
    (0, -1),
    (0, 1),
    (-1, 0),
    (1, 0),
    (-1, -1),
    (1, -1),
    (-1, 1),
    (1, 1),
];

/// The eight knight jumps. Intermediate squares are irrelevant.
pub const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (-1, -2),
    (1, -2),
    (-1, 2),
    (1, 2),
    (-2, -1),
    (2, -1),
    (-2, 1),
    (2, 1),
];

/// Rank index a white pawn starts on (rank 2 in algebraic terms).
pub const WHITE_PAWN_START_RANK: u8 = 6;

/// Rank index a black pawn starts on (rank 7 in algebraic terms).
pub const BLACK_PAWN_START_RANK: u8 = 1;

/// Back-rank piece order shared by both sides, a-file to h-file.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];
