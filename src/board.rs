//! Board storage and setup
//!
//! The board is a dumb 8×8 store of optional pieces: O(1) query, place and
//! clear, no validation of any kind. Legality lives in [`move_gen`], capture
//! bookkeeping in the engine's move applier; this layer only holds cells.
//!
//! [`move_gen`]: crate::move_gen

use std::fmt;

use crate::constants::{BACK_RANK, BLACK_PAWN_START_RANK, WHITE_PAWN_START_RANK};
use crate::types::{Piece, PieceKind, Side, Square};

/// An 8×8 grid of optional pieces, indexed `(rank, file)` with rank 0 =
/// Black's back rank.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// A board with no pieces on it. Useful for setting up test positions.
    pub fn empty() -> Board {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// The standard chess starting position.
    pub fn standard() -> Board {
        let mut board = Board::empty();
        for (file, &kind) in BACK_RANK.iter().enumerate() {
            let file = file as u8;
            board.squares[0][file as usize] = Some(Piece::new(Side::Black, kind));
            board.squares[7][file as usize] = Some(Piece::new(Side::White, kind));
            board.squares[BLACK_PAWN_START_RANK as usize][file as usize] =
                Some(Piece::new(Side::Black, PieceKind::Pawn));
            board.squares[WHITE_PAWN_START_RANK as usize][file as usize] =
                Some(Piece::new(Side::White, PieceKind::Pawn));
        }
        board
    }

    /// The piece occupying `square`, if any.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.rank() as usize][square.file() as usize]
    }

    /// Put `piece` on `square`, replacing whatever was there.
    #[inline]
    pub fn place(&mut self, square: Square, piece: Piece) {
        self.squares[square.rank() as usize][square.file() as usize] = Some(piece);
    }

    /// Empty `square`, returning the piece that was there.
    #[inline]
    pub fn clear(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.rank() as usize][square.file() as usize].take()
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::standard()
    }
}

/// Text rendering, one rank per line with rank 8 at the top. Pieces print as
/// a color letter plus a piece letter (`wR`, `bN`), empty squares as `*`.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in &self.squares {
            for (file, cell) in rank.iter().enumerate() {
                if file > 0 {
                    write!(f, " ")?;
                }
                match cell {
                    Some(piece) => {
                        let side = match piece.side {
                            Side::White => 'w',
                            Side::Black => 'b',
                        };
                        write!(f, "{}{}", side, piece.kind.letter())?;
                    }
                    None => write!(f, " *")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
