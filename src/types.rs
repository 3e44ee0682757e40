//! Core value types for the variant rules engine
//!
//! Everything the engine's state is built from lives here: the two sides,
//! the six piece kinds, occupied-square values, board coordinates, per-side
//! capture tallies and the game-over state. All of these are small `Copy`
//! values that are replaced wholesale rather than mutated in place.
//!
//! ## Coordinate convention
//!
//! A [`Square`] is a `(file, rank)` pair with both indices in `0..=7`. Rank
//! index 0 is Black's back rank (the top row of a printed board), so the
//! algebraic rank digit and the internal rank index run in opposite
//! directions: a8 is `(0, 0)`, a1 is `(0, 7)`. Squares can only be built
//! through the fallible constructors, so a `Square` in hand is always
//! in-bounds.

use std::fmt;

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    White,
    Black,
}

impl Side {
    /// The other player.
    #[inline]
    pub fn opponent(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Stable index for side-keyed arrays.
    #[inline]
    pub(crate) fn index(self) -> usize {
        match self {
            Side::White => 0,
            Side::Black => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => write!(f, "white"),
            Side::Black => write!(f, "black"),
        }
    }
}

/// The six piece classes. A closed set: move generation dispatches over it
/// exhaustively, so adding a variant is a compile error until every match is
/// updated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceKind {
    /// All six kinds, in a fixed order matching [`PieceKind::index`].
    pub const ALL: [PieceKind; 6] = [
        PieceKind::King,
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Pawn,
    ];

    /// How many pieces of this kind each side starts with. Capturing this
    /// many of one kind from the opponent wins the game.
    #[inline]
    pub fn full_count(self) -> u8 {
        match self {
            PieceKind::King | PieceKind::Queen => 1,
            PieceKind::Rook | PieceKind::Bishop | PieceKind::Knight => 2,
            PieceKind::Pawn => 8,
        }
    }

    /// Stable index for kind-keyed arrays.
    #[inline]
    pub(crate) fn index(self) -> usize {
        match self {
            PieceKind::King => 0,
            PieceKind::Queen => 1,
            PieceKind::Rook => 2,
            PieceKind::Bishop => 3,
            PieceKind::Knight => 4,
            PieceKind::Pawn => 5,
        }
    }

    /// Single-letter code used by the board renderer.
    pub(crate) fn letter(self) -> char {
        match self {
            PieceKind::King => 'K',
            PieceKind::Queen => 'Q',
            PieceKind::Rook => 'R',
            PieceKind::Bishop => 'B',
            PieceKind::Knight => 'N',
            PieceKind::Pawn => 'P',
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceKind::King => write!(f, "king"),
            PieceKind::Queen => write!(f, "queen"),
            PieceKind::Rook => write!(f, "rook"),
            PieceKind::Bishop => write!(f, "bishop"),
            PieceKind::Knight => write!(f, "knight"),
            PieceKind::Pawn => write!(f, "pawn"),
        }
    }
}

/// A piece on the board: a kind belonging to a side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Piece {
    pub side: Side,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub fn new(side: Side, kind: PieceKind) -> Piece {
        Piece { side, kind }
    }
}

/// A board coordinate, always in-bounds once constructed.
///
/// Serialization goes through a `(file, rank)` pair so that deserialization
/// re-runs the bounds check and cannot smuggle in an off-board square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "(u8, u8)", into = "(u8, u8)"))]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    /// Build a square from file and rank indices, both in `0..=7`.
    /// Returns `None` for anything out of bounds.
    pub fn new(file: u8, rank: u8) -> Option<Square> {
        if file < 8 && rank < 8 {
            Some(Square { file, rank })
        } else {
            None
        }
    }

    /// File index, 0 = a-file.
    #[inline]
    pub fn file(self) -> u8 {
        self.file
    }

    /// Rank index, 0 = Black's back rank (rank 8 in algebraic terms).
    #[inline]
    pub fn rank(self) -> u8 {
        self.rank
    }

    /// Step by a (file, rank) delta, filtering anything that leaves the
    /// board. This is the single place where out-of-bounds candidates are
    /// dropped; a returned square is always valid.
    #[inline]
    pub(crate) fn offset(self, file_delta: i8, rank_delta: i8) -> Option<Square> {
        let file = self.file as i8 + file_delta;
        let rank = self.rank as i8 + rank_delta;
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Some(Square {
                file: file as u8,
                rank: rank as u8,
            })
        } else {
            None
        }
    }

    /// Map an algebraic file/rank character pair to board indices: file
    /// `'a'..='h'` maps to 0..=7, rank `'1'..='8'` maps to row 7..=0 (the
    /// standard orientation flip). Any richer notation handling belongs to
    /// the host, not the engine.
    pub fn from_algebraic(file: char, rank: char) -> Option<Square> {
        if !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
            return None;
        }
        let file = file as u8 - b'a';
        let rank = 7 - (rank as u8 - b'1');
        Square::new(file, rank)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.file) as char, 8 - self.rank)
    }
}

impl TryFrom<(u8, u8)> for Square {
    type Error = &'static str;

    fn try_from((file, rank): (u8, u8)) -> Result<Square, Self::Error> {
        Square::new(file, rank).ok_or("square indices must be in 0..=7")
    }
}

impl From<Square> for (u8, u8) {
    fn from(square: Square) -> (u8, u8) {
        (square.file, square.rank)
    }
}

/// Per-side record of opponent pieces captured, keyed by piece kind.
///
/// Each side owns one tally counting the pieces it has taken *from* the
/// opponent. An entry never exceeds the kind's [`full_count`]: the board
/// cannot hold more pieces of a kind than the starting complement, and the
/// game ends the instant an entry reaches it.
///
/// [`full_count`]: PieceKind::full_count
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CaptureTally {
    counts: [u8; 6],
}

impl CaptureTally {
    /// How many opponent pieces of `kind` this side has captured.
    #[inline]
    pub fn count(&self, kind: PieceKind) -> u8 {
        self.counts[kind.index()]
    }

    /// Record one more captured piece of `kind`.
    #[inline]
    pub(crate) fn record(&mut self, kind: PieceKind) {
        self.counts[kind.index()] += 1;
    }

    /// The first kind whose tally has reached its full complement, if any.
    /// Counts only ever grow by one per move, so at most one kind can cross
    /// its threshold on a given move.
    pub fn completed_kind(&self) -> Option<PieceKind> {
        PieceKind::ALL
            .into_iter()
            .find(|&kind| self.count(kind) == kind.full_count())
    }
}

/// Whether the game is still being played or has been won.
///
/// `Won` is terminal: once entered, the engine rejects every further move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameState {
    InProgress,
    Won(Side),
}
