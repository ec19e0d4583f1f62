//! Board representation: starting position and ASCII rendering.
//!
//! The board is a plain consumer of the precomputed tables; it plays no part
//! in building them.

use std::fmt;

use crate::types::{Color, Piece, Square};

/// Back-rank piece order for both colors (a-file to h-file)
const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

/// A chess board holding piece placement and a half-move counter.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    squares: [Option<(Color, Piece)>; 64],
    ply: u32,
}

impl Board {
    /// Create a board in the standard starting position
    #[must_use]
    pub fn new() -> Self {
        let mut squares = [None; 64];
        for file in 0..8 {
            squares[file] = Some((Color::White, BACK_RANK[file]));
            squares[8 + file] = Some((Color::White, Piece::Pawn));
            squares[48 + file] = Some((Color::Black, Piece::Pawn));
            squares[56 + file] = Some((Color::Black, BACK_RANK[file]));
        }
        Board { squares, ply: 0 }
    }

    /// Get the piece on a square, if any
    #[inline]
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<(Color, Piece)> {
        self.squares[square.as_index()]
    }

    /// Half-moves played since the starting position
    #[inline]
    #[must_use]
    pub fn ply(&self) -> u32 {
        self.ply
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Display for Board {
    /// Ranks 8 down to 1, uppercase White, lowercase Black, '.' for empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8 {
                let square = Square::new(rank, file).expect("rank and file are in range");
                match self.piece_at(square) {
                    Some((color, piece)) => write!(f, "{} ", piece.to_fen_char(color))?,
                    None => write!(f, ". ")?,
                }
            }
            writeln!(f)?;
        }
        writeln!(f, "  a b c d e f g h")
    }
}
