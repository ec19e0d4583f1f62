//! Piece-square score tables.
//!
//! Combines a fixed material value per piece with a square-dependent
//! positional bonus, per color. The positional tables are authored from
//! White's perspective; Black reads them through a vertical mirror
//! ([`Square::flip_vertical`]). The king gets separate opening and endgame
//! tables because its positional value is phase-dependent.

use once_cell::sync::Lazy;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::{Color, Piece, Square};

/// Game phase selecting which king table applies.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GamePhase {
    Opening,
    Endgame,
}

/// Pawn positional bonus (a1..h1, a2..h2, ..., a8..h8).
/// Stronger toward the center and advanced ranks.
pub const PAWN_TABLE: [i32; 64] = [
    // Rank 1
    0, 0, 0, 0, 0, 0, 0, 0, //
    // Rank 2
    5, 10, 15, 2, 2, 15, 10, 5, //
    // Rank 3
    10, 15, 25, 30, 30, 25, 15, 10, //
    // Rank 4
    20, 30, 40, 50, 50, 40, 30, 20, //
    // Rank 5
    30, 45, 60, 70, 70, 60, 45, 30, //
    // Rank 6
    50, 70, 85, 95, 95, 85, 70, 50, //
    // Rank 7
    80, 90, 95, 100, 100, 95, 90, 80, //
    // Rank 8
    0, 0, 0, 0, 0, 0, 0, 0,
];

/// Knight centralization bonus (negative on edges and corners)
pub const KNIGHT_TABLE: [i32; 64] = [
    // Rank 1
    -50, -40, -30, -30, -30, -30, -40, -50, //
    // Rank 2
    -40, -20, 0, 5, 5, 0, -20, -40, //
    // Rank 3
    -30, 5, 10, 15, 15, 10, 5, -30, //
    // Rank 4
    -30, 0, 15, 20, 20, 15, 0, -30, //
    // Rank 5
    -30, 5, 15, 20, 20, 15, 5, -30, //
    // Rank 6
    -30, 0, 10, 15, 15, 10, 0, -30, //
    // Rank 7
    -40, -20, 0, 0, 0, 0, -20, -40, //
    // Rank 8
    -50, -40, -30, -30, -30, -30, -40, -50,
];

/// Bishop bonus favoring long diagonals and the center
pub const BISHOP_TABLE: [i32; 64] = [
    // Rank 1
    -20, -10, -10, -10, -10, -10, -10, -20, //
    // Rank 2
    -10, 0, 0, 0, 0, 0, 0, -10, //
    // Rank 3
    -10, 0, 5, 10, 10, 5, 0, -10, //
    // Rank 4
    -10, 5, 5, 10, 10, 5, 5, -10, //
    // Rank 5
    -10, 0, 10, 10, 10, 10, 0, -10, //
    // Rank 6
    -10, 10, 10, 10, 10, 10, 10, -10, //
    // Rank 7
    -10, 5, 0, 0, 0, 0, 5, -10, //
    // Rank 8
    -20, -10, -10, -10, -10, -10, -10, -20,
];

/// Rook bonus favoring open files and the seventh rank
pub const ROOK_TABLE: [i32; 64] = [
    // Rank 1
    0, 0, 0, 5, 5, 0, 0, 0, //
    // Rank 2
    5, 10, 10, 10, 10, 10, 10, 5, //
    // Rank 3
    -5, 0, 0, 0, 0, 0, 0, -5, //
    // Rank 4
    -5, 0, 0, 0, 0, 0, 0, -5, //
    // Rank 5
    -5, 0, 0, 0, 0, 0, 0, -5, //
    // Rank 6
    -5, 0, 0, 0, 0, 0, 0, -5, //
    // Rank 7
    -5, 0, 0, 0, 0, 0, 0, -5, //
    // Rank 8
    0, 0, 0, 0, 0, 0, 0, 0,
];

/// Queen bonus combining mobility and centralization
pub const QUEEN_TABLE: [i32; 64] = [
    // Rank 1
    -20, -10, -10, -5, -5, -10, -10, -20, //
    // Rank 2
    -10, 0, 0, 0, 0, 0, 0, -10, //
    // Rank 3
    -10, 0, 5, 5, 5, 5, 0, -10, //
    // Rank 4
    -5, 0, 5, 5, 5, 5, 0, -5, //
    // Rank 5
    0, 0, 5, 5, 5, 5, 0, -5, //
    // Rank 6
    -10, 0, 5, 5, 5, 5, 0, -10, //
    // Rank 7
    -10, 0, 0, 0, 0, 0, 0, -10, //
    // Rank 8
    -20, -10, -10, -5, -5, -10, -10, -20,
];

/// King opening table: keep the king tucked away behind its pawns
pub const KING_OPENING_TABLE: [i32; 64] = [
    // Rank 1
    -30, -40, -40, -50, -50, -40, -40, -30, //
    // Rank 2
    -30, -40, -40, -50, -50, -40, -40, -30, //
    // Rank 3
    -30, -40, -40, -50, -50, -40, -40, -30, //
    // Rank 4
    -30, -40, -40, -50, -50, -40, -40, -30, //
    // Rank 5
    -20, -30, -30, -40, -40, -30, -30, -20, //
    // Rank 6
    -10, -20, -20, -20, -20, -20, -20, -10, //
    // Rank 7
    20, 20, 0, 0, 0, 0, 20, 20, //
    // Rank 8
    20, 30, 10, 0, 0, 10, 30, 20,
];

/// King endgame table: the king becomes an active piece in the center
pub const KING_ENDGAME_TABLE: [i32; 64] = [
    // Rank 1
    -40, -30, -20, -10, -10, -20, -30, -40, //
    // Rank 2
    -30, -20, -10, 0, 0, -10, -20, -30, //
    // Rank 3
    -20, -10, 10, 20, 20, 10, -10, -20, //
    // Rank 4
    -10, 0, 25, 35, 35, 25, 0, -10, //
    // Rank 5
    -10, 0, 25, 35, 35, 25, 0, -10, //
    // Rank 6
    -20, -10, 10, 20, 20, 10, -10, -20, //
    // Rank 7
    -30, -20, -10, 0, 0, -10, -20, -30, //
    // Rank 8
    -40, -30, -20, -10, -10, -20, -30, -40,
];

const fn positional_table(piece: Piece) -> &'static [i32; 64] {
    match piece {
        Piece::Pawn => &PAWN_TABLE,
        Piece::Knight => &KNIGHT_TABLE,
        Piece::Bishop => &BISHOP_TABLE,
        Piece::Rook => &ROOK_TABLE,
        Piece::Queen => &QUEEN_TABLE,
        Piece::King => &KING_OPENING_TABLE,
    }
}

/// Combined material + positional scores for every (color, piece, square).
///
/// Built once from the constant tables above and never mutated; safe to
/// share read-only across threads.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ScoreTables {
    piece: [[[i32; 64]; 5]; 2],
    king_opening: [[i32; 64]; 2],
    king_endgame: [[i32; 64]; 2],
}

impl ScoreTables {
    /// Build the score tables from the compiled constants.
    ///
    /// Pure and idempotent: building twice yields equal tables.
    #[must_use]
    pub fn build() -> Self {
        let mut piece = [[[0; 64]; 5]; 2];
        let mut king_opening = [[0; 64]; 2];
        let mut king_endgame = [[0; 64]; 2];

        for sq in Square::all() {
            let idx = sq.as_index();
            let flipped = sq.flip_vertical().as_index();

            for p in Piece::NON_KING {
                let table = positional_table(p);
                piece[Color::White.index()][p.index()][idx] = p.value() + table[idx];
                piece[Color::Black.index()][p.index()][idx] = p.value() + table[flipped];
            }

            let king = Piece::King.value();
            king_opening[Color::White.index()][idx] = king + KING_OPENING_TABLE[idx];
            king_opening[Color::Black.index()][idx] = king + KING_OPENING_TABLE[flipped];
            king_endgame[Color::White.index()][idx] = king + KING_ENDGAME_TABLE[idx];
            king_endgame[Color::Black.index()][idx] = king + KING_ENDGAME_TABLE[flipped];
        }

        ScoreTables {
            piece,
            king_opening,
            king_endgame,
        }
    }

    /// Material + positional score for a piece of `color` on `square`.
    ///
    /// `None` (an empty square) scores 0 for both colors. The king also
    /// yields 0 here: its combined table has no single value because king
    /// placement is phase-dependent; use [`ScoreTables::king`] instead.
    #[inline]
    #[must_use]
    pub fn piece_square(&self, color: Color, piece: Option<Piece>, square: Square) -> i32 {
        match piece {
            Some(Piece::King) | None => 0,
            Some(p) => self.piece[color.index()][p.index()][square.as_index()],
        }
    }

    /// Material + positional score for the king of `color` on `square`
    /// in the given game phase.
    #[inline]
    #[must_use]
    pub fn king(&self, color: Color, phase: GamePhase, square: Square) -> i32 {
        let table = match phase {
            GamePhase::Opening => &self.king_opening,
            GamePhase::Endgame => &self.king_endgame,
        };
        table[color.index()][square.as_index()]
    }
}

static SCORE_TABLES: Lazy<ScoreTables> = Lazy::new(|| {
    #[cfg(feature = "logging")]
    log::debug!("building piece-square score tables");
    ScoreTables::build()
});

/// The process-wide score tables
#[must_use]
pub fn score_tables() -> &'static ScoreTables {
    &SCORE_TABLES
}

/// Shorthand for [`ScoreTables::piece_square`] on the process-wide tables
#[must_use]
pub fn piece_square_score(color: Color, piece: Option<Piece>, square: Square) -> i32 {
    SCORE_TABLES.piece_square(color, piece, square)
}

/// Shorthand for [`ScoreTables::king`] on the process-wide tables
#[must_use]
pub fn king_score(color: Color, phase: GamePhase, square: Square) -> i32 {
    SCORE_TABLES.king(color, phase, square)
}

/// Force construction of the process-wide score tables
pub fn init() {
    Lazy::force(&SCORE_TABLES);
}
