//! Precomputed pseudo-legal move-target tables.
//!
//! For every piece type and source square (and color, for pawns) the tables
//! hold the squares reachable on an otherwise empty board. Sliding pieces
//! stop at the board edge only; occupancy is not modeled. Tables are built
//! once and shared read-only for the lifetime of the process.

use once_cell::sync::Lazy;

use crate::types::{Color, Piece, Square};

/// Knight move offsets on the linear index
const KNIGHT_OFFSETS: [i8; 8] = [6, 10, 15, 17, -6, -10, -15, -17];

/// King move offsets (one square in any direction)
const KING_OFFSETS: [i8; 8] = [1, -1, 8, -8, 7, 9, -7, -9];

/// Bishop ray directions (diagonals)
const BISHOP_DIRECTIONS: [i8; 4] = [7, 9, -7, -9];

/// Rook ray directions (ranks and files)
const ROOK_DIRECTIONS: [i8; 4] = [1, -1, 8, -8];

/// Queen ray directions (rook + bishop)
const QUEEN_DIRECTIONS: [i8; 8] = [1, -1, 8, -8, 7, 9, -7, -9];

/// Detects single-step offsets that wrap around a file boundary
/// (e.g. a knight jumping from the h-file to the a-file).
///
/// The four clauses are a conservative, piece-agnostic heuristic: they
/// reject every wrap the supported offsets can produce, at the price of
/// also rejecting some jumps no piece here actually makes. Keep the
/// boundaries as they are; an exact per-piece-shape check would change
/// the table contents for callers that rely on these exact clauses.
const fn wraps_file(from_file: usize, to_file: usize) -> bool {
    (from_file == 0 && to_file >= 6)
        || (from_file == 7 && to_file <= 1)
        || (from_file <= 1 && to_file >= 6)
        || (from_file >= 6 && to_file <= 1)
}

/// Apply a single offset to a square, rejecting off-board and file-wrapping
/// destinations. Every piece kind steps through this one primitive.
fn step(from: Square, offset: i8) -> Option<Square> {
    let to = from.as_index() as i32 + offset as i32;
    if !(0..64).contains(&to) {
        return None;
    }
    let to = Square::from_index(to as usize);
    if wraps_file(from.file(), to.file()) {
        None
    } else {
        Some(to)
    }
}

/// Single-step targets for knight and king
fn leaper_targets(offsets: &[i8]) -> [Vec<Square>; 64] {
    std::array::from_fn(|idx| {
        let from = Square::from_index(idx);
        offsets.iter().filter_map(|&offset| step(from, offset)).collect()
    })
}

/// Ray targets for bishop, rook and queen. Each ray extends until the board
/// edge; the wrap check compares each new square against its immediate
/// predecessor so rays stop at a file boundary after any number of steps.
fn slider_targets(directions: &[i8]) -> [Vec<Square>; 64] {
    std::array::from_fn(|idx| {
        let from = Square::from_index(idx);
        let mut targets = Vec::new();
        for &dir in directions {
            let mut prev = from;
            while let Some(next) = step(prev, dir) {
                targets.push(next);
                prev = next;
            }
        }
        targets
    })
}

/// Pawn targets: one forward push plus the two forward-diagonal capture
/// squares, each gated by the board edge. Promotion, en passant and the
/// double-step first move are not modeled.
fn pawn_targets(color: Color) -> [Vec<Square>; 64] {
    let (push, captures) = match color {
        Color::White => (8i8, [7i8, 9]),
        Color::Black => (-8i8, [-9i8, -7]),
    };
    std::array::from_fn(|idx| {
        let from = Square::from_index(idx);
        let mut targets: Vec<Square> = step(from, push).into_iter().collect();
        targets.extend(captures.iter().filter_map(|&offset| step(from, offset)));
        targets
    })
}

static KNIGHT_TARGETS: Lazy<[Vec<Square>; 64]> = Lazy::new(|| leaper_targets(&KNIGHT_OFFSETS));

static KING_TARGETS: Lazy<[Vec<Square>; 64]> = Lazy::new(|| leaper_targets(&KING_OFFSETS));

static BISHOP_TARGETS: Lazy<[Vec<Square>; 64]> = Lazy::new(|| slider_targets(&BISHOP_DIRECTIONS));

static ROOK_TARGETS: Lazy<[Vec<Square>; 64]> = Lazy::new(|| slider_targets(&ROOK_DIRECTIONS));

static QUEEN_TARGETS: Lazy<[Vec<Square>; 64]> = Lazy::new(|| slider_targets(&QUEEN_DIRECTIONS));

static PAWN_TARGETS: Lazy<[[Vec<Square>; 64]; 2]> =
    Lazy::new(|| [pawn_targets(Color::White), pawn_targets(Color::Black)]);

/// Get the pseudo-legal target squares for a piece on `square`.
///
/// The result is in generation order (direction-list order, then distance
/// from the source for sliders), not board order. `color` only affects
/// pawns; every other piece moves symmetrically.
#[must_use]
pub fn targets(piece: Piece, color: Color, square: Square) -> &'static [Square] {
    let idx = square.as_index();
    match piece {
        Piece::Pawn => &PAWN_TARGETS[color.index()][idx],
        Piece::Knight => &KNIGHT_TARGETS[idx],
        Piece::Bishop => &BISHOP_TARGETS[idx],
        Piece::Rook => &ROOK_TARGETS[idx],
        Piece::Queen => &QUEEN_TARGETS[idx],
        Piece::King => &KING_TARGETS[idx],
    }
}

/// Force construction of all move-target tables.
///
/// The tables build themselves on first access; call this at startup to
/// front-load the work before any consumer reads them.
pub fn init() {
    Lazy::force(&KNIGHT_TARGETS);
    Lazy::force(&KING_TARGETS);
    Lazy::force(&BISHOP_TARGETS);
    Lazy::force(&ROOK_TARGETS);
    Lazy::force(&QUEEN_TARGETS);
    Lazy::force(&PAWN_TARGETS);
    #[cfg(feature = "logging")]
    log::debug!("move-target tables built");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn names(squares: &[Square]) -> BTreeSet<String> {
        squares.iter().map(Square::to_string).collect()
    }

    fn set(names_list: &[&str]) -> BTreeSet<String> {
        names_list.iter().map(|s| (*s).to_string()).collect()
    }

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn test_knight_targets_d4() {
        let targets = targets(Piece::Knight, Color::White, sq("d4"));
        assert_eq!(
            names(targets),
            set(&["b3", "b5", "c2", "c6", "e2", "e6", "f3", "f5"])
        );
    }

    #[test]
    fn test_knight_targets_corner() {
        let targets = targets(Piece::Knight, Color::White, sq("a1"));
        assert_eq!(names(targets), set(&["b3", "c2"]));
    }

    #[test]
    fn test_king_targets_corner() {
        let targets = targets(Piece::King, Color::White, sq("a1"));
        assert_eq!(names(targets), set(&["a2", "b1", "b2"]));
    }

    #[test]
    fn test_king_targets_center_count() {
        assert_eq!(targets(Piece::King, Color::White, sq("e4")).len(), 8);
    }

    #[test]
    fn test_rook_targets_a1() {
        let targets = targets(Piece::Rook, Color::White, sq("a1"));
        assert_eq!(targets.len(), 14);
        // Every target stays on the a-file or rank 1; nothing wraps to the h-file.
        for t in targets {
            assert!(t.file() == 0 || t.rank() == 0, "unexpected rook target {t}");
        }
    }

    #[test]
    fn test_bishop_targets_a1() {
        let targets = targets(Piece::Bishop, Color::White, sq("a1"));
        assert_eq!(targets.len(), 7);
        // Only the long diagonal is reachable from the corner.
        for t in targets {
            assert_eq!(t.rank(), t.file(), "off-diagonal bishop target {t}");
        }
    }

    #[test]
    fn test_queen_is_rook_plus_bishop() {
        for from in Square::all() {
            let queen = names(targets(Piece::Queen, Color::White, from));
            let mut combined = names(targets(Piece::Rook, Color::White, from));
            combined.extend(names(targets(Piece::Bishop, Color::White, from)));
            assert_eq!(queen, combined, "queen mismatch from {from}");
        }
    }

    #[test]
    fn test_slider_rays_are_contiguous() {
        // Walking each direction list manually must reproduce the table,
        // including element order.
        for (piece, directions) in [
            (Piece::Bishop, &BISHOP_DIRECTIONS[..]),
            (Piece::Rook, &ROOK_DIRECTIONS[..]),
            (Piece::Queen, &QUEEN_DIRECTIONS[..]),
        ] {
            for from in Square::all() {
                let mut expected = Vec::new();
                for &dir in directions {
                    let mut prev = from;
                    while let Some(next) = step(prev, dir) {
                        // Consecutive ray squares touch in both rank and file.
                        assert!(next.file().abs_diff(prev.file()) <= 1);
                        assert!(next.rank().abs_diff(prev.rank()) <= 1);
                        expected.push(next);
                        prev = next;
                    }
                }
                assert_eq!(targets(piece, Color::White, from), expected.as_slice());
            }
        }
    }

    #[test]
    fn test_leapers_match_rank_file_deltas() {
        // Cross-check the offset arithmetic against an independent
        // (rank, file) delta model.
        let knight_deltas: [(i32, i32); 8] = [
            (2, 1),
            (1, 2),
            (-1, 2),
            (-2, 1),
            (-2, -1),
            (-1, -2),
            (1, -2),
            (2, -1),
        ];
        let king_deltas: [(i32, i32); 8] = [
            (1, 0),
            (-1, 0),
            (0, 1),
            (0, -1),
            (1, 1),
            (1, -1),
            (-1, 1),
            (-1, -1),
        ];
        for (piece, deltas) in [(Piece::Knight, knight_deltas), (Piece::King, king_deltas)] {
            for from in Square::all() {
                let expected: BTreeSet<String> = deltas
                    .iter()
                    .filter_map(|&(dr, df)| {
                        let nr = from.rank() as i32 + dr;
                        let nf = from.file() as i32 + df;
                        if (0..8).contains(&nr) && (0..8).contains(&nf) {
                            Some(Square::new(nr as usize, nf as usize).unwrap().to_string())
                        } else {
                            None
                        }
                    })
                    .collect();
                assert_eq!(
                    names(targets(piece, Color::White, from)),
                    expected,
                    "{piece:?} mismatch from {from}"
                );
            }
        }
    }

    #[test]
    fn test_white_pawn_targets() {
        assert_eq!(
            names(targets(Piece::Pawn, Color::White, sq("e2"))),
            set(&["e3", "d3", "f3"])
        );
        // Edge files lose the off-board capture.
        assert_eq!(
            names(targets(Piece::Pawn, Color::White, sq("a2"))),
            set(&["a3", "b3"])
        );
        assert_eq!(
            names(targets(Piece::Pawn, Color::White, sq("h5"))),
            set(&["h6", "g6"])
        );
    }

    #[test]
    fn test_black_pawn_targets() {
        assert_eq!(
            names(targets(Piece::Pawn, Color::Black, sq("e7"))),
            set(&["e6", "d6", "f6"])
        );
        assert_eq!(
            names(targets(Piece::Pawn, Color::Black, sq("a7"))),
            set(&["a6", "b6"])
        );
        assert_eq!(
            names(targets(Piece::Pawn, Color::Black, sq("h7"))),
            set(&["h6", "g6"])
        );
    }

    #[test]
    fn test_pawns_have_no_targets_on_far_rank() {
        for file in 0..8 {
            let white = Square::new(7, file).unwrap();
            let black = Square::new(0, file).unwrap();
            assert!(targets(Piece::Pawn, Color::White, white).is_empty());
            assert!(targets(Piece::Pawn, Color::Black, black).is_empty());
        }
    }

    #[test]
    fn test_total_target_counts() {
        // Known square-by-square totals for the full board.
        let total = |piece, color| -> usize {
            Square::all().map(|s| targets(piece, color, s).len()).sum()
        };
        assert_eq!(total(Piece::Knight, Color::White), 336);
        assert_eq!(total(Piece::King, Color::White), 420);
        assert_eq!(total(Piece::Rook, Color::White), 896);
        assert_eq!(total(Piece::Bishop, Color::White), 560);
        assert_eq!(total(Piece::Queen, Color::White), 1456);
        assert_eq!(total(Piece::Pawn, Color::White), 154);
        assert_eq!(total(Piece::Pawn, Color::Black), 154);
    }

    #[test]
    fn test_targets_never_include_source() {
        for piece in Piece::ALL {
            for color in Color::BOTH {
                for from in Square::all() {
                    assert!(!targets(piece, color, from).contains(&from));
                }
            }
        }
    }
}
