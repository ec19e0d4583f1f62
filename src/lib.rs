//! Precomputed move-target and piece-square score tables for an 8x8 board.
//!
//! Two table sets are built once at startup and shared read-only for the
//! lifetime of the process:
//!
//! - [`targets`]: for every piece type and source square, the pseudo-legal
//!   destination squares on an otherwise empty board (sliding pieces stop at
//!   the board edge; occupancy, checks and pins are out of scope).
//! - [`psqt`]: material value plus square-dependent positional bonus for
//!   every (color, piece, square), with a vertical mirror for Black and
//!   split opening/endgame tables for the king.
//!
//! # Example
//! ```
//! use chess_tables::{targets, Color, Piece, Square};
//!
//! let d4: Square = "d4".parse().unwrap();
//! let knight_moves = targets(Piece::Knight, Color::White, d4);
//! assert_eq!(knight_moves.len(), 8);
//! ```

pub mod board;
mod error;
pub mod psqt;
pub mod targets;
mod types;

pub use board::Board;
pub use error::SquareError;
pub use psqt::{king_score, piece_square_score, score_tables, GamePhase, ScoreTables};
pub use targets::targets;
pub use types::{Color, Piece, Square};

/// Force construction of every precomputed table.
///
/// All tables build themselves lazily on first access; calling this once at
/// startup front-loads the work so no consumer pays it later.
pub fn init() {
    targets::init();
    psqt::init();
}
