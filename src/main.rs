//! Demonstration entry point: prints the starting board and a few sample
//! table lookups.

use std::error::Error;

use chess_tables::{
    king_score, piece_square_score, targets, Board, Color, GamePhase, Piece, Square,
};

fn main() -> Result<(), Box<dyn Error>> {
    chess_tables::init();

    let board = Board::new();
    print!("{board}");

    let c3: Square = "c3".parse()?;
    let e4: Square = "e4".parse()?;
    let d4: Square = "d4".parse()?;

    println!(
        "white pawn score on c3 = {}",
        piece_square_score(Color::White, Some(Piece::Pawn), c3)
    );
    println!(
        "black pawn score on c3 = {}",
        piece_square_score(Color::Black, Some(Piece::Pawn), c3)
    );
    println!(
        "white knight score on c3 = {}",
        piece_square_score(Color::White, Some(Piece::Knight), c3)
    );
    println!(
        "king opening score white e4 = {}",
        king_score(Color::White, GamePhase::Opening, e4)
    );
    println!(
        "king endgame score black e4 = {}",
        king_score(Color::Black, GamePhase::Endgame, e4)
    );

    let knight_moves: Vec<String> = targets(Piece::Knight, Color::White, d4)
        .iter()
        .map(Square::to_string)
        .collect();
    println!("knight from d4 can move to: {}", knight_moves.join(" "));

    Ok(())
}
