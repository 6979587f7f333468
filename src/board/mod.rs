//! Chess board representation and rules.
//!
//! The board owns every piece in an 8×8 grid, keeps each piece's list of
//! legal moves up to date, and tracks which squares each side attacks.
//! Moves are checked for legality by applying them transiently and
//! reversing them again.
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, Color, GameStatus, Square};
//!
//! let mut board = Board::new();
//! println!("Starting position has {} legal moves", board.all_legal_moves(Color::White).len());
//!
//! let e2: Square = "e2".parse().unwrap();
//! let e4: Square = "e4".parse().unwrap();
//! board.make_move(e2, e4).unwrap();
//! assert_eq!(board.side_to_move(), Color::Black);
//! assert_eq!(board.game_status(), GameStatus::Ongoing);
//! ```

mod attack_tables;
mod builder;
mod controller;
mod debug;
mod error;
mod legality;
mod make_unmake;
mod movegen;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use controller::GameStatus;
pub use error::{BuildError, MoveDecodeError, MoveError, SquareError};
pub use state::Board;
pub use types::{Bitboard, BitboardIter, Color, Move, MoveKind, Piece, PieceState, PieceType, Square};

pub(crate) use types::PROMOTION_PIECES;
