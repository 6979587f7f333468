//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//!
//! let mut board = Board::new();
//! assert_eq!(board.game_status(), GameStatus::Ongoing);
//! ```

pub use super::{
    Board, BoardBuilder, Color, GameStatus, Move, MoveError, MoveKind, PieceType, Square,
    SquareError,
};
