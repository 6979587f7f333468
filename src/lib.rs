pub mod board;
pub mod sync;

pub use board::{Board, Color, GameStatus, Move, MoveKind, Piece, PieceType, Square};
pub use sync::SharedBoard;
