//! Fluent builder for constructing positions other than the standard start.
//!
//! # Example
//! ```
//! use chess_rules::board::{BoardBuilder, Color, PieceType, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square(7, 4), Color::White, PieceType::King)
//!     .piece(Square(0, 4), Color::Black, PieceType::King)
//!     .piece(Square(6, 0), Color::White, PieceType::Pawn)
//!     .side_to_move(Color::White)
//!     .build()
//!     .unwrap();
//! assert_eq!(board.king_square(Color::Black), Square(0, 4));
//! ```

use super::error::BuildError;
use super::{Board, Color, Piece, PieceState, PieceType, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Color, PieceType)>,
    moved: Vec<Square>,
    double_moved: Vec<Square>,
    side_to_move: Color,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            pieces: Vec::new(),
            moved: Vec::new(),
            double_moved: Vec::new(),
            side_to_move: Color::White,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();
        let back_rank = [
            PieceType::Rook,
            PieceType::Knight,
            PieceType::Bishop,
            PieceType::Queen,
            PieceType::King,
            PieceType::Bishop,
            PieceType::Knight,
            PieceType::Rook,
        ];
        for color in Color::BOTH {
            for (col, &piece_type) in back_rank.iter().enumerate() {
                builder
                    .pieces
                    .push((Square(color.back_row(), col), color, piece_type));
            }
            for col in 0..8 {
                builder
                    .pieces
                    .push((Square(color.pawn_start_row(), col), color, PieceType::Pawn));
            }
        }
        builder
    }

    /// Place a piece, replacing whatever the builder had on that square.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece_type: PieceType) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self.pieces.push((square, color, piece_type));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self
    }

    /// Mark the pawn, rook or king on `square` as having moved.
    ///
    /// Pieces away from their home squares are marked automatically.
    #[must_use]
    pub fn moved(mut self, square: Square) -> Self {
        self.moved.push(square);
        self
    }

    /// Mark the pawn on `square` as having just made a double step, making
    /// it capturable en passant on the next ply.
    ///
    /// The pawn must belong to the side not on move and stand on its
    /// double-step row, otherwise `build` fails.
    #[must_use]
    pub fn double_moved(mut self, square: Square) -> Self {
        self.double_moved.push(square);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Validate the position and build it with move lists generated.
    pub fn build(self) -> Result<Board, BuildError> {
        for color in Color::BOTH {
            let count = self
                .pieces
                .iter()
                .filter(|&&(_, c, pt)| c == color && pt == PieceType::King)
                .count();
            match count {
                0 => return Err(BuildError::MissingKing { color }),
                1 => {}
                _ => return Err(BuildError::DuplicateKing { color, count }),
            }
        }

        let mut board = Board::empty();
        for (square, color, piece_type) in self.pieces {
            let square = square.validate()?;
            let mut piece = Piece::new(color, piece_type, square);
            if !on_home_square(color, piece_type, square) {
                piece.mark_moved();
            }
            board.place(piece);
        }
        for square in self.moved {
            if let Some(piece) = board.cell_mut(square.validate()?) {
                piece.mark_moved();
            }
        }
        let mover = self.side_to_move;
        for square in self.double_moved {
            let piece = match board.cell_mut(square.validate()?) {
                Some(piece)
                    if piece.piece_type() == PieceType::Pawn
                        && piece.color() == mover.opponent()
                        && square.0 == double_step_row(piece.color()) =>
                {
                    piece
                }
                _ => return Err(BuildError::InvalidDoubleMove { square }),
            };
            piece.state = PieceState::Pawn {
                has_moved: true,
                just_double_moved: true,
            };
        }

        board.side_to_move = self.side_to_move;
        board.dirty = true;
        board.update_board();
        Ok(board)
    }
}

/// Whether an unmoved piece of this kind could stand on `square`.
fn on_home_square(color: Color, piece_type: PieceType, square: Square) -> bool {
    match piece_type {
        PieceType::Pawn => square.0 == color.pawn_start_row(),
        PieceType::Rook => square == Square(color.back_row(), 0) || square == Square(color.back_row(), 7),
        PieceType::King => square == Square(color.back_row(), 4),
        _ => true,
    }
}

/// Row a pawn of `color` lands on after a double step.
const fn double_step_row(color: Color) -> usize {
    match color {
        Color::White => 4,
        Color::Black => 3,
    }
}
