//! Error types for board operations.

use std::fmt;

use super::{Color, PieceType, Square};

/// Error type for out-of-range or malformed squares
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row out of bounds (must be 0-7)
    RowOutOfBounds { row: usize },
    /// Col out of bounds (must be 0-7)
    ColOutOfBounds { col: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-7)")
            }
            SquareError::ColOutOfBounds { col } => {
                write!(f, "Col {col} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for rejected move requests. The board is left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// A coordinate is off the board
    InvalidSquare(SquareError),
    /// No piece stands on the source square
    EmptySquare { square: Square },
    /// The source piece does not belong to the side to move
    WrongSide { square: Square, to_move: Color },
    /// The destination is not in the piece's legal move list
    IllegalMove { from: Square, to: Square },
    /// Promotion piece given for a non-promoting move, or not a valid target
    InvalidPromotion { piece: PieceType },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::InvalidSquare(err) => write!(f, "{err}"),
            MoveError::EmptySquare { square } => {
                write!(f, "No piece on {square}")
            }
            MoveError::WrongSide { square, to_move } => {
                write!(f, "Piece on {square} does not belong to {to_move}, who is to move")
            }
            MoveError::IllegalMove { from, to } => {
                write!(f, "Illegal move {from}{to}")
            }
            MoveError::InvalidPromotion { piece } => {
                write!(f, "Invalid promotion piece '{}'", piece.to_char())
            }
        }
    }
}

impl std::error::Error for MoveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveError::InvalidSquare(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SquareError> for MoveError {
    fn from(err: SquareError) -> Self {
        MoveError::InvalidSquare(err)
    }
}

/// Error type for decoding a packed move
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveDecodeError {
    /// Flag nibble uses a reserved value
    InvalidFlag { flag: u16 },
}

impl fmt::Display for MoveDecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveDecodeError::InvalidFlag { flag } => {
                write!(f, "Reserved move flag {flag}")
            }
        }
    }
}

impl std::error::Error for MoveDecodeError {}

/// Error type for positions rejected by the builder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// A color has no king
    MissingKing { color: Color },
    /// A color has more than one king
    DuplicateKing { color: Color, count: usize },
    /// A piece was placed off the board
    InvalidSquare(SquareError),
    /// The en passant flag was set on something other than an opposing
    /// pawn that could have just double-stepped
    InvalidDoubleMove { square: Square },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::MissingKing { color } => write!(f, "{color} has no king"),
            BuildError::DuplicateKing { color, count } => {
                write!(f, "{color} has {count} kings, expected exactly one")
            }
            BuildError::InvalidSquare(err) => write!(f, "{err}"),
            BuildError::InvalidDoubleMove { square } => {
                write!(f, "no pawn on {square} can have just double-stepped")
            }
        }
    }
}

impl std::error::Error for BuildError {}

impl From<SquareError> for BuildError {
    fn from(err: SquareError) -> Self {
        BuildError::InvalidSquare(err)
    }
}
