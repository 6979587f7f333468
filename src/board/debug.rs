use std::fmt;

use super::{Board, Color, Square};

/// Text diagram: White pieces upper-case, Black lower-case, rank 8 on top.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  +-----------------+")?;
        for row in 0..8 {
            write!(f, "{} |", 8 - row)?;
            for col in 0..8 {
                let ch = match self.cell(Square(row, col)) {
                    Some(p) if p.color() == Color::White => {
                        p.piece_type().to_char().to_ascii_uppercase()
                    }
                    Some(p) => p.piece_type().to_char(),
                    None => '.',
                };
                write!(f, " {ch}")?;
            }
            writeln!(f, " |")?;
        }
        writeln!(f, "  +-----------------+")?;
        writeln!(f, "    a b c d e f g h")?;
        write!(f, "{} to move", self.side_to_move)
    }
}

#[cfg(debug_assertions)]
impl Board {
    /// Debug helper to print both attack maps
    pub fn debug_attacks(&self) {
        for color in Color::BOTH {
            println!("{color} attacks:");
            println!("{}", self.attacks(color));
        }
        println!("------------------------------------");
    }
}
