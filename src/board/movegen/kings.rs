use super::super::{Board, Color, Move, PieceType, Square};

/// Rook (from, to) columns for a castle landing on `king_to_col`.
pub(crate) const fn castle_rook_cols(king_to_col: usize) -> (usize, usize) {
    if king_to_col == 6 {
        (7, 5)
    } else {
        (0, 3)
    }
}

struct CastleSide {
    rook_col: usize,
    /// Must be empty.
    between: &'static [usize],
    /// Crossed or landed on by the king; must not be attacked.
    path: &'static [usize],
}

const CASTLE_SIDES: [CastleSide; 2] = [
    CastleSide {
        rook_col: 7,
        between: &[5, 6],
        path: &[5, 6],
    },
    CastleSide {
        rook_col: 0,
        between: &[1, 2, 3],
        path: &[3, 2],
    },
];

impl Board {
    /// Castle moves for `color`, judged against the current attack maps.
    pub(crate) fn castle_moves(&self, color: Color) -> Vec<Move> {
        let mut moves = Vec::new();
        let row = color.back_row();
        let king_sq = self.kings[color.index()];
        let enemy_attacks = self.attacks[color.opponent().index()];

        if king_sq != Square(row, 4) || enemy_attacks.contains(king_sq) {
            return moves;
        }
        match self.cell(king_sq) {
            Some(king) if king.is_unmoved(PieceType::King) => {}
            _ => return moves,
        }

        for side in &CASTLE_SIDES {
            let rook_ok = matches!(
                self.cell(Square(row, side.rook_col)),
                Some(rook) if rook.color() == color && rook.is_unmoved(PieceType::Rook)
            );
            if !rook_ok {
                continue;
            }
            if !side.between.iter().all(|&c| self.is_empty(Square(row, c))) {
                continue;
            }
            if side.path.iter().any(|&c| enemy_attacks.contains(Square(row, c))) {
                continue;
            }
            let landing = side.path[side.path.len() - 1];
            moves.push(Move::castle(king_sq, Square(row, landing)));
        }
        moves
    }
}
