//! Check trimming: drop every candidate move that leaves the mover's own
//! king attacked.
//!
//! Each candidate is probed with a `forward`/`reverse` pair and a fresh
//! attack map of the opponent, so pins and discovered attacks are caught
//! whether or not the king was in check beforehand.

use super::error::MoveError;
use super::{Board, Color, Move, Square};

impl Board {
    /// Apply `m` transiently and report whether `color`'s king ends up
    /// attacked. The board is restored exactly before returning.
    pub(crate) fn leaves_king_attacked(&mut self, m: Move, color: Color) -> bool {
        let info = self.forward(m);
        let king = self.kings[color.index()];
        let attacked = self.attack_map(color.opponent()).contains(king);
        self.reverse(m, info);
        attacked
    }

    /// Filter the cached lists of every `color` piece down to legal moves.
    /// Returns how many candidates were discarded.
    pub(crate) fn trim_checks(&mut self, color: Color) -> usize {
        let mut removed = 0;
        for sq in self.occupied[color.index()].iter() {
            let Some(piece) = self.cell_mut(sq) else {
                continue;
            };
            let mut moves = std::mem::take(&mut piece.moves);
            let before = moves.len();
            moves.retain(|&m| !self.leaves_king_attacked(m, color));
            removed += before - moves.len();
            if let Some(piece) = self.cell_mut(sq) {
                piece.moves = moves;
            }
        }
        removed
    }

    /// Whether playing `m` would leave the mover's own king attacked.
    ///
    /// `m` must be a pseudo-legal move of the piece on its source square;
    /// anything else is rejected with [`MoveError::IllegalMove`]. Moves built
    /// outside the crate come from [`Move::try_new`], so their squares are
    /// already on the board. The board is left exactly as it was.
    pub fn causes_check(&mut self, m: Move) -> Result<bool, MoveError> {
        let from = m.from().validate()?;
        let to = m.to().validate()?;
        let color = self
            .color_at(from)
            .ok_or(MoveError::EmptySquare { square: from })?;

        self.update_board();
        if !self.pseudo_moves(from).contains(&m) {
            return Err(MoveError::IllegalMove { from, to });
        }
        Ok(self.leaves_king_attacked(m, color))
    }
}
