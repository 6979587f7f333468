//! Public game surface: validation, committing moves and end-of-game queries.

use std::fmt;

use super::error::MoveError;
use super::{Board, Color, Move, MoveKind, PieceType, Square};

/// Outcome for the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            GameStatus::Ongoing => "ongoing",
            GameStatus::Check => "check",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
        }
    }

    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Board {
    /// Regenerate every candidate list, rebuild both attack maps and trim
    /// both colors. Does nothing when the board has not changed since the
    /// last full pass.
    pub fn update_board(&mut self) {
        if !self.dirty {
            return;
        }
        self.regenerate_pseudo_moves();
        let trimmed = [
            self.trim_checks(Color::White),
            self.trim_checks(Color::Black),
        ];
        self.dirty = false;
        log::trace!(
            "regenerated board: trimmed {} white and {} black candidates",
            trimmed[0],
            trimmed[1]
        );
    }

    /// Whether `from` holds a piece of the side to move with `to` among its
    /// legal destinations. Errors only for off-board coordinates.
    pub fn valid_move(&mut self, from: Square, to: Square) -> Result<bool, MoveError> {
        let from = from.validate()?;
        let to = to.validate()?;
        Ok(self.find_legal(from, to).is_some())
    }

    /// Play `from`→`to` for the side to move. Promotions become queens.
    pub fn make_move(&mut self, from: Square, to: Square) -> Result<Move, MoveError> {
        self.make_move_inner(from, to, None)
    }

    /// Play a pawn move onto the promotion row, choosing the new piece.
    pub fn make_move_promoting(
        &mut self,
        from: Square,
        to: Square,
        piece: PieceType,
    ) -> Result<Move, MoveError> {
        if !piece.is_promotion_target() {
            return Err(MoveError::InvalidPromotion { piece });
        }
        self.make_move_inner(from, to, Some(piece))
    }

    fn make_move_inner(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceType>,
    ) -> Result<Move, MoveError> {
        let from = from.validate()?;
        let to = to.validate()?;
        self.update_board();

        let color = self
            .color_at(from)
            .ok_or(MoveError::EmptySquare { square: from })?;
        if color != self.side_to_move {
            return Err(MoveError::WrongSide {
                square: from,
                to_move: self.side_to_move,
            });
        }

        let candidates: Vec<Move> = self
            .cell(from)
            .map(|p| p.moves().iter().copied().filter(|m| m.to() == to).collect())
            .unwrap_or_default();
        if candidates.is_empty() {
            return Err(MoveError::IllegalMove { from, to });
        }
        let mv = match promotion {
            None => candidates
                .iter()
                .copied()
                .find(|m| matches!(m.promotion_piece(), None | Some(PieceType::Queen)))
                .ok_or(MoveError::IllegalMove { from, to })?,
            Some(piece) => candidates
                .iter()
                .copied()
                .find(|m| m.promotion_piece() == Some(piece))
                .ok_or(MoveError::InvalidPromotion { piece })?,
        };

        self.commit(mv);
        Ok(mv)
    }

    fn find_legal(&mut self, from: Square, to: Square) -> Option<Move> {
        self.update_board();
        let piece = self.cell(from)?;
        if piece.color() != self.side_to_move {
            return None;
        }
        piece.moves().iter().copied().find(|m| m.to() == to)
    }

    /// Apply a legal move permanently and regenerate for the next ply.
    pub(crate) fn commit(&mut self, mv: Move) {
        let mover = self.side_to_move;
        self.forward(mv);
        let captured = self.last_captured.take();

        // A double step may only be answered en passant on the very next ply.
        let opponent = mover.opponent();
        for sq in self.occupied[opponent.index()].iter() {
            if let Some(piece) = self.cell_mut(sq) {
                piece.clear_double_move();
            }
        }

        self.side_to_move = opponent;
        self.dirty = true;
        match captured {
            Some(piece) => log::debug!(
                "{mover} played {mv} ({}) capturing {:?}",
                mv.kind().to_char(),
                piece.piece_type()
            ),
            None => log::debug!("{mover} played {mv} ({})", mv.kind().to_char()),
        }
        self.update_board();

        if log::log_enabled!(log::Level::Debug) {
            let status = self.game_status();
            if status != GameStatus::Ongoing {
                log::debug!("{opponent} to move: {status}");
            }
        }
    }

    /// Whether `color`'s king sits on a square the opponent attacks.
    #[must_use]
    pub fn is_check(&self, color: Color) -> bool {
        self.attacks[color.opponent().index()].contains(self.kings[color.index()])
    }

    fn has_no_moves(&mut self, color: Color) -> bool {
        self.update_board();
        self.occupied[color.index()]
            .iter()
            .all(|sq| self.cell(sq).map_or(true, |p| p.moves().is_empty()))
    }

    #[must_use]
    pub fn is_stalemate(&mut self, color: Color) -> bool {
        self.has_no_moves(color) && !self.is_check(color)
    }

    #[must_use]
    pub fn is_checkmate(&mut self, color: Color) -> bool {
        self.has_no_moves(color) && self.is_check(color)
    }

    pub fn game_status(&mut self) -> GameStatus {
        let color = self.side_to_move;
        let stuck = self.has_no_moves(color);
        match (self.is_check(color), stuck) {
            (true, true) => GameStatus::Checkmate,
            (false, true) => GameStatus::Stalemate,
            (true, false) => GameStatus::Check,
            (false, false) => GameStatus::Ongoing,
        }
    }

    /// Trimmed moves of the piece on `at`.
    pub fn legal_moves(&mut self, at: Square) -> Result<&[Move], MoveError> {
        let at = at.validate()?;
        self.update_board();
        self.cell(at)
            .map(|p| p.moves())
            .ok_or(MoveError::EmptySquare { square: at })
    }

    /// Every legal move of `color`, in square order.
    pub fn all_legal_moves(&mut self, color: Color) -> Vec<Move> {
        self.update_board();
        self.occupied[color.index()]
            .iter()
            .filter_map(|sq| self.cell(sq))
            .flat_map(|p| p.moves().iter().copied())
            .collect()
    }

    /// Count leaf positions `depth` plies ahead of the side to move.
    pub fn perft(&mut self, depth: u32) -> u64 {
        let side = self.side_to_move;
        let moves = self.all_legal_moves(side);
        if depth <= 1 {
            return if depth == 0 { 1 } else { moves.len() as u64 };
        }
        moves
            .into_iter()
            .map(|mv| {
                let mut child = self.clone();
                child.commit(mv);
                child.perft(depth - 1)
            })
            .sum()
    }

    /// Castle moves currently legal for `color`.
    pub fn castle_options(&mut self, color: Color) -> Vec<Move> {
        let king = self.kings[color.index()];
        self.update_board();
        self.cell(king)
            .map(|k| {
                k.moves()
                    .iter()
                    .copied()
                    .filter(|m| m.kind() == MoveKind::Castle)
                    .collect()
            })
            .unwrap_or_default()
    }
}
