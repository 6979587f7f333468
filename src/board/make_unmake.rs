use super::movegen::castle_rook_cols;
use super::{Board, MoveKind, Move, Piece, PieceState, Square};

/// Flag and locator snapshot taken by `forward`, consumed by `reverse`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct UnmakeInfo {
    mover_state: PieceState,
    rook_state: Option<PieceState>,
    kings: [Square; 2],
}

impl Board {
    fn take_expected(&mut self, sq: Square, context: &str) -> Piece {
        match self.take(sq) {
            Some(piece) => piece,
            None => {
                log::error!("{context}: no piece on {sq}");
                panic!("{context}: no piece on {sq}");
            }
        }
    }

    /// Apply `m` to the grid. The captured piece, if any, is parked in
    /// `last_captured` until the matching `reverse`.
    ///
    /// `m` must come from this position's generated move lists.
    pub(crate) fn forward(&mut self, m: Move) -> UnmakeInfo {
        let (from, to) = (m.from(), m.to());
        let mut mover = self.take_expected(from, "forward");
        let mut info = UnmakeInfo {
            mover_state: mover.state,
            rook_state: None,
            kings: self.kings,
        };

        self.last_captured = match m.kind() {
            // The victim sits beside the mover, directly behind the landing square.
            MoveKind::EnPassant => self.take(Square(from.0, to.1)),
            MoveKind::Castle => {
                let (rook_from, rook_to) = castle_rook_cols(to.1);
                let mut rook = self.take_expected(Square(to.0, rook_from), "forward castle");
                info.rook_state = Some(rook.state);
                rook.update_location(Square(to.0, rook_to));
                self.place(rook);
                None
            }
            MoveKind::Normal | MoveKind::Capture => self.take(to),
        };

        mover.update_location(to);
        if let Some(piece_type) = m.promotion_piece() {
            mover.promote(piece_type);
        }
        self.place(mover);
        info
    }

    /// Exact inverse of the immediately preceding `forward(m)`.
    pub(crate) fn reverse(&mut self, m: Move, info: UnmakeInfo) {
        let (from, to) = (m.from(), m.to());
        let mut mover = self.take_expected(to, "reverse");
        mover.location = from;
        mover.state = info.mover_state;
        self.place(mover);

        if m.kind() == MoveKind::Castle {
            let (rook_from, rook_to) = castle_rook_cols(to.1);
            let mut rook = self.take_expected(Square(to.0, rook_to), "reverse castle");
            rook.location = Square(to.0, rook_from);
            if let Some(state) = info.rook_state {
                rook.state = state;
            }
            self.place(rook);
        }

        // Captured pieces never moved, so their own location is where they return.
        if let Some(captured) = self.last_captured.take() {
            self.place(captured);
        }
        self.kings = info.kings;
    }
}
