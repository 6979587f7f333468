//! Shared ownership of a board for threaded hosts.
//!
//! A [`Board`] is not reentrant: legality probes mutate it in place. When a
//! host needs to reach the same game from several threads, wrap it in a
//! [`SharedBoard`] so that exactly one of them holds it at a time.

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use crate::board::{Board, GameStatus, Move, MoveError, Square};

/// A cloneable, lock-protected handle to one game.
///
/// This wraps `Arc<Mutex<Board>>` so that every access goes through the
/// lock, including the forward/reverse probes run by move validation.
#[derive(Clone, Debug, Default)]
pub struct SharedBoard(Arc<Mutex<Board>>);

impl SharedBoard {
    /// Wrap a board, typically fresh from `Board::new` or a builder.
    #[must_use]
    pub fn new(board: Board) -> Self {
        SharedBoard(Arc::new(Mutex::new(board)))
    }

    /// Lock the board for a sequence of operations.
    #[inline]
    pub fn lock(&self) -> MutexGuard<'_, Board> {
        self.0.lock()
    }

    /// Run `f` with the board locked.
    pub fn with<R>(&self, f: impl FnOnce(&mut Board) -> R) -> R {
        f(&mut *self.0.lock())
    }

    /// Validate and play a move under the lock.
    pub fn make_move(&self, from: Square, to: Square) -> Result<Move, MoveError> {
        self.with(|board| board.make_move(from, to))
    }

    #[must_use]
    pub fn game_status(&self) -> GameStatus {
        self.with(Board::game_status)
    }

    /// Copy of the current position.
    #[must_use]
    pub fn snapshot(&self) -> Board {
        self.0.lock().clone()
    }
}

impl From<Board> for SharedBoard {
    fn from(board: Board) -> Self {
        SharedBoard::new(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Color;
    use std::thread;

    #[test]
    fn test_shared_board_clone_sees_moves() {
        let shared = SharedBoard::new(Board::new());
        let other = shared.clone();

        shared
            .make_move("e2".parse().unwrap(), "e4".parse().unwrap())
            .unwrap();
        assert_eq!(other.lock().side_to_move(), Color::Black);
    }

    #[test]
    fn test_shared_board_across_threads() {
        let shared = SharedBoard::default();
        let replies = ["e7e5", "d7d5", "c7c5", "g8f6"];

        let handle = {
            let shared = shared.clone();
            thread::spawn(move || {
                shared.with(|board| {
                    board
                        .make_move("e2".parse().unwrap(), "e4".parse().unwrap())
                        .unwrap()
                })
            })
        };
        handle.join().unwrap();

        let handles: Vec<_> = replies
            .iter()
            .map(|mv| {
                let shared = shared.clone();
                let (from, to) = mv.split_at(2);
                let (from, to): (Square, Square) = (from.parse().unwrap(), to.parse().unwrap());
                thread::spawn(move || shared.make_move(from, to).is_ok())
            })
            .collect();
        let played = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|&ok| ok)
            .count();

        // Only the first reply to arrive is Black's move; the rest are
        // rejected because White is then to move.
        assert_eq!(played, 1);
        let board = shared.snapshot();
        board.assert_consistent();
        assert_eq!(board.side_to_move(), Color::White);
    }

    #[test]
    fn test_game_status_through_handle() {
        let shared: SharedBoard = Board::new().into();
        assert_eq!(shared.game_status(), GameStatus::Ongoing);
    }
}
