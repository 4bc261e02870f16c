//! Thread-safe game handle for the presentation boundary.
//!
//! `Game` itself is synchronous and single-threaded. `SharedGame` wraps
//! it in a mutex so a multi-threaded embedding (input thread, render
//! thread) sees every operation as atomic: the lock is held for the full
//! simulate-and-apply cycle, never between its steps. Nothing here fails
//! past the boundary; refused requests degrade to no-ops that hand back
//! the unchanged snapshot.

use std::sync::Arc;

use parking_lot::Mutex;

use super::state::{Game, Snapshot};
use super::types::{MoveTarget, Square};

/// A cloneable, lock-guarded handle to a [`Game`].
///
/// The presentation layer owns the handle's lifetime; there is no ambient
/// singleton.
#[derive(Clone, Debug, Default)]
pub struct SharedGame {
    inner: Arc<Mutex<Game>>,
}

impl SharedGame {
    /// Create a handle over a fresh game.
    #[must_use]
    pub fn new() -> Self {
        SharedGame {
            inner: Arc::new(Mutex::new(Game::new())),
        }
    }

    /// Wrap an existing game.
    #[must_use]
    pub fn from_game(game: Game) -> Self {
        SharedGame {
            inner: Arc::new(Mutex::new(game)),
        }
    }

    /// The legal destinations of `from` with capture flags, for move
    /// highlighting.
    #[must_use]
    pub fn legal_moves(&self, from: Square) -> Vec<MoveTarget> {
        self.inner.lock().legal_moves(from)
    }

    /// Whether moving `from` to `to` is legal for the side to move.
    #[must_use]
    pub fn is_legal(&self, from: Square, to: Square) -> bool {
        self.inner.lock().is_legal(from, to)
    }

    /// Apply a move and return the updated snapshot.
    ///
    /// An illegal or post-game request is a no-op returning the unchanged
    /// snapshot; callers are expected to validate via [`Self::legal_moves`]
    /// first.
    #[must_use]
    pub fn apply_move(&self, from: Square, to: Square) -> Snapshot {
        let mut game = self.inner.lock();
        match game.apply_move(from, to) {
            Ok(snapshot) => snapshot,
            Err(_err) => {
                #[cfg(feature = "logging")]
                log::debug!("rejected move {from}{to}: {_err}");
                game.snapshot()
            }
        }
    }

    /// Undo the last move and return the updated snapshot; a no-op when
    /// there is nothing to undo.
    #[must_use]
    pub fn undo(&self) -> Snapshot {
        let mut game = self.inner.lock();
        let _ = game.undo();
        game.snapshot()
    }

    /// Reset to a fresh game and return its snapshot.
    #[must_use]
    pub fn new_game(&self) -> Snapshot {
        let mut game = self.inner.lock();
        game.reset();
        game.snapshot()
    }

    /// The current read-only snapshot for rendering.
    #[must_use]
    pub fn state(&self) -> Snapshot {
        self.inner.lock().snapshot()
    }
}
