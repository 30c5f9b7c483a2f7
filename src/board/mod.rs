//! Scoreboard engine and state management.

use core::sync::atomic::{AtomicU32, Ordering};

use alloc::vec::Vec;

use crate::options::BoardOptions;
use crate::player::{Player, PlayerId};
use crate::sync::Mutex;
use crate::view::{BoardView, project};

mod history;
mod roster;
mod scoring;
pub mod state;

pub use state::BoardState;

/// A scoreboard engine that manages the roster, rounds, and undo history.
///
/// The board owns the canonical [`BoardState`] and a bounded stack of
/// pre-mutation snapshots. Every mutating operation is atomic: preconditions
/// are checked before the snapshot is taken, so a rejected call leaves both
/// the state and the history untouched. Use [`BoardOptions`] to configure the
/// win threshold, flip bonus, roster capacity, and undo depth.
pub struct Scoreboard {
    /// Board options.
    pub options: BoardOptions,
    /// Canonical board state.
    pub(crate) state: Mutex<BoardState>,
    /// Pre-mutation snapshots, oldest first.
    pub(crate) history: Mutex<Vec<BoardState>>,
    /// Next player ID to assign.
    next_id: AtomicU32,
}

impl Scoreboard {
    /// Creates a new board with an empty roster.
    ///
    /// # Example
    ///
    /// ```
    /// use flipscore::{BoardOptions, Scoreboard};
    ///
    /// let board = Scoreboard::new(BoardOptions::default());
    /// assert_eq!(board.player_count(), 0);
    /// ```
    #[must_use]
    pub fn new(options: BoardOptions) -> Self {
        Self::from_state(options, BoardState::default())
    }

    /// Creates a board from a previously captured state, e.g. one rehydrated
    /// from a persisted blob.
    ///
    /// The id counter is seeded past the largest id in `state`, so a
    /// rehydrated board keeps minting unique ids.
    #[must_use]
    pub fn from_state(options: BoardOptions, state: BoardState) -> Self {
        let next_id = state
            .players
            .iter()
            .map(|p| p.id.0)
            .max()
            .map_or(0, |max| max + 1);

        Self {
            options,
            state: Mutex::new(state),
            history: Mutex::new(Vec::new()),
            next_id: AtomicU32::new(next_id),
        }
    }

    /// Mints a fresh player id.
    pub(crate) fn mint_id(&self) -> PlayerId {
        PlayerId(self.next_id.fetch_add(1, Ordering::SeqCst))
    }

    /// Returns a deep copy of the current board state.
    #[must_use]
    pub fn state(&self) -> BoardState {
        self.state.lock().clone()
    }

    /// Returns the number of players on the roster.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.state.lock().players.len()
    }

    /// Returns the current round number.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.state.lock().round
    }

    /// Returns whether the game has been started.
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.state.lock().started
    }

    /// Returns a copy of the player with the given id.
    #[must_use]
    pub fn get_player(&self, id: PlayerId) -> Option<Player> {
        let state = self.state.lock();
        state.players.iter().find(|p| p.id == id).cloned()
    }

    /// Returns the id of the current dealer.
    ///
    /// Returns `None` before the game is started or when the roster is empty.
    #[must_use]
    pub fn dealer(&self) -> Option<PlayerId> {
        let state = self.state.lock();
        if !state.started || state.players.is_empty() {
            return None;
        }
        let index = state.dealer_index % state.players.len();
        state.players.get(index).map(|p| p.id)
    }

    /// Projects the current state into a render-ready view.
    ///
    /// Equivalent to calling [`project`] on a copy of the state; the view
    /// holds no reference to the live board.
    #[must_use]
    pub fn view(&self) -> BoardView {
        project(&self.state.lock(), &self.options)
    }
}
