//! The canonical board state.

extern crate alloc;

use alloc::vec::Vec;

use crate::player::{Player, PlayerId};

/// The full mutable model of a game in progress.
///
/// `players` is kept in insertion order, which is the authoritative display
/// order; rank is derived at projection time and never stored. Undo snapshots
/// are plain [`Clone`]s of this struct, so no snapshot ever aliases the live
/// state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    /// The roster, in insertion order.
    pub players: Vec<Player>,
    /// Whether the game has been started.
    pub started: bool,
    /// Current round number, starting at 1.
    pub round: u32,
    /// Index of the current dealer, interpreted modulo the roster size.
    /// Only meaningful while `started` and the roster is non-empty.
    pub dealer_index: usize,
}

impl BoardState {
    /// Returns the roster position of the player with the given id.
    #[must_use]
    pub fn position_of(&self, id: PlayerId) -> Option<usize> {
        self.players.iter().position(|p| p.id == id)
    }

    /// Returns the highest score on the board, or `None` for an empty roster.
    #[must_use]
    pub fn top_score(&self) -> Option<i64> {
        self.players.iter().map(|p| p.score).max()
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self {
            players: Vec::new(),
            started: false,
            round: 1,
            dealer_index: 0,
        }
    }
}
