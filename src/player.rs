//! Player identity and per-player score record.

extern crate alloc;

use alloc::string::String;

/// Opaque identifier for a player, stable for the player's lifetime.
///
/// Ids are minted from a monotonic counter and are never reused, even after
/// the player is removed from the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(
    /// Raw counter value.
    pub u32,
);

/// A player on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// The player's identifier.
    pub id: PlayerId,
    /// Display name, trimmed and non-empty.
    pub name: String,
    /// Cumulative score. May go negative; there is no ceiling.
    pub score: i64,
    /// Completed games won (tallied by rematch).
    pub wins: u32,
    /// The most recent score delta applied to this player, for transient
    /// "ghost" display. `None` until the first adjustment; an explicit
    /// `Some(0)` (a crash) displays differently from "no delta yet".
    pub last_delta: Option<i64>,
}

impl Player {
    /// Creates a fresh player with a zero score.
    #[must_use]
    pub fn new(id: PlayerId, name: &str) -> Self {
        Self {
            id,
            name: String::from(name),
            score: 0,
            wins: 0,
            last_delta: None,
        }
    }

    /// Returns whether the player's score has reached the given threshold.
    #[must_use]
    pub const fn has_reached(&self, threshold: i64) -> bool {
        self.score >= threshold
    }
}
