//! Error types for board operations.
//!
//! Every failure here is a rejected precondition: the operation performs no
//! mutation and pushes nothing onto the undo history.

use thiserror::Error;

/// Errors that can occur while editing the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RosterError {
    /// The trimmed name is empty.
    #[error("player name is empty")]
    EmptyName,
    /// The roster is at capacity.
    #[error("roster is full")]
    TableFull,
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
}

/// Errors that can occur when starting the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StartError {
    /// The roster is empty.
    #[error("need at least one player")]
    NoPlayers,
}

/// Errors that can occur while recording a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// Empty input with no bonus: nothing was entered.
    #[error("nothing entered")]
    NoInput,
}

/// Errors that can occur while advancing the round or starting a rematch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The roster is empty, so the dealer cannot rotate.
    #[error("roster is empty")]
    EmptyRoster,
}

/// Errors that can occur while undoing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UndoError {
    /// The undo history is empty.
    #[error("nothing to undo")]
    NothingToUndo,
}
