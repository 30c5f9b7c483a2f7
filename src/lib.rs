//! A scorekeeping engine for Flip Seven style card games with optional
//! `no_std` support.
//!
//! The crate provides a [`Scoreboard`] type that manages the roster, round
//! and dealer rotation, cumulative scoring with the flip bonus and crash
//! rules, a bounded undo history, and a pure ranking projection for display.
//!
//! # Example
//!
//! ```
//! use flipscore::{BoardOptions, Scoreboard};
//!
//! let board = Scoreboard::new(BoardOptions::default());
//! let alice = board.add_player("Alice").unwrap();
//! board.start_game().unwrap();
//! board.record_score(alice, "10", true, false).unwrap();
//! assert_eq!(board.view().players[0].score, 25);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod board;
pub mod error;
pub mod options;
pub mod player;
mod sync;
pub mod view;

// Re-export main types
pub use board::{BoardState, Scoreboard};
pub use error::{RosterError, RoundError, ScoreError, StartError, UndoError};
pub use options::BoardOptions;
pub use player::{Player, PlayerId};
pub use view::{BoardStats, BoardView, PlayerCard, project};
