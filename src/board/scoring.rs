extern crate alloc;

use alloc::vec::Vec;

use crate::error::{RoundError, ScoreError};
use crate::player::PlayerId;

use super::{BoardState, Scoreboard};

/// Parses a raw score entry, treating unparseable input as 0.
fn parse_entry(raw: &str) -> i64 {
    raw.trim().parse::<i64>().unwrap_or(0)
}

impl Scoreboard {
    /// Records a round score for the given player.
    ///
    /// The delta is computed from `raw` (an integer in text form, unparseable
    /// input counting as 0) plus the flip bonus when `flip_bonus` is set. A
    /// `crash` forces a delta of exactly 0, overriding both the input and the
    /// bonus. The applied delta is stored as the player's ghost delta, so a
    /// crash shows as an explicit `0` rather than "no delta yet".
    ///
    /// Returns the delta that was applied.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError::NoInput`] when `raw` is literally empty with no
    /// bonus and no crash: an empty field is "nothing entered", not an
    /// explicit zero, and must not touch the state or the history. Returns
    /// [`ScoreError::PlayerNotFound`] for an unknown id.
    pub fn record_score(
        &self,
        id: PlayerId,
        raw: &str,
        flip_bonus: bool,
        crash: bool,
    ) -> Result<i64, ScoreError> {
        let mut state = self.state.lock();
        let index = state.position_of(id).ok_or(ScoreError::PlayerNotFound)?;

        let delta = if crash {
            0
        } else {
            let entered = parse_entry(raw);
            if entered == 0 && !flip_bonus && raw.is_empty() {
                return Err(ScoreError::NoInput);
            }
            if flip_bonus {
                entered + self.options.flip_bonus
            } else {
                entered
            }
        };

        self.push_snapshot(&state);

        let player = &mut state.players[index];
        player.score += delta;
        player.last_delta = Some(delta);
        Ok(delta)
    }

    /// Advances to the next round, rotating the dealer by one seat.
    ///
    /// Returns the new round number.
    ///
    /// # Errors
    ///
    /// Returns an error if the roster is empty, since the dealer rotation is
    /// taken modulo the roster size.
    pub fn next_round(&self) -> Result<u32, RoundError> {
        let mut state = self.state.lock();
        if state.players.is_empty() {
            return Err(RoundError::EmptyRoster);
        }

        self.push_snapshot(&state);
        state.round += 1;
        state.dealer_index = (state.dealer_index + 1) % state.players.len();
        Ok(state.round)
    }

    /// Tallies the finished game and resets the board for a rematch.
    ///
    /// Every player whose score is at the roster maximum AND at or above the
    /// win threshold gains one win; a tie at the top counts every tied player
    /// as a winner. All scores and ghost deltas are cleared, the round resets
    /// to 1, and the dealer advances one seat. The game stays started.
    ///
    /// Confirmation of this destructive action is the caller's concern.
    ///
    /// Returns the ids of the players whose win tally was incremented.
    ///
    /// # Errors
    ///
    /// Returns an error if the roster is empty.
    pub fn rematch(&self) -> Result<Vec<PlayerId>, RoundError> {
        let mut state = self.state.lock();
        if state.players.is_empty() {
            return Err(RoundError::EmptyRoster);
        }

        self.push_snapshot(&state);

        let top = state.top_score().unwrap_or(0);
        let threshold = self.options.win_threshold;
        let mut winners = Vec::new();

        for player in &mut state.players {
            if player.score == top && player.has_reached(threshold) {
                player.wins += 1;
                winners.push(player.id);
            }
            player.score = 0;
            player.last_delta = None;
        }

        state.round = 1;
        state.dealer_index = (state.dealer_index + 1) % state.players.len();
        Ok(winners)
    }

    /// Discards the entire board, roster included, and returns to the empty
    /// default.
    ///
    /// The undo history is NOT cleared: the pre-reset snapshot stays
    /// undoable. Confirmation of this destructive action is the caller's
    /// concern.
    pub fn reset_all(&self) {
        let mut state = self.state.lock();
        self.push_snapshot(&state);
        *state = BoardState::default();
    }
}
