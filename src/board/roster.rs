use crate::error::{RosterError, StartError};
use crate::player::{Player, PlayerId};

use super::Scoreboard;

impl Scoreboard {
    /// Adds a player to the roster.
    ///
    /// The name is trimmed before use. Players can be added at any time,
    /// before or after the game is started; a new player always enters with a
    /// zero score.
    ///
    /// # Errors
    ///
    /// Returns an error if the trimmed name is empty or the roster is already
    /// at [`max_players`](crate::BoardOptions::max_players).
    pub fn add_player(&self, name: &str) -> Result<PlayerId, RosterError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RosterError::EmptyName);
        }

        let mut state = self.state.lock();
        if state.players.len() >= self.options.max_players {
            return Err(RosterError::TableFull);
        }

        self.push_snapshot(&state);

        let id = self.mint_id();
        state.players.push(Player::new(id, name));
        Ok(id)
    }

    /// Removes a player from the roster.
    ///
    /// Valid both before and after the game is started. An unknown id is a
    /// guarded error and pushes no snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if no player has the given id.
    pub fn remove_player(&self, id: PlayerId) -> Result<(), RosterError> {
        let mut state = self.state.lock();
        let index = state.position_of(id).ok_or(RosterError::PlayerNotFound)?;

        self.push_snapshot(&state);
        state.players.remove(index);
        Ok(())
    }

    /// Starts the game, resetting the dealer to the first player.
    ///
    /// # Errors
    ///
    /// Returns an error if the roster is empty.
    pub fn start_game(&self) -> Result<(), StartError> {
        let mut state = self.state.lock();
        if state.players.is_empty() {
            return Err(StartError::NoPlayers);
        }

        self.push_snapshot(&state);
        state.started = true;
        state.dealer_index = 0;
        Ok(())
    }
}
