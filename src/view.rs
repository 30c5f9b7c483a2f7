//! Render-ready projection of the board state.
//!
//! [`project`] is a pure function: it never mutates its input, holds no state
//! between calls, and yields identical output for identical input. Callers
//! re-project after every transition instead of patching a cached view.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::board::BoardState;
use crate::options::BoardOptions;
use crate::player::{Player, PlayerId};

/// Display data for a single player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerCard {
    /// The player's identifier.
    pub id: PlayerId,
    /// Display name.
    pub name: String,
    /// Cumulative score.
    pub score: i64,
    /// Games won so far.
    pub wins: u32,
    /// Live rank, 1 = leader. Ties get distinct sequential ranks in
    /// insertion order rather than shared ranks.
    pub rank: usize,
    /// Whether the score has reached the win threshold. Display only; the
    /// game never terminates on its own.
    pub is_winner: bool,
    /// Whether this player deals the current round.
    pub is_dealer: bool,
    /// The most recent delta applied, for ghost display.
    pub last_delta: Option<i64>,
}

/// Aggregate board statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardStats {
    /// Sum of all scores.
    pub total: i64,
    /// Mean score, floored toward negative infinity.
    pub average: i64,
    /// Lead of the top score over the second, 0 with fewer than two players.
    pub leader_gap: i64,
}

/// A full render-ready view of the board.
///
/// `players` is in roster (insertion) order, not rank order; the rank is
/// carried on each card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    /// Current round number.
    pub round: u32,
    /// Whether the game has been started.
    pub started: bool,
    /// One card per player, in display order.
    pub players: Vec<PlayerCard>,
    /// Aggregate statistics, `None` while the roster is empty.
    pub stats: Option<BoardStats>,
}

/// Sorts a borrowed copy of the roster descending by score.
///
/// The sort is stable, so equal scores keep insertion order and ties resolve
/// first-come-first-served.
fn ranking_order(players: &[Player]) -> Vec<&Player> {
    let mut order: Vec<&Player> = players.iter().collect();
    order.sort_by(|a, b| b.score.cmp(&a.score));
    order
}

/// Projects the board state into a [`BoardView`].
#[must_use]
pub fn project(state: &BoardState, options: &BoardOptions) -> BoardView {
    let order = ranking_order(&state.players);

    let dealer_seat = if state.started && !state.players.is_empty() {
        Some(state.dealer_index % state.players.len())
    } else {
        None
    };

    let players = state
        .players
        .iter()
        .enumerate()
        .map(|(seat, player)| {
            let rank = order
                .iter()
                .position(|ranked| ranked.id == player.id)
                .map_or(0, |i| i + 1);

            PlayerCard {
                id: player.id,
                name: player.name.clone(),
                score: player.score,
                wins: player.wins,
                rank,
                is_winner: player.has_reached(options.win_threshold),
                is_dealer: dealer_seat == Some(seat),
                last_delta: player.last_delta,
            }
        })
        .collect();

    let stats = if state.players.is_empty() {
        None
    } else {
        let total: i64 = state.players.iter().map(|p| p.score).sum();
        let average = total.div_euclid(state.players.len() as i64);
        let leader_gap = if order.len() >= 2 {
            order[0].score - order[1].score
        } else {
            0
        };
        Some(BoardStats {
            total,
            average,
            leader_gap,
        })
    };

    BoardView {
        round: state.round,
        started: state.started,
        players,
        stats,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_scores(scores: &[i64]) -> BoardState {
        let players = scores
            .iter()
            .enumerate()
            .map(|(i, &score)| {
                let mut p = Player::new(PlayerId(i as u32), "p");
                p.score = score;
                p
            })
            .collect();
        BoardState {
            players,
            started: true,
            round: 1,
            dealer_index: 0,
        }
    }

    #[test]
    fn ties_get_sequential_ranks_in_insertion_order() {
        let state = state_with_scores(&[50, 80, 80, 10]);
        let view = project(&state, &BoardOptions::default());

        let ranks: Vec<usize> = view.players.iter().map(|c| c.rank).collect();
        assert_eq!(ranks, vec![3, 1, 2, 4]);
    }

    #[test]
    fn average_floors_toward_negative_infinity() {
        let state = state_with_scores(&[-5, 2]);
        let stats = project(&state, &BoardOptions::default()).stats.unwrap();
        assert_eq!(stats.total, -3);
        assert_eq!(stats.average, -2);
    }

    #[test]
    fn stats_absent_for_empty_roster() {
        let state = BoardState::default();
        let view = project(&state, &BoardOptions::default());
        assert!(view.stats.is_none());
        assert!(view.players.is_empty());
    }

    #[test]
    fn leader_gap_zero_for_single_player() {
        let state = state_with_scores(&[42]);
        let stats = project(&state, &BoardOptions::default()).stats.unwrap();
        assert_eq!(stats.leader_gap, 0);
    }

    #[test]
    fn dealer_flag_requires_started() {
        let mut state = state_with_scores(&[1, 2]);
        state.started = false;
        let view = project(&state, &BoardOptions::default());
        assert!(view.players.iter().all(|c| !c.is_dealer));
    }
}
