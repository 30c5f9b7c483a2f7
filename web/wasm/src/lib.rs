use flipscore::{BoardOptions, BoardState, BoardStats, BoardView, Player, PlayerId, Scoreboard};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmBoard {
    board: Scoreboard,
}

#[wasm_bindgen]
impl WasmBoard {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            board: Scoreboard::new(BoardOptions::default()),
        }
    }

    /// Rehydrates a board from a persisted blob.
    ///
    /// Absent, empty, or malformed blobs yield the empty default board, so a
    /// corrupted storage slot never blocks page load.
    pub fn from_blob(blob: &str) -> Self {
        let state = serde_json::from_str::<SavedState>(blob)
            .map(BoardState::from)
            .unwrap_or_default();

        Self {
            board: Scoreboard::from_state(BoardOptions::default(), state),
        }
    }

    /// Serializes the current state for the page's storage slot.
    ///
    /// The undo history is intentionally excluded; it does not survive a
    /// reload.
    pub fn save_blob(&self) -> String {
        let saved = SavedState::from(self.board.state());
        serde_json::to_string(&saved).unwrap_or_default()
    }

    pub fn add_player(&self, name: &str) -> Result<u32, JsValue> {
        self.board.add_player(name).map(|id| id.0).map_err(js_err)
    }

    pub fn remove_player(&self, id: u32) -> Result<(), JsValue> {
        self.board.remove_player(PlayerId(id)).map_err(js_err)
    }

    pub fn start_game(&self) -> Result<(), JsValue> {
        self.board.start_game().map_err(js_err)
    }

    pub fn record_score(
        &self,
        id: u32,
        raw: &str,
        flip_bonus: bool,
        crash: bool,
    ) -> Result<i32, JsValue> {
        self.board
            .record_score(PlayerId(id), raw, flip_bonus, crash)
            .map(|delta| delta as i32)
            .map_err(js_err)
    }

    pub fn next_round(&self) -> Result<u32, JsValue> {
        self.board.next_round().map_err(js_err)
    }

    /// Tallies winners and resets for a rematch. The confirmation prompt is
    /// the page's concern.
    pub fn rematch(&self) -> Result<Vec<u32>, JsValue> {
        self.board
            .rematch()
            .map(|winners| winners.into_iter().map(|id| id.0).collect())
            .map_err(js_err)
    }

    /// Full reset. The confirmation prompt is the page's concern.
    pub fn reset_all(&self) {
        self.board.reset_all();
    }

    pub fn undo(&self) -> Result<(), JsValue> {
        self.board.undo().map_err(js_err)
    }

    pub fn player_count(&self) -> u32 {
        self.board.player_count() as u32
    }

    pub fn view(&self) -> Result<JsValue, JsValue> {
        let view = JsBoardView::from(self.board.view());
        to_js_value(&view)
    }
}

impl Default for WasmBoard {
    fn default() -> Self {
        Self::new()
    }
}

/// Persisted form of the board state, decoupled from the engine types so the
/// blob format stays stable.
#[derive(Serialize, Deserialize)]
struct SavedState {
    players: Vec<SavedPlayer>,
    started: bool,
    round: u32,
    dealer_index: usize,
}

#[derive(Serialize, Deserialize)]
struct SavedPlayer {
    id: u32,
    name: String,
    score: i64,
    wins: u32,
    last_delta: Option<i64>,
}

impl From<BoardState> for SavedState {
    fn from(state: BoardState) -> Self {
        Self {
            players: state.players.into_iter().map(SavedPlayer::from).collect(),
            started: state.started,
            round: state.round,
            dealer_index: state.dealer_index,
        }
    }
}

impl From<SavedState> for BoardState {
    fn from(saved: SavedState) -> Self {
        Self {
            players: saved.players.into_iter().map(Player::from).collect(),
            started: saved.started,
            round: saved.round,
            dealer_index: saved.dealer_index,
        }
    }
}

impl From<Player> for SavedPlayer {
    fn from(player: Player) -> Self {
        Self {
            id: player.id.0,
            name: player.name,
            score: player.score,
            wins: player.wins,
            last_delta: player.last_delta,
        }
    }
}

impl From<SavedPlayer> for Player {
    fn from(saved: SavedPlayer) -> Self {
        Self {
            id: PlayerId(saved.id),
            name: saved.name,
            score: saved.score,
            wins: saved.wins,
            last_delta: saved.last_delta,
        }
    }
}

#[derive(Serialize)]
struct JsBoardView {
    round: u32,
    started: bool,
    players: Vec<JsPlayerCard>,
    stats: Option<JsBoardStats>,
}

impl From<BoardView> for JsBoardView {
    fn from(view: BoardView) -> Self {
        Self {
            round: view.round,
            started: view.started,
            players: view.players.into_iter().map(JsPlayerCard::from).collect(),
            stats: view.stats.map(JsBoardStats::from),
        }
    }
}

#[derive(Serialize)]
struct JsPlayerCard {
    id: u32,
    name: String,
    score: i32,
    wins: u32,
    rank: u32,
    is_winner: bool,
    is_dealer: bool,
    last_delta: Option<i32>,
}

impl From<flipscore::PlayerCard> for JsPlayerCard {
    fn from(card: flipscore::PlayerCard) -> Self {
        Self {
            id: card.id.0,
            name: card.name,
            score: card.score as i32,
            wins: card.wins,
            rank: card.rank as u32,
            is_winner: card.is_winner,
            is_dealer: card.is_dealer,
            last_delta: card.last_delta.map(|delta| delta as i32),
        }
    }
}

#[derive(Serialize)]
struct JsBoardStats {
    total: i32,
    average: i32,
    leader_gap: i32,
}

impl From<BoardStats> for JsBoardStats {
    fn from(stats: BoardStats) -> Self {
        Self {
            total: stats.total as i32,
            average: stats.average as i32,
            leader_gap: stats.leader_gap as i32,
        }
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
