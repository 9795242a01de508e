//! Game, round, and turn state enums, the typed event log, and the
//! per-player state payload.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::cards::Card;
use crate::player::{Player, PlayerCard, PlayerId, PlayerPublic, HAND_SIZE};

/// Lifecycle of the whole game session.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GameState {
    NotStarted,
    Started,
    Finished,
}

/// Lifecycle of a single round (one dealt hand of play).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RoundState {
    NotStarted,
    CardsDealt,
    Started,
    Finished,
}

/// Lifecycle of the current player's turn.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TurnState {
    NotStarted,
    CardTaken,
    CardDiscarded,
}

/// A single recorded game event. The engine appends one entry per mutating
/// operation; transports broadcast these and UIs render them as history.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "data")]
pub enum GameEvent {
    PlayerJoined { player_id: PlayerId },
    PlayerLeft { player_id: PlayerId },
    PlayerRejoined { player_id: PlayerId },
    PlayerDisconnected { player_id: PlayerId },
    NameChanged { player_id: PlayerId, name: String },
    GameWordChanged { game_word: String },
    GameReadyChanged { player_id: PlayerId, is_ready: bool },
    RoundReadyChanged { player_id: PlayerId, is_ready: bool },
    GameStarted,
    GameReset,
    CardsDealt { round_player_ids: Vec<PlayerId> },
    RoundStarted { player_turn_id: PlayerId },
    DiscardTaken { player_id: PlayerId },
    DrawTaken { player_id: PlayerId },
    CardSwapped { player_id: PlayerId, slot: usize, discarded: Card },
    CardDiscarded { player_id: PlayerId, discarded: Card },
    TurnFinished { player_turn_id: Option<PlayerId> },
    GolfCalled { player_id: PlayerId },
    RoundFinished { round_loser_ids: Option<Vec<PlayerId>> },
    GameFinished { winner_id: PlayerId },
}

/// Complete view of the session for one requesting player.
///
/// `taken_card` is only populated when the viewer currently holds the turn;
/// the draw pile is exposed as a count, never as contents.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameStatePublic {
    pub player: PlayerPublic,
    pub players: Vec<PlayerPublic>,
    pub game_state: GameState,
    pub round_state: RoundState,
    pub turn_state: TurnState,
    pub game_word: String,
    pub player_turn_id: Option<PlayerId>,
    pub discard_pile: Vec<Card>,
    pub draw_pile_count: usize,
    pub taken_card: Option<Card>,
    pub golf_caller_id: Option<PlayerId>,
    pub game_winner_id: Option<PlayerId>,
    pub round_loser_ids: Option<Vec<PlayerId>>,
    #[serde(default)]
    pub recent_events: Vec<GameEvent>,
}

/// Immutable snapshot returned by round scoring. Cloned out of the engine so
/// later mutation (the next round's dealing) cannot alter a broadcast result.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoundResult {
    pub players: HashMap<PlayerId, Player>,
    /// `None` when the round ended in a full tie at the elimination
    /// threshold and must be replayed.
    pub round_loser_ids: Option<Vec<PlayerId>>,
    pub game_winner_id: Option<PlayerId>,
}

/// All-facedown hand, the default opponent projection.
pub fn facedown_hand() -> [PlayerCard; HAND_SIZE] {
    [PlayerCard::FaceDown; HAND_SIZE]
}
