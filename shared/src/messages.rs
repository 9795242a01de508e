//! Client-server messaging protocol for the golf game.
//!
//! The engine never sends or receives these; they define the vocabulary a
//! transport layer serializes when bridging clients to engine operations.

use serde::{Deserialize, Serialize};

use crate::game::{GameEvent, GameStatePublic};
use crate::player::PlayerId;

/// Error classes a transport can signal back to the originating client.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    GameNotFound,
    NotPlayerTurn,
    InvalidAction,
    NotFound,
}

/// Messages that clients can send to the server. Each maps to one engine
/// operation on the sender's session.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ClientMsg {
    JoinGame,
    StartGame,
    ResetGame,
    DealRound,
    StartRound,
    KickPlayer { player_id: PlayerId },
    ChangeName { name: String },
    ChangeGameWord { game_word: String },
    ToggleGameReady,
    ToggleRoundReady,
    TakeFromDiscardPile,
    TakeFromDrawPile,
    SwapCard { slot: usize },
    DiscardCard,
    FinishTurn,
    CallGolf,
    RequestState,
}

/// Messages that the server can send to clients.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ServerMsg {
    Welcome { player_id: PlayerId },
    State(GameStatePublic),
    Event(GameEvent),
    Error(ErrorKind),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_msg_tagged_encoding() {
        let msg = ClientMsg::SwapCard { slot: 2 };
        let json = serde_json::to_string(&msg).unwrap();
        assert_eq!(json, r#"{"type":"SwapCard","data":{"slot":2}}"#);

        let back: ClientMsg = serde_json::from_str(&json).unwrap();
        assert!(matches!(back, ClientMsg::SwapCard { slot: 2 }));
    }

    #[test]
    fn error_kind_encoding() {
        let json = serde_json::to_string(&ErrorKind::NotPlayerTurn).unwrap();
        assert_eq!(json, r#""not_player_turn""#);
    }
}
