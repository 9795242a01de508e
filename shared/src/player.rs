//! Player identifiers, records, and per-viewer card visibility.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cards::Card;

/// Number of card slots in every hand.
pub const HAND_SIZE: usize = 4;

/// Opaque stable identifier for a player, assigned by the session layer.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(pub String);

impl From<&str> for PlayerId {
    fn from(v: &str) -> Self {
        PlayerId(v.to_owned())
    }
}

impl From<String> for PlayerId {
    fn from(v: String) -> Self {
        PlayerId(v)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A player's full record as the engine tracks it.
///
/// `cards` is `None` before dealing and after a game reset; once dealt it
/// always holds exactly [`HAND_SIZE`] cards. `round_score` is set by round
/// scoring and cleared when the next round is dealt.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub letter_count: u32,
    pub round_score: Option<u32>,
    pub is_game_ready: bool,
    pub is_round_ready: bool,
    pub is_connected: bool,
    pub cards: Option<[Card; HAND_SIZE]>,
}

impl Player {
    /// Fresh record for a player who just joined; the display name defaults
    /// to the id until renamed.
    pub fn new(id: PlayerId) -> Self {
        let name = id.to_string();
        Player {
            id,
            name,
            letter_count: 0,
            round_score: None,
            is_game_ready: false,
            is_round_ready: false,
            is_connected: true,
            cards: None,
        }
    }
}

/// One hand slot as a given viewer sees it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum PlayerCard {
    FaceUp(Card),
    FaceDown,
}

/// View of a player as seen by a specific viewer: the same record with the
/// hand collapsed to [`PlayerCard`] slots according to the visibility rules.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlayerPublic {
    pub id: PlayerId,
    pub name: String,
    pub letter_count: u32,
    pub round_score: Option<u32>,
    pub is_game_ready: bool,
    pub is_round_ready: bool,
    pub is_connected: bool,
    pub cards: Option<[PlayerCard; HAND_SIZE]>,
}
