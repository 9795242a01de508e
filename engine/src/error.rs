//! Engine error taxonomy.

use golf_shared::{ErrorKind, PlayerId};
use thiserror::Error;

/// Errors returned by engine operations. An operation that returns an error
/// has not mutated any state.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("player {0} is not in this game")]
    PlayerNotFound(PlayerId),

    #[error("player {0} has already joined")]
    PlayerAlreadyJoined(PlayerId),

    #[error("it is not {0}'s turn")]
    NotPlayerTurn(PlayerId),

    #[error("action is not allowed in the current state")]
    IllegalAction,

    #[error("golf has already been called this round")]
    GolfAlreadyCalled,

    #[error("card slot {0} is out of range")]
    InvalidSlot(usize),

    #[error("the draw pile is empty")]
    DrawPileEmpty,

    #[error("the discard pile is empty")]
    DiscardPileEmpty,

    #[error("the game cannot be started yet")]
    GameNotStartable,

    #[error("the round cannot be started yet")]
    RoundNotStartable,

    #[error("internal state error: {0}")]
    Internal(&'static str),
}

impl GameError {
    /// Wire-level class of this error, for transports that signal clients
    /// without string matching.
    pub fn kind(&self) -> ErrorKind {
        match self {
            GameError::NotPlayerTurn(_) => ErrorKind::NotPlayerTurn,
            GameError::PlayerNotFound(_)
            | GameError::InvalidSlot(_)
            | GameError::DrawPileEmpty
            | GameError::DiscardPileEmpty => ErrorKind::NotFound,
            GameError::PlayerAlreadyJoined(_)
            | GameError::IllegalAction
            | GameError::GolfAlreadyCalled
            | GameError::GameNotStartable
            | GameError::RoundNotStartable
            | GameError::Internal(_) => ErrorKind::InvalidAction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_kinds() {
        let ada = PlayerId::from("ada");
        assert_eq!(GameError::NotPlayerTurn(ada.clone()).kind(), ErrorKind::NotPlayerTurn);
        assert_eq!(GameError::PlayerNotFound(ada).kind(), ErrorKind::NotFound);
        assert_eq!(GameError::IllegalAction.kind(), ErrorKind::InvalidAction);
        assert_eq!(GameError::DrawPileEmpty.kind(), ErrorKind::NotFound);
    }
}
