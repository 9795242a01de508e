//! Shared vocabulary for the golf card game: cards, players, game state,
//! per-player view payloads, and the client/server message protocol.
//!
//! Everything in this crate is serde-serializable so a transport layer can
//! put it on the wire unchanged. The engine crate owns all game logic.

pub mod cards;
pub mod game;
pub mod messages;
pub mod player;

pub use cards::{Card, Rank, Suit};
pub use game::{GameEvent, GameState, GameStatePublic, RoundResult, RoundState, TurnState};
pub use messages::{ClientMsg, ErrorKind, ServerMsg};
pub use player::{Player, PlayerCard, PlayerId, PlayerPublic};
