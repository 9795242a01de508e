//! Session engine for a multiplayer golf card game with letter elimination.
//!
//! One [`Game`] value represents one table. A transport layer maps each
//! inbound client action onto exactly one engine operation, then broadcasts
//! the per-player projections ([`Game::state_for_player`]) back out. The
//! engine performs no I/O and holds no global state; callers must not
//! interleave two operations on the same session concurrently.

pub mod config;
pub mod deck;
pub mod error;
pub mod game;
pub mod pretty;

pub use config::EngineConfig;
pub use error::GameError;
pub use game::Game;
