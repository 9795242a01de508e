//! Game session module. Implementation split across files by concern:
//! struct and projections in `engine`, roster management in `roster`,
//! dealing in `dealing`, turn actions in `turns`, scoring in `scoring`.

mod dealing;
mod engine;
mod roster;
mod scoring;
mod turns;

pub use engine::Game;
