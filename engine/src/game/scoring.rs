//! Round scoring, letter assignment, elimination, and endgame detection.

use golf_shared::{GameEvent, GameState, PlayerId, RoundResult, RoundState};

use crate::deck;
use crate::error::GameError;

use super::Game;

impl Game {
    /// Score the finished round: every round player's hand total is
    /// computed, the players tied at the highest total each gain a letter,
    /// and players who complete the word drop out of future rounds.
    ///
    /// If everyone left standing would be eliminated at once, the letters
    /// are handed back and the round replays with the same field. If
    /// exactly one player survives, the game is over and they win.
    ///
    /// Returns an owned snapshot, detached from later engine mutation.
    pub fn calculate_round_result(&mut self) -> Result<RoundResult, GameError> {
        if self.game_state != GameState::Started || !self.is_round_finished() {
            return Err(GameError::IllegalAction);
        }

        self.round_state = RoundState::Finished;

        let mut highest = 0u32;
        let mut losers: Vec<PlayerId> = Vec::new();
        for id in &self.round_player_ids {
            let player = self
                .players
                .get_mut(id)
                .ok_or(GameError::Internal("round player missing from roster"))?;
            let hand = player
                .cards
                .ok_or(GameError::Internal("round player has no dealt hand"))?;
            let score = deck::calculate_score(&hand);
            player.round_score = Some(score);

            if score > highest {
                highest = score;
                losers.clear();
                losers.push(id.clone());
            } else if score == highest {
                losers.push(id.clone());
            }
        }

        for id in &losers {
            if let Some(player) = self.players.get_mut(id) {
                player.letter_count += 1;
            }
        }
        self.round_loser_ids = Some(losers.clone());

        let threshold = self.elimination_threshold();
        self.round_player_ids
            .retain(|id| match self.players.get(id) {
                Some(p) => p.letter_count < threshold,
                None => false,
            });

        match self.round_player_ids.len() {
            1 => {
                let winner = self.round_player_ids[0].clone();
                self.game_state = GameState::Finished;
                self.game_winner_id = Some(winner.clone());
                tracing::info!(winner = %winner, "game finished");
                self.log(GameEvent::GameFinished { winner_id: winner });
            }
            0 => {
                // Everyone hit the threshold together: a non-resolving tie.
                // Hand the letters back and replay the round with the same
                // field, as if it had never been scored.
                self.round_player_ids = losers.clone();
                for id in &losers {
                    if let Some(player) = self.players.get_mut(id) {
                        player.letter_count -= 1;
                    }
                }
                self.round_loser_ids = None;
            }
            _ => {}
        }

        tracing::info!(
            highest_score = highest,
            losers = ?self.round_loser_ids,
            "round scored"
        );
        self.log(GameEvent::RoundFinished {
            round_loser_ids: self.round_loser_ids.clone(),
        });

        Ok(RoundResult {
            players: self.players.clone(),
            round_loser_ids: self.round_loser_ids.clone(),
            game_winner_id: self.game_winner_id.clone(),
        })
    }
}
