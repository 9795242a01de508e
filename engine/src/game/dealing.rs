//! Game and round initialization: seating, dealer rotation, dealing.

use golf_shared::player::HAND_SIZE;
use golf_shared::{Card, GameEvent, GameState, RoundState, TurnState};
use rand::seq::SliceRandom;

use crate::deck;
use crate::error::GameError;

use super::Game;

impl Game {
    /// Start the game: randomize seating once, seed the round roster from
    /// it, and deal the first round.
    pub fn initialize_game(&mut self) -> Result<(), GameError> {
        if self.game_state != GameState::NotStarted {
            return Err(GameError::IllegalAction);
        }
        if !self.is_game_startable() {
            return Err(GameError::GameNotStartable);
        }

        self.game_state = GameState::Started;
        self.game_player_ids.shuffle(&mut rand::rng());
        self.round_player_ids = self.game_player_ids.clone();
        tracing::info!(player_count = self.game_player_ids.len(), "game started");
        self.log(GameEvent::GameStarted);

        self.initialize_round()
    }

    /// Deal the next round to the surviving round players.
    pub fn initialize_round(&mut self) -> Result<(), GameError> {
        if self.game_state != GameState::Started {
            return Err(GameError::IllegalAction);
        }
        // Re-dealing is only legal between rounds, never into a live one.
        if !matches!(
            self.round_state,
            RoundState::NotStarted | RoundState::Finished
        ) {
            return Err(GameError::IllegalAction);
        }

        let deck = deck::shuffled_deck(deck::deck_count_for(self.round_player_ids.len()));
        self.initialize_round_from_deck(deck)
    }

    /// Round setup against a provided deck order, so tests can drive exact
    /// hands. `deck` is consumed from the tail (the top of the pile).
    pub(crate) fn initialize_round_from_deck(&mut self, mut deck: Vec<Card>) -> Result<(), GameError> {
        self.advance_dealer();

        // The dealer leads the round: the turn index is the dealer's
        // position within the round roster, with no extra offset.
        let dealer_id = self
            .game_dealer_idx
            .and_then(|idx| self.game_player_ids.get(idx))
            .ok_or(GameError::Internal("dealer index out of range"))?
            .clone();
        self.round_turn_idx = self
            .round_player_ids
            .iter()
            .position(|id| *id == dealer_id)
            .ok_or(GameError::Internal("dealer is not a round player"))?;

        for id in &self.game_player_ids {
            if let Some(player) = self.players.get_mut(id) {
                player.cards = None;
                player.round_score = None;
                player.is_round_ready = false;
            }
        }

        let seed = deck
            .pop()
            .ok_or(GameError::Internal("deck exhausted while seeding discard"))?;
        self.discard_pile = vec![seed];

        for id in &self.round_player_ids {
            let mut hand = [seed; HAND_SIZE];
            for slot in hand.iter_mut() {
                *slot = deck
                    .pop()
                    .ok_or(GameError::Internal("deck exhausted while dealing"))?;
            }
            if let Some(player) = self.players.get_mut(id) {
                player.cards = Some(hand);
            }
        }
        self.draw_pile = deck;
        self.taken_card = None;

        self.golf_caller_id = None;
        self.game_winner_id = None;
        self.round_loser_ids = None;

        self.round_state = RoundState::CardsDealt;
        self.turn_state = TurnState::NotStarted;

        tracing::info!(
            round_players = self.round_player_ids.len(),
            draw_pile = self.draw_pile.len(),
            "round dealt"
        );
        self.log(GameEvent::CardsDealt {
            round_player_ids: self.round_player_ids.clone(),
        });
        Ok(())
    }

    /// Start play for a dealt round once every round player is ready.
    pub fn start_round(&mut self) -> Result<(), GameError> {
        if !self.is_round_startable() {
            return Err(GameError::RoundNotStartable);
        }
        let leader = self
            .player_turn_id()
            .cloned()
            .ok_or(GameError::Internal("round started with no turn holder"))?;
        self.round_state = RoundState::Started;
        self.log(GameEvent::RoundStarted {
            player_turn_id: leader,
        });
        Ok(())
    }

    /// Reset the table back to the lobby: the roster, connections, and game
    /// word survive; letters, hands, scores, readiness, and all round state
    /// are cleared.
    pub fn reset_game(&mut self) {
        for player in self.players.values_mut() {
            player.letter_count = 0;
            player.cards = None;
            player.round_score = None;
            player.is_game_ready = false;
            player.is_round_ready = false;
        }

        self.round_player_ids.clear();

        self.game_state = GameState::NotStarted;
        self.round_state = RoundState::NotStarted;
        self.turn_state = TurnState::NotStarted;

        self.game_dealer_idx = None;
        self.round_turn_idx = 0;

        self.draw_pile.clear();
        self.discard_pile.clear();
        self.taken_card = None;

        self.golf_caller_id = None;
        self.game_winner_id = None;
        self.round_loser_ids = None;

        tracing::info!("game reset");
        self.log(GameEvent::GameReset);
    }

    /// Move the dealer button to the next non-eliminated player, wrapping
    /// around the seating order. At least one player is never eliminated
    /// while the game is running, so the walk terminates.
    fn advance_dealer(&mut self) {
        let n = self.game_player_ids.len();
        let mut idx = match self.game_dealer_idx {
            Some(i) => (i + 1) % n,
            None => 0,
        };
        while self.is_player_eliminated(&self.game_player_ids[idx]) {
            idx = (idx + 1) % n;
        }
        self.game_dealer_idx = Some(idx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use golf_shared::PlayerId;
    use std::collections::HashSet;

    fn ready_game(ids: &[&str]) -> Game {
        let mut game = Game::new();
        for id in ids {
            game.add_player(PlayerId::from(*id)).unwrap();
            game.toggle_game_ready(&PlayerId::from(*id)).unwrap();
        }
        game
    }

    #[test]
    fn dealing_conserves_cards() {
        for (count, ids) in [
            (1usize, vec!["a", "b", "c"]),
            (2, vec!["a", "b", "c", "d", "e"]),
        ] {
            let mut game = ready_game(&ids);
            game.initialize_game().unwrap();

            let total = count * deck::DECK_SIZE;
            let hands: usize = ids.len() * HAND_SIZE;
            assert_eq!(game.draw_pile_count(), total - hands - 1);
            assert_eq!(game.discard_pile().len(), 1);

            // no card is lost or duplicated beyond the deck multiplicity
            let mut all: Vec<_> = game.draw_pile.clone();
            all.extend(game.discard_pile.iter().copied());
            for id in game.round_player_ids().to_vec() {
                all.extend(game.player(&id).unwrap().cards.unwrap());
            }
            assert_eq!(all.len(), total);
            if count == 1 {
                let unique: HashSet<_> = all.iter().copied().collect();
                assert_eq!(unique.len(), deck::DECK_SIZE);
            }
        }
    }

    #[test]
    fn dealer_leads_round() {
        let mut game = ready_game(&["a", "b", "c"]);
        game.initialize_game().unwrap();

        let dealer_idx = game.game_dealer_idx.unwrap();
        assert_eq!(dealer_idx, 0, "first round is dealt by seat 0");
        let dealer = game.game_player_ids()[dealer_idx].clone();
        assert_eq!(game.player_turn_id(), Some(&dealer));
    }

    #[test]
    fn dealer_rotation_skips_eliminated_players() {
        let mut game = ready_game(&["a", "b", "c"]);
        game.initialize_game().unwrap();

        // eliminate the player seated after the dealer
        let threshold = game.elimination_threshold();
        let skipped = game.game_player_ids()[1].clone();
        game.players.get_mut(&skipped).unwrap().letter_count = threshold;
        game.round_player_ids.retain(|id| *id != skipped);

        game.round_state = RoundState::Finished;
        game.initialize_round().unwrap();

        let dealer = &game.game_player_ids()[game.game_dealer_idx.unwrap()];
        assert_eq!(dealer, &game.game_player_ids()[2]);
        assert_eq!(game.player_turn_id(), Some(dealer));
    }

    #[test]
    fn dealing_clears_round_leftovers() {
        let mut game = ready_game(&["a", "b"]);
        game.initialize_game().unwrap();

        for id in game.round_player_ids().to_vec() {
            game.toggle_round_ready(&id).unwrap();
        }
        game.start_round().unwrap();

        let player = game.player_turn_id().unwrap().clone();
        game.take_from_draw_pile(&player).unwrap();
        game.discard_card(&player).unwrap();
        game.finish_turn(&player).unwrap();

        // force a fresh deal and make sure per-round state is rebuilt
        game.round_state = RoundState::Finished;
        game.initialize_round().unwrap();

        assert_eq!(game.round_state(), RoundState::CardsDealt);
        assert_eq!(game.turn_state(), TurnState::NotStarted);
        assert!(game.taken_card().is_none());
        assert!(game.golf_caller_id().is_none());
        for id in game.round_player_ids().to_vec() {
            let p = game.player(&id).unwrap();
            assert!(p.cards.is_some());
            assert_eq!(p.round_score, None);
            assert!(!p.is_round_ready);
        }
    }

    #[test]
    fn round_start_requires_all_ready() {
        let mut game = ready_game(&["a", "b"]);
        game.initialize_game().unwrap();

        assert_eq!(game.start_round(), Err(GameError::RoundNotStartable));

        let first = game.round_player_ids()[0].clone();
        game.toggle_round_ready(&first).unwrap();
        assert_eq!(game.start_round(), Err(GameError::RoundNotStartable));

        let second = game.round_player_ids()[1].clone();
        game.toggle_round_ready(&second).unwrap();
        game.start_round().unwrap();
        assert_eq!(game.round_state(), RoundState::Started);
    }

    #[test]
    fn reset_returns_to_lobby_but_keeps_roster_and_word() {
        let mut game = ready_game(&["a", "b"]);
        game.change_game_word("HORSE".to_owned()).unwrap();
        game.initialize_game().unwrap();

        game.reset_game();

        assert_eq!(game.game_state(), GameState::NotStarted);
        assert_eq!(game.round_state(), RoundState::NotStarted);
        assert_eq!(game.game_word(), "HORSE");
        assert_eq!(game.game_player_ids().len(), 2);
        assert!(game.round_player_ids().is_empty());
        assert_eq!(game.draw_pile_count(), 0);
        for id in game.game_player_ids().to_vec() {
            let p = game.player(&id).unwrap();
            assert_eq!(p.letter_count, 0);
            assert!(p.cards.is_none());
            assert!(!p.is_game_ready);
        }
    }
}
