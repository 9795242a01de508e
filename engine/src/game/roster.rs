//! Roster management: joining, leaving, connection status, readiness.

use golf_shared::{GameEvent, GameState, Player, PlayerId, RoundState, TurnState};

use crate::error::GameError;

use super::Game;

impl Game {
    /// Add a player to the table. Ids are assigned by the session layer and
    /// must be unique; a duplicate join is rejected rather than ignored.
    pub fn add_player(&mut self, player_id: PlayerId) -> Result<(), GameError> {
        if self.players.contains_key(&player_id) {
            return Err(GameError::PlayerAlreadyJoined(player_id));
        }
        tracing::debug!(player_id = %player_id, "player joined");
        self.players
            .insert(player_id.clone(), Player::new(player_id.clone()));
        self.game_player_ids.push(player_id.clone());
        self.log(GameEvent::PlayerJoined { player_id });
        Ok(())
    }

    /// Remove a player from the table, keeping the dealer and turn indices
    /// pointing at the same players they pointed at before.
    ///
    /// If the removed player held the current turn, any card they had taken
    /// goes to the discard pile and the turn resets so the next player in
    /// order acts. Removing the second-to-last round player ends the game.
    pub fn remove_player(&mut self, player_id: &PlayerId) -> Result<(), GameError> {
        if !self.players.contains_key(player_id) {
            return Err(GameError::PlayerNotFound(player_id.clone()));
        }

        // Seat at or before the dealer: shift the dealer index left so the
        // same player deals next. Removing the dealer at seat 0 leaves the
        // pre-first-round state, which advances to seat 0 again.
        if let (Some(seat), Some(dealer)) = (
            self.game_player_ids.iter().position(|id| id == player_id),
            self.game_dealer_idx,
        ) {
            if seat <= dealer {
                self.game_dealer_idx = dealer.checked_sub(1);
            }
        }

        self.players.remove(player_id);
        self.game_player_ids.retain(|id| id != player_id);
        tracing::info!(player_id = %player_id, "player left");
        self.log(GameEvent::PlayerLeft {
            player_id: player_id.clone(),
        });

        if self.game_state != GameState::Started {
            return Ok(());
        }

        if let Some(pos) = self.round_player_ids.iter().position(|id| id == player_id) {
            if pos == self.round_turn_idx {
                // Current turn holder: if they were last in order the next
                // turn wraps to the front; otherwise the list shrinking
                // already moves the index onto the next player.
                if pos == self.round_player_ids.len() - 1 {
                    self.round_turn_idx = 0;
                }
                if let Some(card) = self.taken_card.take() {
                    self.discard_pile.push(card);
                }
                self.turn_state = TurnState::NotStarted;
            } else if pos < self.round_turn_idx {
                self.round_turn_idx -= 1;
            }
            self.round_player_ids.remove(pos);
        }

        // A departed caller must not leave the round unfinishable.
        if self.golf_caller_id.as_ref() == Some(player_id) {
            self.golf_caller_id = None;
        }

        if self.round_player_ids.len() == 1 {
            let winner = self.round_player_ids[0].clone();
            self.game_state = GameState::Finished;
            self.game_winner_id = Some(winner.clone());
            self.log(GameEvent::GameFinished { winner_id: winner });
        }

        Ok(())
    }

    /// Mark a player connected. Rejoining a running game auto-readies them
    /// so they cannot block the next round.
    pub fn connect_player(&mut self, player_id: &PlayerId) -> Result<(), GameError> {
        let started = self.is_game_started();
        let player = self
            .players
            .get_mut(player_id)
            .ok_or_else(|| GameError::PlayerNotFound(player_id.clone()))?;
        player.is_connected = true;
        player.is_game_ready = started;
        self.log(GameEvent::PlayerRejoined {
            player_id: player_id.clone(),
        });
        Ok(())
    }

    /// Mark a player disconnected and clear both readiness flags.
    pub fn disconnect_player(&mut self, player_id: &PlayerId) -> Result<(), GameError> {
        let player = self
            .players
            .get_mut(player_id)
            .ok_or_else(|| GameError::PlayerNotFound(player_id.clone()))?;
        player.is_connected = false;
        player.is_game_ready = false;
        player.is_round_ready = false;
        self.log(GameEvent::PlayerDisconnected {
            player_id: player_id.clone(),
        });
        Ok(())
    }

    pub fn is_any_player_connected(&self) -> bool {
        self.players.values().any(|p| p.is_connected)
    }

    /// Flip a player's game-readiness; returns the new value.
    pub fn toggle_game_ready(&mut self, player_id: &PlayerId) -> Result<bool, GameError> {
        let player = self
            .players
            .get_mut(player_id)
            .ok_or_else(|| GameError::PlayerNotFound(player_id.clone()))?;
        player.is_game_ready = !player.is_game_ready;
        let is_ready = player.is_game_ready;
        self.log(GameEvent::GameReadyChanged {
            player_id: player_id.clone(),
            is_ready,
        });
        Ok(is_ready)
    }

    /// Flip a player's round-readiness; returns the new value.
    pub fn toggle_round_ready(&mut self, player_id: &PlayerId) -> Result<bool, GameError> {
        let player = self
            .players
            .get_mut(player_id)
            .ok_or_else(|| GameError::PlayerNotFound(player_id.clone()))?;
        player.is_round_ready = !player.is_round_ready;
        let is_ready = player.is_round_ready;
        self.log(GameEvent::RoundReadyChanged {
            player_id: player_id.clone(),
            is_ready,
        });
        Ok(is_ready)
    }

    pub fn is_player_game_ready(&self, player_id: &PlayerId) -> bool {
        self.players
            .get(player_id)
            .is_some_and(|p| p.is_game_ready)
    }

    pub fn is_player_round_ready(&self, player_id: &PlayerId) -> bool {
        self.players
            .get(player_id)
            .is_some_and(|p| p.is_round_ready)
    }

    /// The game can start with at least two players, all game-ready.
    pub fn is_game_startable(&self) -> bool {
        self.game_player_ids.len() > 1
            && self
                .game_player_ids
                .iter()
                .all(|id| self.is_player_game_ready(id))
    }

    /// The round can start once cards are dealt and every round player is
    /// round-ready.
    pub fn is_round_startable(&self) -> bool {
        self.round_state == RoundState::CardsDealt
            && self
                .round_player_ids
                .iter()
                .all(|id| self.is_player_round_ready(id))
    }

    pub fn change_name(&mut self, player_id: &PlayerId, name: String) -> Result<(), GameError> {
        let player = self
            .players
            .get_mut(player_id)
            .ok_or_else(|| GameError::PlayerNotFound(player_id.clone()))?;
        player.name = name.clone();
        self.log(GameEvent::NameChanged {
            player_id: player_id.clone(),
            name,
        });
        Ok(())
    }

    /// Change the elimination word. Only allowed before the game starts:
    /// the word length is the elimination threshold and must not move while
    /// letters are being collected.
    pub fn change_game_word(&mut self, game_word: String) -> Result<(), GameError> {
        if self.is_game_started() || game_word.is_empty() {
            return Err(GameError::IllegalAction);
        }
        self.game_word = game_word.clone();
        self.log(GameEvent::GameWordChanged { game_word });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game_with_players(ids: &[&str]) -> Game {
        let mut game = Game::new();
        for id in ids {
            game.add_player(PlayerId::from(*id)).unwrap();
        }
        game
    }

    #[test]
    fn duplicate_join_is_rejected() {
        let mut game = game_with_players(&["ada"]);
        assert_eq!(
            game.add_player(PlayerId::from("ada")),
            Err(GameError::PlayerAlreadyJoined(PlayerId::from("ada")))
        );
        assert_eq!(game.game_player_ids().len(), 1);
    }

    #[test]
    fn game_startable_requires_two_ready_players() {
        let mut game = game_with_players(&["ada", "bob"]);
        assert!(!game.is_game_startable());

        game.toggle_game_ready(&PlayerId::from("ada")).unwrap();
        assert!(!game.is_game_startable());

        game.toggle_game_ready(&PlayerId::from("bob")).unwrap();
        assert!(game.is_game_startable());

        // a lone ready player is not enough
        game.remove_player(&PlayerId::from("bob")).unwrap();
        assert!(!game.is_game_startable());
    }

    #[test]
    fn disconnect_clears_readiness() {
        let mut game = game_with_players(&["ada"]);
        let ada = PlayerId::from("ada");
        game.toggle_game_ready(&ada).unwrap();

        game.disconnect_player(&ada).unwrap();
        let player = game.player(&ada).unwrap();
        assert!(!player.is_connected);
        assert!(!player.is_game_ready);
        assert!(!player.is_round_ready);
        assert!(!game.is_any_player_connected());
    }

    #[test]
    fn reconnect_before_game_start_is_not_auto_ready() {
        let mut game = game_with_players(&["ada"]);
        let ada = PlayerId::from("ada");
        game.disconnect_player(&ada).unwrap();
        game.connect_player(&ada).unwrap();
        assert!(game.player(&ada).unwrap().is_connected);
        assert!(!game.player(&ada).unwrap().is_game_ready);
    }

    fn started_game(ids: &[&str]) -> Game {
        let mut game = game_with_players(ids);
        for id in ids {
            game.toggle_game_ready(&PlayerId::from(*id)).unwrap();
        }
        game.initialize_game().unwrap();
        game
    }

    #[test]
    fn removing_a_seat_before_the_dealer_shifts_the_dealer_index() {
        let mut game = started_game(&["a", "b", "c", "d"]);

        // rotate the dealer off seat 0 so there is a seat before it
        game.round_state = RoundState::Finished;
        game.initialize_round().unwrap();
        assert_eq!(game.game_dealer_idx, Some(1));
        let dealer = game.game_player_ids()[1].clone();

        let first_seat = game.game_player_ids()[0].clone();
        game.remove_player(&first_seat).unwrap();

        assert_eq!(game.game_dealer_idx, Some(0));
        assert_eq!(game.game_player_ids()[0], dealer, "same player still deals");
    }

    #[test]
    fn removing_the_current_turn_player_last_in_order_wraps_to_front() {
        let mut game = started_game(&["a", "b", "c"]);

        // walk the turn onto the last round player
        for id in game.round_player_ids().to_vec() {
            game.toggle_round_ready(&id).unwrap();
        }
        game.start_round().unwrap();
        while game.round_turn_idx != game.round_player_ids().len() - 1 {
            let player = game.player_turn_id().unwrap().clone();
            game.take_from_draw_pile(&player).unwrap();
            game.discard_card(&player).unwrap();
            game.finish_turn(&player).unwrap();
        }

        let leaver = game.player_turn_id().unwrap().clone();
        game.take_from_draw_pile(&leaver).unwrap();
        let discard_before = game.discard_pile().len();

        game.remove_player(&leaver).unwrap();

        assert_eq!(game.round_turn_idx, 0);
        assert_eq!(game.turn_state(), TurnState::NotStarted);
        assert!(game.taken_card().is_none());
        // the card they were holding went to the discard pile
        assert_eq!(game.discard_pile().len(), discard_before + 1);
        assert!(!game.round_player_ids().contains(&leaver));
    }

    #[test]
    fn removing_an_earlier_seat_keeps_the_turn_on_the_same_player() {
        let mut game = started_game(&["a", "b", "c", "d"]);
        for id in game.round_player_ids().to_vec() {
            game.toggle_round_ready(&id).unwrap();
        }
        game.start_round().unwrap();

        // advance one turn so someone sits before the turn holder
        let first = game.player_turn_id().unwrap().clone();
        game.take_from_draw_pile(&first).unwrap();
        game.discard_card(&first).unwrap();
        game.finish_turn(&first).unwrap();

        let holder = game.player_turn_id().unwrap().clone();
        game.remove_player(&first).unwrap();
        assert_eq!(game.player_turn_id(), Some(&holder));
    }

    #[test]
    fn removal_down_to_one_round_player_ends_the_game() {
        let mut game = started_game(&["a", "b"]);
        let leaver = game.round_player_ids()[0].clone();
        let survivor = game.round_player_ids()[1].clone();

        game.remove_player(&leaver).unwrap();

        assert_eq!(game.game_state(), GameState::Finished);
        assert_eq!(game.game_winner_id(), Some(&survivor));
    }

    #[test]
    fn game_word_is_frozen_once_started() {
        let mut game = game_with_players(&["ada", "bob"]);
        game.change_game_word("HORSE".to_owned()).unwrap();
        assert_eq!(game.game_word(), "HORSE");

        for id in ["ada", "bob"] {
            game.toggle_game_ready(&PlayerId::from(id)).unwrap();
        }
        game.initialize_game().unwrap();
        assert_eq!(
            game.change_game_word("GOLF".to_owned()),
            Err(GameError::IllegalAction)
        );
        assert_eq!(game.game_word(), "HORSE");
    }
}
