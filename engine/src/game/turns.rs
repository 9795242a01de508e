//! Turn actions: taking, swapping, discarding, finishing, calling golf.

use golf_shared::player::HAND_SIZE;
use golf_shared::{Card, GameEvent, GameState, PlayerId, RoundState, TurnState};
use rand::seq::SliceRandom;

use crate::error::GameError;

use super::Game;

impl Game {
    /// Take the top discard into the moving player's hand-in-transit.
    pub fn take_from_discard_pile(&mut self, player_id: &PlayerId) -> Result<Card, GameError> {
        self.require_turn(player_id, TurnState::NotStarted)?;
        let card = self
            .discard_pile
            .pop()
            .ok_or(GameError::DiscardPileEmpty)?;
        self.taken_card = Some(card);
        self.turn_state = TurnState::CardTaken;
        self.log(GameEvent::DiscardTaken {
            player_id: player_id.clone(),
        });
        Ok(card)
    }

    /// Draw the top card of the draw pile. An exhausted draw pile is
    /// replenished by reshuffling the discard pile minus its top card.
    pub fn take_from_draw_pile(&mut self, player_id: &PlayerId) -> Result<Card, GameError> {
        self.require_turn(player_id, TurnState::NotStarted)?;
        if self.draw_pile.is_empty() {
            self.recycle_discard_into_draw();
        }
        let card = self.draw_pile.pop().ok_or(GameError::DrawPileEmpty)?;
        self.taken_card = Some(card);
        self.turn_state = TurnState::CardTaken;
        self.log(GameEvent::DrawTaken {
            player_id: player_id.clone(),
        });
        Ok(card)
    }

    /// Exchange the taken card with the hand card at `slot`; the displaced
    /// card goes face-up onto the discard pile. Returns the displaced card.
    pub fn swap_card(&mut self, player_id: &PlayerId, slot: usize) -> Result<Card, GameError> {
        self.require_turn(player_id, TurnState::CardTaken)?;
        if slot >= HAND_SIZE {
            return Err(GameError::InvalidSlot(slot));
        }
        let taken = self
            .taken_card
            .ok_or(GameError::Internal("card_taken state without a taken card"))?;
        let hand = self
            .players
            .get_mut(player_id)
            .and_then(|p| p.cards.as_mut())
            .ok_or(GameError::Internal("turn holder has no dealt hand"))?;

        let displaced = std::mem::replace(&mut hand[slot], taken);
        self.discard_pile.push(displaced);
        self.taken_card = None;
        self.turn_state = TurnState::CardDiscarded;
        self.log(GameEvent::CardSwapped {
            player_id: player_id.clone(),
            slot,
            discarded: displaced,
        });
        Ok(displaced)
    }

    /// Put the taken card straight onto the discard pile.
    pub fn discard_card(&mut self, player_id: &PlayerId) -> Result<Card, GameError> {
        self.require_turn(player_id, TurnState::CardTaken)?;
        let card = self
            .taken_card
            .take()
            .ok_or(GameError::Internal("card_taken state without a taken card"))?;
        self.discard_pile.push(card);
        self.turn_state = TurnState::CardDiscarded;
        self.log(GameEvent::CardDiscarded {
            player_id: player_id.clone(),
            discarded: card,
        });
        Ok(card)
    }

    /// End the turn after a discard, passing play to the next round player.
    pub fn finish_turn(&mut self, player_id: &PlayerId) -> Result<(), GameError> {
        self.require_turn(player_id, TurnState::CardDiscarded)?;
        self.advance_turn();
        self.turn_state = TurnState::NotStarted;
        self.log(GameEvent::TurnFinished {
            player_turn_id: self.player_turn_id().cloned(),
        });
        Ok(())
    }

    /// Declare golf instead of playing a turn, starting the final lap. The
    /// round ends when the turn pointer comes back around to the caller.
    pub fn call_golf(&mut self, player_id: &PlayerId) -> Result<(), GameError> {
        self.require_turn(player_id, TurnState::NotStarted)?;
        if self.golf_caller_id.is_some() {
            return Err(GameError::GolfAlreadyCalled);
        }
        self.golf_caller_id = Some(player_id.clone());
        self.advance_turn();
        self.turn_state = TurnState::NotStarted;
        tracing::info!(player_id = %player_id, "golf called");
        self.log(GameEvent::GolfCalled {
            player_id: player_id.clone(),
        });
        Ok(())
    }

    fn advance_turn(&mut self) {
        if !self.round_player_ids.is_empty() {
            self.round_turn_idx = (self.round_turn_idx + 1) % self.round_player_ids.len();
        }
    }

    /// Shared turn-action guard: the game and round must be running, the
    /// actor must hold the turn, and the turn must be in `expected` state.
    /// Checked before any mutation so rejected actions change nothing.
    fn require_turn(
        &self,
        player_id: &PlayerId,
        expected: TurnState,
    ) -> Result<(), GameError> {
        if !self.players.contains_key(player_id) {
            return Err(GameError::PlayerNotFound(player_id.clone()));
        }
        if self.game_state != GameState::Started || self.round_state != RoundState::Started {
            return Err(GameError::IllegalAction);
        }
        if self.player_turn_id() != Some(player_id) {
            return Err(GameError::NotPlayerTurn(player_id.clone()));
        }
        if self.turn_state != expected {
            return Err(GameError::IllegalAction);
        }
        Ok(())
    }

    /// Everything below the discard top goes back into the draw pile,
    /// reshuffled. The top stays so the next player can still take it.
    fn recycle_discard_into_draw(&mut self) {
        if self.discard_pile.len() <= 1 {
            return;
        }
        let top = self.discard_pile.pop();
        let mut recycled = std::mem::take(&mut self.discard_pile);
        recycled.shuffle(&mut rand::rng());
        self.draw_pile = recycled;
        self.discard_pile.extend(top);
        tracing::debug!(recycled = self.draw_pile.len(), "draw pile replenished");
    }
}
