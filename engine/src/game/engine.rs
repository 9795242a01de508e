//! Core Game definition, constructors, accessors, and view projections.

use std::collections::HashMap;

use golf_shared::game::facedown_hand;
use golf_shared::player::HAND_SIZE;
use golf_shared::{
    Card, GameEvent, GameState, GameStatePublic, Player, PlayerCard, PlayerId, PlayerPublic,
    RoundState, TurnState,
};

use crate::config::EngineConfig;
use crate::error::GameError;

pub(crate) const MAX_RECENT_EVENTS: usize = 50;

/// One game session (a "table").
///
/// The player store is keyed by id; every order-sensitive rule (seating,
/// turn rotation, dealer rotation) consults the explicit ordered id lists,
/// never the map's iteration order.
#[derive(Clone, Debug)]
pub struct Game {
    // Roster
    pub(crate) players: HashMap<PlayerId, Player>,
    pub(crate) game_player_ids: Vec<PlayerId>,
    pub(crate) round_player_ids: Vec<PlayerId>,

    // State machines
    pub(crate) game_state: GameState,
    pub(crate) round_state: RoundState,
    pub(crate) turn_state: TurnState,

    // Rotation
    pub(crate) game_dealer_idx: Option<usize>,
    pub(crate) round_turn_idx: usize,

    pub(crate) game_word: String,

    // Piles; the Vec tail is the top of each pile
    pub(crate) draw_pile: Vec<Card>,
    pub(crate) discard_pile: Vec<Card>,
    pub(crate) taken_card: Option<Card>,

    // Round outcome bookkeeping
    pub(crate) golf_caller_id: Option<PlayerId>,
    pub(crate) game_winner_id: Option<PlayerId>,
    pub(crate) round_loser_ids: Option<Vec<PlayerId>>,

    // Typed in-memory event log, capped at MAX_RECENT_EVENTS
    pub(crate) recent_events: Vec<GameEvent>,
}

impl Game {
    pub fn new() -> Self {
        Self::with_config(&EngineConfig::default())
    }

    pub fn with_config(config: &EngineConfig) -> Self {
        Game {
            players: HashMap::new(),
            game_player_ids: Vec::new(),
            round_player_ids: Vec::new(),

            game_state: GameState::NotStarted,
            round_state: RoundState::NotStarted,
            turn_state: TurnState::NotStarted,

            game_dealer_idx: None,
            round_turn_idx: 0,

            game_word: config.game_word.clone(),

            draw_pile: Vec::new(),
            discard_pile: Vec::new(),
            taken_card: None,

            golf_caller_id: None,
            game_winner_id: None,
            round_loser_ids: None,

            recent_events: Vec::new(),
        }
    }

    // --- accessors ---

    pub fn game_state(&self) -> GameState {
        self.game_state
    }

    pub fn round_state(&self) -> RoundState {
        self.round_state
    }

    pub fn turn_state(&self) -> TurnState {
        self.turn_state
    }

    pub fn game_word(&self) -> &str {
        &self.game_word
    }

    pub fn game_player_ids(&self) -> &[PlayerId] {
        &self.game_player_ids
    }

    pub fn round_player_ids(&self) -> &[PlayerId] {
        &self.round_player_ids
    }

    pub fn player(&self, player_id: &PlayerId) -> Option<&Player> {
        self.players.get(player_id)
    }

    pub fn has_player(&self, player_id: &PlayerId) -> bool {
        self.players.contains_key(player_id)
    }

    /// Id of the player whose turn it currently is.
    pub fn player_turn_id(&self) -> Option<&PlayerId> {
        self.round_player_ids.get(self.round_turn_idx)
    }

    pub fn discard_pile(&self) -> &[Card] {
        &self.discard_pile
    }

    pub fn discard_pile_top(&self) -> Option<&Card> {
        self.discard_pile.last()
    }

    pub fn draw_pile_count(&self) -> usize {
        self.draw_pile.len()
    }

    pub fn taken_card(&self) -> Option<&Card> {
        self.taken_card.as_ref()
    }

    pub fn golf_caller_id(&self) -> Option<&PlayerId> {
        self.golf_caller_id.as_ref()
    }

    pub fn game_winner_id(&self) -> Option<&PlayerId> {
        self.game_winner_id.as_ref()
    }

    pub fn round_loser_ids(&self) -> Option<&[PlayerId]> {
        self.round_loser_ids.as_deref()
    }

    pub fn recent_events(&self) -> &[GameEvent] {
        &self.recent_events
    }

    pub fn is_game_started(&self) -> bool {
        matches!(self.game_state, GameState::Started | GameState::Finished)
    }

    pub fn is_game_finished(&self) -> bool {
        self.game_state == GameState::Finished
    }

    /// A round is finished once golf has been called and the turn pointer
    /// has cycled back to the caller.
    pub fn is_round_finished(&self) -> bool {
        match &self.golf_caller_id {
            Some(caller) => self.player_turn_id() == Some(caller),
            None => false,
        }
    }

    /// A player is eliminated once their letters spell the whole game word.
    pub fn is_player_eliminated(&self, player_id: &PlayerId) -> bool {
        self.players
            .get(player_id)
            .is_some_and(|p| p.letter_count >= self.elimination_threshold())
    }

    pub(crate) fn elimination_threshold(&self) -> u32 {
        self.game_word.chars().count() as u32
    }

    // --- view projections ---

    /// The requesting player's own view: hand fully hidden while the round
    /// is running, the two peek slots revealed right after dealing, and
    /// everything face-up once the round is over.
    pub fn player_view(&self, viewer_id: &PlayerId) -> Result<PlayerPublic, GameError> {
        let player = self
            .players
            .get(viewer_id)
            .ok_or_else(|| GameError::PlayerNotFound(viewer_id.clone()))?;
        Ok(self.project_player(player, true))
    }

    /// Every other game player's view, in seating order starting after the
    /// viewer; their hands stay face-down until the round is finished.
    pub fn opponent_views(&self, viewer_id: &PlayerId) -> Result<Vec<PlayerPublic>, GameError> {
        if !self.players.contains_key(viewer_id) {
            return Err(GameError::PlayerNotFound(viewer_id.clone()));
        }
        let viewer_pos = self
            .game_player_ids
            .iter()
            .position(|id| id == viewer_id)
            .unwrap_or(0);

        let after = self.game_player_ids[viewer_pos + 1..].iter();
        let before = self.game_player_ids[..viewer_pos].iter();
        Ok(after
            .chain(before)
            .filter_map(|id| self.players.get(id))
            .map(|p| self.project_player(p, false))
            .collect())
    }

    /// The combined status payload for one requesting player.
    pub fn state_for_player(&self, viewer_id: &PlayerId) -> Result<GameStatePublic, GameError> {
        let player = self.player_view(viewer_id)?;
        let players = self.opponent_views(viewer_id)?;
        let is_viewer_turn = self.player_turn_id() == Some(viewer_id);

        Ok(GameStatePublic {
            player,
            players,
            game_state: self.game_state,
            round_state: self.round_state,
            turn_state: self.turn_state,
            game_word: self.game_word.clone(),
            player_turn_id: self.player_turn_id().cloned(),
            discard_pile: self.discard_pile.clone(),
            draw_pile_count: self.draw_pile.len(),
            taken_card: if is_viewer_turn { self.taken_card } else { None },
            golf_caller_id: self.golf_caller_id.clone(),
            game_winner_id: self.game_winner_id.clone(),
            round_loser_ids: self.round_loser_ids.clone(),
            recent_events: self.recent_events.clone(),
        })
    }

    /// The two-up/two-down projection of a freshly dealt hand, used for the
    /// cards-dealt broadcast. `None` if the player is not in the round or
    /// has no cards yet.
    pub fn dealt_cards_for(&self, player_id: &PlayerId) -> Option<[PlayerCard; HAND_SIZE]> {
        if !self.round_player_ids.contains(player_id) {
            return None;
        }
        let hand = self.players.get(player_id)?.cards?;
        Some(peek_hand(&hand))
    }

    fn project_player(&self, player: &Player, own_view: bool) -> PlayerPublic {
        let cards = player.cards.map(|hand| match (self.round_state, own_view) {
            // While the round is running nobody sees card faces, the owner
            // included.
            (RoundState::Started, _) => facedown_hand(),
            (RoundState::CardsDealt, true) => peek_hand(&hand),
            (RoundState::CardsDealt, false) => facedown_hand(),
            _ => hand.map(PlayerCard::FaceUp),
        });

        PlayerPublic {
            id: player.id.clone(),
            name: player.name.clone(),
            letter_count: player.letter_count,
            round_score: player.round_score,
            is_game_ready: player.is_game_ready,
            is_round_ready: player.is_round_ready,
            is_connected: player.is_connected,
            cards,
        }
    }

    // --- event log ---

    pub(crate) fn log(&mut self, event: GameEvent) {
        self.recent_events.push(event);
        if self.recent_events.len() > MAX_RECENT_EVENTS {
            let start = self.recent_events.len() - MAX_RECENT_EVENTS;
            self.recent_events.drain(0..start);
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// First two slots hidden, the last two dealt cards face-up.
fn peek_hand(hand: &[Card; HAND_SIZE]) -> [PlayerCard; HAND_SIZE] {
    [
        PlayerCard::FaceDown,
        PlayerCard::FaceDown,
        PlayerCard::FaceUp(hand[2]),
        PlayerCard::FaceUp(hand[3]),
    ]
}
