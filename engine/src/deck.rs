//! Deck provider and hand scoring.
//!
//! Pure helpers with no game-state knowledge: deck construction, shuffling,
//! the deck-count rule, and the fixed rank score table.

use golf_shared::{Card, Rank, Suit};
use rand::seq::SliceRandom;

/// Number of cards in one standard deck.
pub const DECK_SIZE: usize = 52;

/// One full 52-card deck in suit-major order.
pub fn create_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card { suit, rank });
        }
    }
    deck
}

/// Decks needed for a round: one per up-to-four players, rounded up.
pub fn deck_count_for(player_count: usize) -> usize {
    player_count.saturating_sub(1) / 4 + 1
}

/// A uniformly shuffled sequence of `num_decks` decks.
pub fn shuffled_deck(num_decks: usize) -> Vec<Card> {
    let mut deck = Vec::with_capacity(num_decks * DECK_SIZE);
    for _ in 0..num_decks {
        deck.extend(create_deck());
    }
    deck.shuffle(&mut rand::rng());
    deck
}

/// Score value of a single rank: numerals at face value, Ace 1, Jack 0,
/// Queen and King 10.
pub fn rank_score(rank: Rank) -> u32 {
    match rank {
        Rank::Ace => 1,
        Rank::Two => 2,
        Rank::Three => 3,
        Rank::Four => 4,
        Rank::Five => 5,
        Rank::Six => 6,
        Rank::Seven => 7,
        Rank::Eight => 8,
        Rank::Nine => 9,
        Rank::Ten => 10,
        Rank::Jack => 0,
        Rank::Queen => 10,
        Rank::King => 10,
    }
}

/// Point total of a hand.
pub fn calculate_score(cards: &[Card]) -> u32 {
    cards.iter().map(|c| rank_score(c.rank)).sum()
}

#[cfg(test)]
pub(crate) fn shuffled_deck_with_seed(num_decks: usize, seed: u64) -> Vec<Card> {
    // Simple LCG for deterministic shuffling in tests
    fn lcg(next: &mut u64) -> u32 {
        // Constants from Numerical Recipes
        *next = next.wrapping_mul(1664525).wrapping_add(1013904223);
        (*next >> 16) as u32
    }
    let mut deck = Vec::with_capacity(num_decks * DECK_SIZE);
    for _ in 0..num_decks {
        deck.extend(create_deck());
    }
    let mut s = seed;
    // Fisher-Yates
    for i in (1..deck.len()).rev() {
        let r = lcg(&mut s) as usize % (i + 1);
        deck.swap(i, r);
    }
    deck
}
