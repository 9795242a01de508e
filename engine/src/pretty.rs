//! Human-readable formatting of game events and table state for transports
//! and CLIs that print activity to a terminal.

use golf_shared::{Card, GameEvent, GameStatePublic, PlayerId};
use owo_colors::OwoColorize;

fn format_card(card: &Card, color: bool) -> String {
    let text = card.to_string();
    if color && card.suit.is_red() {
        text.red().to_string()
    } else {
        text
    }
}

fn format_ids(ids: &[PlayerId]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// One-line human rendering of a single event.
pub fn format_event_human(event: &GameEvent, color: bool) -> String {
    match event {
        GameEvent::PlayerJoined { player_id } => format!("{} joined", player_id),
        GameEvent::PlayerLeft { player_id } => format!("{} left", player_id),
        GameEvent::PlayerRejoined { player_id } => format!("{} rejoined", player_id),
        GameEvent::PlayerDisconnected { player_id } => format!("{} disconnected", player_id),
        GameEvent::NameChanged { player_id, name } => {
            format!("{} is now known as {}", player_id, name)
        }
        GameEvent::GameWordChanged { game_word } => format!("game word set to {}", game_word),
        GameEvent::GameReadyChanged { player_id, is_ready } => {
            format!("{} {}", player_id, ready_str(*is_ready, "the game"))
        }
        GameEvent::RoundReadyChanged { player_id, is_ready } => {
            format!("{} {}", player_id, ready_str(*is_ready, "the round"))
        }
        GameEvent::GameStarted => section("Game started", color),
        GameEvent::GameReset => section("Game reset", color),
        GameEvent::CardsDealt { round_player_ids } => {
            format!("cards dealt to {}", format_ids(round_player_ids))
        }
        GameEvent::RoundStarted { player_turn_id } => {
            format!("round started, {} to move", player_turn_id)
        }
        GameEvent::DiscardTaken { player_id } => format!("{} took the discard", player_id),
        GameEvent::DrawTaken { player_id } => format!("{} drew from the pile", player_id),
        GameEvent::CardSwapped {
            player_id,
            slot,
            discarded,
        } => format!(
            "{} swapped slot {} and discarded {}",
            player_id,
            slot,
            format_card(discarded, color)
        ),
        GameEvent::CardDiscarded { player_id, discarded } => {
            format!("{} discarded {}", player_id, format_card(discarded, color))
        }
        GameEvent::TurnFinished { player_turn_id } => match player_turn_id {
            Some(next) => format!("turn passes to {}", next),
            None => "turn finished".to_owned(),
        },
        GameEvent::GolfCalled { player_id } => {
            let line = format!("{} called golf", player_id);
            if color {
                line.bold().yellow().to_string()
            } else {
                line
            }
        }
        GameEvent::RoundFinished { round_loser_ids } => match round_loser_ids {
            Some(losers) => format!("round over, letters for {}", format_ids(losers)),
            None => "round over, dead tie, replay".to_owned(),
        },
        GameEvent::GameFinished { winner_id } => {
            let line = format!("{} wins the game", winner_id);
            if color {
                line.bold().green().to_string()
            } else {
                line
            }
        }
    }
}

/// Multi-line summary of a per-player payload: word, piles, and each
/// visible player with letters and a to-move marker.
pub fn format_table_summary(gs: &GameStatePublic, color: bool) -> String {
    let mut out = String::new();
    let title = format!("=== Golf: {} ===", gs.game_word);
    if color {
        out.push_str(&title.bold().blue().to_string());
    } else {
        out.push_str(&title);
    }
    out.push('\n');

    if let Some(top) = gs.discard_pile.last() {
        out.push_str(&format!(
            "Discard: {}  Draw: {} cards\n",
            format_card(top, color),
            gs.draw_pile_count
        ));
    }

    out.push_str("Players:\n");
    for p in std::iter::once(&gs.player).chain(gs.players.iter()) {
        let you = p.id == gs.player.id;
        let name = if you {
            if color {
                format!("{} (You)", p.name.bold())
            } else {
                format!("{} (You)", p.name)
            }
        } else {
            p.name.clone()
        };
        let to_move = if Some(&p.id) == gs.player_turn_id.as_ref() {
            if color {
                " ●".green().to_string()
            } else {
                " *".to_owned()
            }
        } else {
            String::new()
        };
        let score = match p.round_score {
            Some(s) => format!("  score={}", s),
            None => String::new(),
        };
        out.push_str(&format!(
            "  {}  letters={}/{}{}{}\n",
            name,
            p.letter_count,
            gs.game_word.chars().count(),
            score,
            to_move
        ));
    }
    out
}

fn ready_str(is_ready: bool, what: &str) -> String {
    if is_ready {
        format!("is ready for {}", what)
    } else {
        format!("is no longer ready for {}", what)
    }
}

fn section(text: &str, color: bool) -> String {
    let line = format!("== {} ==", text);
    if color {
        line.bold().purple().to_string()
    } else {
        line
    }
}
