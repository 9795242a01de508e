//! Engine configuration persisted as TOML.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::fs;

/// Table configuration.
///
/// Fields:
/// - game_word: the elimination word; its length is the number of letters a
///   player can collect before being eliminated
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    pub game_word: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            game_word: "GOLF".to_owned(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from `path`. If the file does not exist, create it
    /// with defaults and return the default config.
    pub fn load_or_create(path: &Path) -> Result<Self> {
        if path.exists() {
            let s = fs::read_to_string(path)
                .with_context(|| format!("reading config file '{}'", path.display()))?;
            let cfg: EngineConfig = toml::from_str(&s)
                .with_context(|| format!("parsing TOML config '{}'", path.display()))?;
            Ok(cfg)
        } else {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    fs::create_dir_all(parent).with_context(|| {
                        format!("creating config directory '{}'", parent.display())
                    })?;
                }
            }

            let cfg = EngineConfig::default();
            let toml_text = toml::to_string_pretty(&cfg)
                .with_context(|| "serializing default config to TOML")?;
            fs::write(path, toml_text)
                .with_context(|| format!("writing default config to '{}'", path.display()))?;
            Ok(cfg)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_default_file_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("golf.toml");

        let cfg = EngineConfig::load_or_create(&path).unwrap();
        assert_eq!(cfg.game_word, "GOLF");
        assert!(path.exists());

        // second load reads the file written on first load
        let again = EngineConfig::load_or_create(&path).unwrap();
        assert_eq!(again.game_word, "GOLF");
    }

    #[test]
    fn reads_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("golf.toml");
        std::fs::write(&path, "game_word = \"HORSE\"\n").unwrap();

        let cfg = EngineConfig::load_or_create(&path).unwrap();
        assert_eq!(cfg.game_word, "HORSE");
    }

    #[test]
    fn config_word_seeds_the_table() {
        let cfg = EngineConfig {
            game_word: "HORSE".to_owned(),
        };
        let game = crate::Game::with_config(&cfg);
        assert_eq!(game.game_word(), "HORSE");
    }
}
