// src/config.rs
// Game settings loaded from a key = value configuration file.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::logging::{log_info, log_warning};

pub const DEFAULT_CONFIG_PATH: &str = "conf/bingo.conf";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Cards generated when a game starts
    pub initial_cards: usize,
    /// Cards shown side by side in the terminal
    pub cards_per_row: usize,
    /// Leading cards rendered at full size
    pub large_cards: usize,
    /// Cards after the large ones rendered compact; the rest get one line
    pub small_cards: usize,
    /// Previous numbers listed after the latest call
    pub recent_numbers: usize,
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            initial_cards: 0,
            cards_per_row: 3,
            large_cards: 6,
            small_cards: 14,
            recent_numbers: 3,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        Self::from_str_content(&content)
    }

    pub fn from_str_content(content: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let config_map = parse_config(content)?;
        let defaults = Self::default();

        let read_usize = |key: &str, default: usize| {
            config_map.get(key)
                .and_then(|v| v.parse::<usize>().ok())
                .unwrap_or(default)
        };

        let initial_cards = read_usize("initial_cards", defaults.initial_cards);
        let cards_per_row = read_usize("cards_per_row", defaults.cards_per_row).max(1);
        let large_cards = read_usize("large_cards", defaults.large_cards);
        let small_cards = read_usize("small_cards", defaults.small_cards);
        let recent_numbers = read_usize("recent_numbers", defaults.recent_numbers);

        let seed = config_map.get("seed")
            .and_then(|s| s.parse::<u64>().ok());

        Ok(GameConfig { initial_cards, cards_per_row, large_cards, small_cards, recent_numbers, seed })
    }

    pub fn load_or_default() -> Self {
        Self::load_from_or_default(DEFAULT_CONFIG_PATH)
    }

    pub fn load_from_or_default<P: AsRef<Path>>(config_path: P) -> Self {
        let config_path = config_path.as_ref();
        match Self::from_file(config_path) {
            Ok(config) => {
                log_info(&format!("Loaded configuration from {}", config_path.display()));
                config
            }
            Err(e) => {
                log_warning(&format!("Could not load config from {}: {}. Using defaults.", config_path.display(), e));
                Self::default()
            }
        }
    }
}

fn parse_config(content: &str) -> Result<HashMap<String, String>, Box<dyn std::error::Error>> {
    let mut config = HashMap::new();

    for line in content.lines() {
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Parse key = value pairs
        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim().to_string();
            let value = value.trim().to_string();
            config.insert(key, value);
        }
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let content = r#"
            # This is a comment
            initial_cards = 4
            seed = 1234
            # Another comment
            cards_per_row = 2
        "#;

        let config = parse_config(content).unwrap();
        assert_eq!(config.get("initial_cards"), Some(&"4".to_string()));
        assert_eq!(config.get("seed"), Some(&"1234".to_string()));
        assert_eq!(config.get("cards_per_row"), Some(&"2".to_string()));
    }

    #[test]
    fn test_game_config_default() {
        let config = GameConfig::default();
        assert_eq!(config.initial_cards, 0);
        assert_eq!(config.cards_per_row, 3);
        assert_eq!(config.large_cards, 6);
        assert_eq!(config.small_cards, 14);
        assert_eq!(config.recent_numbers, 3);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_game_config_from_content() {
        let content = "initial_cards = 8\nlarge_cards = 2\nseed = 42\nrecent_numbers = oops\n";
        let config = GameConfig::from_str_content(content).unwrap();
        assert_eq!(config.initial_cards, 8);
        assert_eq!(config.large_cards, 2);
        assert_eq!(config.small_cards, 14);
        assert_eq!(config.recent_numbers, 3);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_cards_per_row_never_zero() {
        let config = GameConfig::from_str_content("cards_per_row = 0").unwrap();
        assert_eq!(config.cards_per_row, 1);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = GameConfig::load_from_or_default("conf/does-not-exist.conf");
        assert_eq!(config, GameConfig::default());
    }
}
