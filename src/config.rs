//! Page wiring and tunables. Defaults match the stock `index.html`; a host page
//! can override any subset through `start_game_with_config` (feature
//! `serde_json`).

#[cfg(feature = "serde")]
use serde::Deserialize;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Path fetched once for the target word (plain text body).
    pub word_endpoint: String,
    pub grid_container_id: String,
    pub keyboard_container_id: String,
    pub notice_id: String,
    /// Delay before a transient notice hides itself.
    pub notice_dismiss_ms: i32,
    /// `log` level name: error, warn, info, debug, trace or off.
    pub log_level: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_endpoint: "/rand-five-letter".to_string(),
            grid_container_id: "guess-holder".to_string(),
            keyboard_container_id: "keyboard".to_string(),
            notice_id: "popup".to_string(),
            notice_dismiss_ms: 2000,
            log_level: "info".to_string(),
        }
    }
}

impl GameConfig {
    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> Result<Self, crate::error::GameError> {
        serde_json::from_str(json)
            .map_err(|e| crate::error::GameError::Config(e.to_string()))
    }

    /// Unknown names fall back to `Info`.
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level
            .parse()
            .unwrap_or(log::LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_stock_page() {
        let c = GameConfig::default();
        assert_eq!(c.word_endpoint, "/rand-five-letter");
        assert_eq!(c.notice_dismiss_ms, 2000);
        assert_eq!(c.level_filter(), log::LevelFilter::Info);
    }

    #[test]
    fn level_filter_parses_names() {
        let c = GameConfig {
            log_level: "DEBUG".into(),
            ..GameConfig::default()
        };
        assert_eq!(c.level_filter(), log::LevelFilter::Debug);
        let c = GameConfig {
            log_level: "chatty".into(),
            ..GameConfig::default()
        };
        assert_eq!(c.level_filter(), log::LevelFilter::Info);
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn partial_json_keeps_defaults() {
        let json = r#"{"word_endpoint":"/words/today","notice_dismiss_ms":500}"#;
        let c = GameConfig::from_json(json).unwrap();
        assert_eq!(c.word_endpoint, "/words/today");
        assert_eq!(c.notice_dismiss_ms, 500);
        assert_eq!(c.notice_id, "popup");
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn malformed_json_is_config_error() {
        assert!(GameConfig::from_json("{not json").is_err());
    }
}
