use std::fmt;

use log::{warn, Level};
use serde::Deserialize;
use web_sys::window;

use crate::deck::reveal;
use crate::deck::slide_id;
use crate::deck::tracker::{TieBreak, TrackerOptions};

/// Id of the optional `<script type="application/json">` block holding overrides.
pub const CONFIG_ELEMENT_ID: &str = "deck-config";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct DeckConfig {
    pub active_threshold: f64,
    pub reveal_threshold: f64,
    pub slide_id_prefix: String,
    pub tie_break: TieBreak,
}

impl Default for DeckConfig {
    fn default() -> Self {
        DeckConfig {
            active_threshold: 0.5,
            reveal_threshold: reveal::DEFAULT_THRESHOLD,
            slide_id_prefix: slide_id::DEFAULT_PREFIX.to_string(),
            tie_break: TieBreak::LastInBatch,
        }
    }
}

#[derive(Debug)]
pub struct ConfigError(serde_json::Error);

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid #{} contents: {}", CONFIG_ELEMENT_ID, self.0)
    }
}

impl std::error::Error for ConfigError {}

impl DeckConfig {
    pub fn from_json(json: &str) -> Result<DeckConfig, ConfigError> {
        let config: DeckConfig = serde_json::from_str(json).map_err(ConfigError)?;
        Ok(config.sanitized())
    }

    /// Reads overrides from the page, falling back to defaults.
    pub fn load() -> DeckConfig {
        let text = window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|e| e.text_content());

        match text {
            Some(json) if !json.trim().is_empty() => DeckConfig::from_json(&json).unwrap_or_else(|e| {
                warn!("{}, using defaults", e);
                DeckConfig::default()
            }),
            _ => DeckConfig::default(),
        }
    }

    pub fn tracker_options(&self, slide_count: usize) -> TrackerOptions {
        TrackerOptions {
            threshold: self.active_threshold,
            id_prefix: self.slide_id_prefix.clone(),
            tie_break: self.tie_break,
            slide_count,
        }
    }

    fn sanitized(mut self) -> DeckConfig {
        let defaults = DeckConfig::default();
        self.active_threshold = clamp_threshold(self.active_threshold, defaults.active_threshold);
        self.reveal_threshold = clamp_threshold(self.reveal_threshold, defaults.reveal_threshold);
        if self.slide_id_prefix.is_empty() {
            self.slide_id_prefix = defaults.slide_id_prefix;
        }
        self
    }
}

fn clamp_threshold(value: f64, fallback: f64) -> f64 {
    if value.is_nan() {
        fallback
    } else {
        // zero would make every intersecting target count
        value.clamp(f64::EPSILON, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_object_gives_defaults() {
        assert_eq!(DeckConfig::from_json("{}").unwrap(), DeckConfig::default());
    }

    #[test]
    fn overrides_are_applied() {
        let config = DeckConfig::from_json(
            r#"{ "active_threshold": 0.6, "tie_break": "greatest_ratio", "slide_id_prefix": "page" }"#,
        )
        .unwrap();
        assert_eq!(config.active_threshold, 0.6);
        assert_eq!(config.reveal_threshold, 0.1);
        assert_eq!(config.tie_break, TieBreak::GreatestRatio);
        assert_eq!(config.slide_id_prefix, "page");
    }

    #[test]
    fn thresholds_are_clamped_into_range() {
        let config = DeckConfig::from_json(r#"{ "active_threshold": 3.0, "reveal_threshold": -1.0 }"#).unwrap();
        assert_eq!(config.active_threshold, 1.0);
        assert!(config.reveal_threshold > 0.0 && config.reveal_threshold < 0.001);
    }

    #[test]
    fn empty_prefix_falls_back_to_default() {
        let config = DeckConfig::from_json(r#"{ "slide_id_prefix": "" }"#).unwrap();
        assert_eq!(config.slide_id_prefix, "slide");
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = DeckConfig::from_json(r#"{ "tie_break": "coin_flip" }"#).unwrap_err();
        assert!(err.to_string().starts_with("invalid #deck-config contents"));
        assert!(DeckConfig::from_json("not json").is_err());
    }

    #[test]
    fn tracker_options_carry_the_config() {
        let options = DeckConfig::default().tracker_options(12);
        assert_eq!(options.threshold, 0.5);
        assert_eq!(options.id_prefix, "slide");
        assert_eq!(options.slide_count, 12);
    }
}
