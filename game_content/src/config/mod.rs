//! Session configuration - the turn budget and the fallback ending.

use serde::{Deserialize, Serialize};

use crate::catalog::ContentError;

/// The ending shown when the turn budget runs out without any ending
/// condition firing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultEnding {
    #[serde(default)]
    pub name: String,

    pub text: String,
}

/// Session-level configuration supplied by the shell.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// How many turns a session lasts at most.
    pub total_turns: u32,

    /// Fallback ending once the turn budget is spent.
    pub default_ending: DefaultEnding,
}

impl GameConfig {
    /// Parse a configuration document in TOML form.
    ///
    /// Reading the document off disk is the shell's job.
    pub fn from_toml_str(text: &str) -> Result<Self, ContentError> {
        toml::from_str(text).map_err(|err| ContentError::Config(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_toml() {
        let config = GameConfig::from_toml_str(
            r#"
            total_turns = 20

            [default_ending]
            name = "quiet_life"
            text = "The years slip by without incident."
            "#,
        )
        .unwrap();

        assert_eq!(config.total_turns, 20);
        assert_eq!(config.default_ending.name, "quiet_life");
    }

    #[test]
    fn test_config_rejects_garbage() {
        let result = GameConfig::from_toml_str("total_turns = \"many\"");
        assert!(matches!(result, Err(ContentError::Config(_))));
    }

    #[test]
    fn test_config_roundtrips_through_json() {
        let config = GameConfig {
            total_turns: 12,
            default_ending: DefaultEnding {
                name: String::new(),
                text: "It ends.".to_string(),
            },
        };

        let json = serde_json::to_string(&config).unwrap();
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.total_turns, 12);
    }
}
