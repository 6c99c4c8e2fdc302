use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Configuration read from `config.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub behavior: BehaviorConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Show key hints in the status row
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Color overrides, keyed by theme slot (`background`, `done`, ...)
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_key_hints: true,
            colors: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BehaviorConfig {
    /// Whether the toggle gesture still reaches a row that is being edited.
    /// Defaults to true: the row's tap target stays active during editing.
    #[serde(default = "default_true")]
    pub toggle_while_editing: bool,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        BehaviorConfig {
            toggle_while_editing: true,
        }
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert!(config.ui.show_key_hints);
        assert!(config.behavior.toggle_while_editing);
    }

    #[test]
    fn test_partial_config() {
        let config: Config = toml::from_str(
            r##"
[ui]
colors = { done = "#1DB863" }

[behavior]
toggle_while_editing = false
"##,
        )
        .unwrap();
        assert!(config.ui.show_key_hints);
        assert_eq!(config.ui.colors.get("done").map(String::as_str), Some("#1DB863"));
        assert!(!config.behavior.toggle_while_editing);
    }
}
