use serde::{Deserialize, Serialize};
use std::env;

/// Environment variable read by [`StaticOptionsMode::from_env`].
pub const STATIC_OPTIONS_ENV: &str = "SLACK_ACTIONS_STATIC_OPTIONS";

/// Whether static menus write their option list into the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StaticOptionsMode {
    /// Static menus emit `options`/`options_group` and are held to the option count limits.
    Emit,
    /// Static menus carry only `data_source`, matching older payload builders.
    Legacy,
}

impl StaticOptionsMode {
    /// Parse a mode string (case-insensitive).
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "emit" => Some(Self::Emit),
            "legacy" | "omit" => Some(Self::Legacy),
            _ => None,
        }
    }

    /// Reads the mode from `SLACK_ACTIONS_STATIC_OPTIONS`, falling back to the default.
    pub fn from_env() -> Self {
        env::var(STATIC_OPTIONS_ENV)
            .ok()
            .and_then(|value| Self::parse(&value))
            .unwrap_or_default()
    }
}

impl Default for StaticOptionsMode {
    fn default() -> Self {
        StaticOptionsMode::Emit
    }
}

/// Knobs that change how elements are formed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FormationConfig {
    #[serde(default)]
    pub static_options: StaticOptionsMode,
}

impl Default for FormationConfig {
    fn default() -> Self {
        Self {
            static_options: StaticOptionsMode::Emit,
        }
    }
}

impl FormationConfig {
    pub fn from_env() -> Self {
        Self {
            static_options: StaticOptionsMode::from_env(),
        }
    }
}
