use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Header line written at the top of every saved checklist
pub const DEFAULT_HEADER: &str = "# TODO List";

/// Text given to newly appended items
pub const DEFAULT_PLACEHOLDER: &str = "new todo";

/// Configuration from config.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_header")]
    pub header: String,
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            header: default_header(),
            placeholder: default_placeholder(),
        }
    }
}

fn default_header() -> String {
    DEFAULT_HEADER.to_string()
}

fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER.to_string()
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Theme color overrides, keyed by theme field name (`"#RRGGBB"` values)
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

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogConfig {
    /// One of error, warn, info, debug, trace, off
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}
