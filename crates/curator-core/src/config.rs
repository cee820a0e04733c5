//! Client configuration model.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Which presentation the review REPL renders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LayoutPreference {
    /// Pager on narrow terminals, grid otherwise
    #[default]
    Auto,
    Grid,
    Pager,
}

/// Root configuration (`config.toml`), after environment overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the admin API. Required by the first request, not at startup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
    #[serde(default)]
    pub layout: LayoutPreference,
}

fn default_timeout() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: None,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            layout: LayoutPreference::default(),
        }
    }
}
