//! Access token persistence settings.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where the CLI keeps the access token between runs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenConfig {
    /// Token file; `None` keeps the token in memory only
    #[serde(default = "default_token_path")]
    pub path: Option<PathBuf>,
}

fn default_token_path() -> Option<PathBuf> {
    let base = std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))?;
    Some(base.join("jarvis-calendar").join("token.json"))
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            path: default_token_path(),
        }
    }
}
