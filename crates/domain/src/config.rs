use serde::{Deserialize, Serialize};

use crate::locale::Locale;

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub chat: ChatConfig,
}

// ── Backend connection ─────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the support service.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds. Unset means no bound: an unresponsive
    /// backend leaves the dispatch outstanding until it resolves.
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Stable user identifier sent with every chat and analytics request.
    /// Unset means the console mints a fresh identity per run.
    #[serde(default)]
    pub user_id: Option<String>,
}

// ── Chat session ───────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Locale a new session starts in.
    #[serde(default)]
    pub default_locale: Locale,
}

// ── Defaults ───────────────────────────────────────────────────────

fn default_base_url() -> String {
    "http://localhost:5000".into()
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
            user_id: None,
        }
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            default_locale: Locale::default(),
        }
    }
}

impl Config {
    /// Load config from a TOML file, falling back to defaults if the file is
    /// missing or unparseable (a warning is logged, the session still starts).
    pub fn load_or_default(path: &str) -> Self {
        match std::fs::read_to_string(path) {
            Ok(raw) => match toml::from_str(&raw) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!(path, error = %e, "config parse failed, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                tracing::debug!(path, "no config file, using defaults");
                Self::default()
            }
        }
    }
}
