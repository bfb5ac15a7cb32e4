//! The transcript message entity.
//!
//! A `Message` is immutable once appended to a transcript. A failed dispatch
//! appends a synthesized assistant entry rather than editing the user entry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::locale::Locale;

/// Which side of the exchange produced a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    User,
    Assistant,
}

impl std::fmt::Display for Origin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Origin::User => f.write_str("user"),
            Origin::Assistant => f.write_str("assistant"),
        }
    }
}

/// One transcript entry.
///
/// Optional fields stay `None` until the backend supplies them; an absent
/// `sentiment_score` is not the same thing as a neutral `0.0`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub origin: Origin,
    pub text: String,
    /// Locale active when the entry was created. Assistant entries carry the
    /// server-detected language when it maps to a known locale.
    pub locale: Locale,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_time: Option<String>,
    #[serde(default)]
    pub escalate: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_summary: Option<String>,
    pub sent_at: DateTime<Utc>,
}

impl Message {
    /// The optimistic user-origin entry appended before any network activity.
    pub fn user(text: impl Into<String>, locale: Locale) -> Self {
        Self {
            origin: Origin::User,
            text: text.into(),
            locale,
            intent: None,
            sentiment_score: None,
            response_time: None,
            escalate: false,
            context_summary: None,
            sent_at: Utc::now(),
        }
    }

    /// The assistant-origin entry synthesized when a dispatch fails.
    ///
    /// All optional fields stay absent and `escalate` stays false; the text
    /// carries the underlying failure reason so it renders in the transcript.
    pub fn dispatch_failure(reason: &impl std::fmt::Display, locale: Locale) -> Self {
        Self {
            origin: Origin::Assistant,
            text: format!("Error: {reason}"),
            locale,
            intent: None,
            sentiment_score: None,
            response_time: None,
            escalate: false,
            context_summary: None,
            sent_at: Utc::now(),
        }
    }
}
