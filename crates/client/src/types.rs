use serde::{Deserialize, Serialize};

// ── Chat exchange ──────────────────────────────────────────────────

/// Request body for `POST /api/chat`.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub message: String,
    pub user_id: String,
}

/// Response body from `POST /api/chat`.
///
/// Intent detection, sentiment scoring, and the escalation decision are all
/// server-side; these fields arrive as opaque results. Optional fields are
/// normalized to `None` here so nothing downstream has to probe for missing
/// keys.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatReply {
    pub bot_reply: String,
    #[serde(default)]
    pub detected_language: Option<String>,
    #[serde(default)]
    pub intent: Option<String>,
    #[serde(default)]
    pub sentiment_score: Option<f64>,
    #[serde(default)]
    pub response_time: Option<String>,
    #[serde(default)]
    pub escalate: bool,
    /// Present when `escalate` is true; a human-readable summary of why.
    #[serde(default)]
    pub context_summary: Option<String>,
}

// ── Analytics ──────────────────────────────────────────────────────

/// Response body from `GET /api/analytics/{user_id}`.
///
/// All values are opaque display values; no client-side processing.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyticsReport {
    #[serde(default)]
    pub user_id: Option<serde_json::Value>,
    pub avg_sentiment: f64,
    pub escalation_rate: String,
    pub total_conversations: u64,
    pub avg_response_time: String,
}
