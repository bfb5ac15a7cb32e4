use serde::Serialize;

/// Structured trace events emitted across all Supportline crates.
/// These integrate with the `tracing` crate and are machine-parseable.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event")]
pub enum TraceEvent {
    /// Emitted on every transcript append.
    TranscriptAppend {
        origin: String,
        total_entries: usize,
    },

    /// Emitted when a dispatch enters its network step.
    DispatchStarted {
        user_id: String,
        chars: usize,
    },

    /// Emitted when a dispatch resolves with a backend reply.
    DispatchResolved {
        intent: Option<String>,
        escalate: bool,
        duration_ms: u64,
    },

    /// Emitted when a dispatch fails; the attempt is terminal, not retried.
    DispatchFailed {
        error: String,
        duration_ms: u64,
    },

    /// Emitted when a locale change seeds the input buffer.
    SampleSeeded {
        locale: String,
        chars: usize,
    },

    /// Emitted when a deferred escalation alert fires.
    EscalationRaised {
        summary_chars: usize,
    },

    /// Emitted on every backend HTTP call.
    BackendCall {
        endpoint: String,
        status: u16,
        duration_ms: u64,
    },
}

impl TraceEvent {
    /// Emit this event as a tracing span event.
    pub fn emit(&self) {
        let json = serde_json::to_string(self).unwrap_or_default();
        tracing::info!(trace_event = %json, "supportline_event");
    }
}
