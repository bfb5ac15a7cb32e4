//! Deferred escalation alerts.
//!
//! The backend decides when an exchange needs human attention; this module
//! only surfaces that decision. The alert is delayed a fixed half second so
//! it lands after the assistant entry has visibly rendered. That is an
//! ordering guarantee for the user, not a correctness one.

use std::sync::Arc;
use std::time::Duration;

use sl_domain::message::Message;
use sl_domain::trace::TraceEvent;

/// Fixed delay between appending a flagged entry and raising the alert.
pub const ALERT_DELAY: Duration = Duration::from_millis(500);

/// Where escalation alerts land. The console implementation prints; tests
/// record.
pub trait EscalationSink: Send + Sync {
    fn raise(&self, summary: &str);
}

/// Raise a deferred alert if `message` carries the escalation flag.
///
/// Stateless; invoked once per received assistant entry. Returns whether an
/// alert was scheduled.
pub fn notify_if_flagged(message: &Message, sink: Arc<dyn EscalationSink>) -> bool {
    if !message.escalate {
        return false;
    }

    let summary = message.context_summary.clone().unwrap_or_default();
    tokio::spawn(async move {
        tokio::time::sleep(ALERT_DELAY).await;
        TraceEvent::EscalationRaised {
            summary_chars: summary.chars().count(),
        }
        .emit();
        sink.raise(&summary);
    });
    true
}
