//! The dispatch protocol — one request/response cycle against the backend.
//!
//! Exactly one [`ChatService::send_chat`] call per accepted send. There is
//! no retry: a failure is terminal for the attempt and surfaces as a
//! synthesized assistant entry in the transcript instead of crashing the
//! session. The caller (the session controller) guarantees at most one
//! cycle is outstanding at a time.

use std::time::Instant;

use chrono::Utc;

use sl_client::types::{ChatReply, ChatRequest};
use sl_client::ChatService;
use sl_domain::locale::Locale;
use sl_domain::message::{Message, Origin};
use sl_domain::trace::TraceEvent;

/// Run the network half of a dispatch and map the outcome into the
/// assistant-origin transcript entry.
///
/// The optimistic user entry (step 1) is built by [`Message::user`] and
/// appended by the controller before this runs.
pub async fn exchange(
    service: &dyn ChatService,
    user_id: &str,
    text: &str,
    session_locale: Locale,
) -> Message {
    TraceEvent::DispatchStarted {
        user_id: user_id.to_owned(),
        chars: text.chars().count(),
    }
    .emit();

    let start = Instant::now();
    let result = service
        .send_chat(ChatRequest {
            message: text.to_owned(),
            user_id: user_id.to_owned(),
        })
        .await;
    let duration_ms = start.elapsed().as_millis() as u64;

    match result {
        Ok(reply) => {
            TraceEvent::DispatchResolved {
                intent: reply.intent.clone(),
                escalate: reply.escalate,
                duration_ms,
            }
            .emit();
            reply_entry(reply, session_locale)
        }
        Err(e) => {
            TraceEvent::DispatchFailed {
                error: e.to_string(),
                duration_ms,
            }
            .emit();
            Message::dispatch_failure(&e, session_locale)
        }
    }
}

/// Map a backend reply field-for-field into an assistant entry.
///
/// The server-detected language wins when it names a known locale;
/// otherwise the entry keeps the session locale it replied to.
fn reply_entry(reply: ChatReply, session_locale: Locale) -> Message {
    let locale = reply
        .detected_language
        .as_deref()
        .and_then(|name| name.parse().ok())
        .unwrap_or(session_locale);

    Message {
        origin: Origin::Assistant,
        text: reply.bot_reply,
        locale,
        intent: reply.intent,
        sentiment_score: reply.sentiment_score,
        response_time: reply.response_time,
        escalate: reply.escalate,
        context_summary: reply.context_summary,
        sent_at: Utc::now(),
    }
}
