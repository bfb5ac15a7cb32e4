//! The session controller — composition root of the chat core.
//!
//! Owns all mutable session state (transcript, staged input, locale, the
//! in-flight flag) behind one lock; nothing else mutates it. The controller
//! is a two-state machine over `in_flight`:
//!
//! - **Idle**: `send_message` is accepted when staged input is non-empty;
//!   `change_locale` is always accepted and runs the sample seeder.
//! - **Dispatching**: entered when the network step begins; further
//!   `send_message` calls are rejected until resolution. `change_locale`
//!   stays accepted and never cancels the outstanding request.
//!
//! The lock is never held across the network await; the `in_flight` flag,
//! not the lock, is what rejects overlapping sends.

use std::sync::Arc;

use parking_lot::Mutex;

use sl_client::ChatService;
use sl_domain::locale::Locale;
use sl_domain::message::Message;
use sl_domain::trace::TraceEvent;

use crate::dispatch;
use crate::escalation::{self, EscalationSink};
use crate::seeder;
use crate::transcript::Transcript;

/// What happened to a `send_message` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// Both entries were appended; the dispatch resolved (with a backend
    /// reply or a synthesized failure entry).
    Delivered,
    /// A dispatch was already outstanding; the call was a no-op.
    Busy,
    /// Staged input was empty after trimming; nothing was sent.
    EmptyInput,
}

struct SessionState {
    transcript: Transcript,
    pending_input: String,
    locale: Locale,
    in_flight: bool,
}

/// The live client state for one continuous chat interaction.
///
/// Created empty when the chat view starts, discarded when it ends; never
/// persisted. Handed by reference to presentation components; session
/// state is never ambient.
pub struct SessionController {
    state: Mutex<SessionState>,
    service: Arc<dyn ChatService>,
    sink: Arc<dyn EscalationSink>,
    user_id: String,
}

impl SessionController {
    pub fn new(
        service: Arc<dyn ChatService>,
        sink: Arc<dyn EscalationSink>,
        user_id: impl Into<String>,
        locale: Locale,
    ) -> Self {
        Self {
            state: Mutex::new(SessionState {
                transcript: Transcript::new(),
                pending_input: String::new(),
                locale,
                in_flight: false,
            }),
            service,
            sink,
            user_id: user_id.into(),
        }
    }

    // ── Operations ─────────────────────────────────────────────────

    /// Dispatch the staged input as one user/assistant exchange.
    ///
    /// Appends the optimistic user entry before any network activity, then
    /// suspends until the backend resolves. Exactly two entries are appended
    /// per `Delivered` outcome, user first; rejected calls append nothing.
    pub async fn send_message(&self) -> SendOutcome {
        let (text, locale) = {
            let mut state = self.state.lock();
            if state.in_flight {
                tracing::warn!("send rejected, a dispatch is already in flight");
                return SendOutcome::Busy;
            }

            let text = state.pending_input.trim().to_owned();
            if text.is_empty() {
                return SendOutcome::EmptyInput;
            }

            let locale = state.locale;
            state.transcript.append(Message::user(text.clone(), locale));
            state.in_flight = true;
            (text, locale)
        };

        let reply = dispatch::exchange(&*self.service, &self.user_id, &text, locale).await;

        let flagged = {
            let mut state = self.state.lock();
            state.transcript.append(reply.clone());
            state.pending_input.clear();
            state.in_flight = false;
            reply
        };

        // After the append, so the alert never precedes the entry.
        escalation::notify_if_flagged(&flagged, Arc::clone(&self.sink));

        SendOutcome::Delivered
    }

    /// Switch the active locale, seeding a sample phrase into the staged
    /// input when the conversation has not started yet.
    pub fn change_locale(&self, locale: Locale) {
        let mut state = self.state.lock();
        state.locale = locale;

        if state.transcript.is_empty() && !locale.is_default() {
            let seed = seeder::seeded_input(locale);
            TraceEvent::SampleSeeded {
                locale: locale.to_string(),
                chars: seed.chars().count(),
            }
            .emit();
            state.pending_input = seed;
        }
    }

    /// Stage text for the next send.
    pub fn set_input(&self, text: impl Into<String>) {
        self.state.lock().pending_input = text.into();
    }

    // ── Snapshots for the presentation layer ───────────────────────

    pub fn input(&self) -> String {
        self.state.lock().pending_input.clone()
    }

    pub fn locale(&self) -> Locale {
        self.state.lock().locale
    }

    pub fn is_in_flight(&self) -> bool {
        self.state.lock().in_flight
    }

    /// Snapshot of the transcript, oldest entry first.
    pub fn transcript(&self) -> Vec<Message> {
        self.state.lock().transcript.entries().to_vec()
    }

    pub fn transcript_revision(&self) -> u64 {
        self.state.lock().transcript.revision()
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }
}
