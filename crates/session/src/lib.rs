//! `sl-session` — the conversational session core.
//!
//! Owns the in-memory transcript, enforces one-request-at-a-time message
//! dispatch, maps backend replies into display state, and raises the
//! deferred escalation alert. The presentation layer drives a
//! [`SessionController`] and renders the snapshots it exposes; nothing else
//! mutates session state.

pub mod controller;
pub mod dispatch;
pub mod escalation;
pub mod seeder;
pub mod transcript;

pub use controller::{SendOutcome, SessionController};
pub use escalation::{EscalationSink, ALERT_DELAY};
pub use transcript::Transcript;
