//! Integration tests for the session controller — full send/receive cycles
//! without a live backend.
//!
//! These tests validate the complete flow across modules (controller +
//! dispatch + escalation + seeder) against a scripted in-memory service.
//! All tests are deterministic; timer-dependent ones run on paused time.

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::Notify;

use sl_client::types::{AnalyticsReport, ChatReply, ChatRequest};
use sl_client::ChatService;
use sl_domain::error::{Error, Result};
use sl_domain::locale::Locale;
use sl_domain::message::Origin;
use sl_session::escalation::{EscalationSink, ALERT_DELAY};
use sl_session::{SendOutcome, SessionController};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Fixtures
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Replays scripted outcomes in order; optionally holds each reply until
/// released through the gate (to keep a dispatch in flight on demand).
struct ScriptedService {
    replies: Mutex<VecDeque<Result<ChatReply>>>,
    gate: Option<Arc<Notify>>,
}

impl ScriptedService {
    fn replying(replies: Vec<Result<ChatReply>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            gate: None,
        }
    }

    fn gated(replies: Vec<Result<ChatReply>>, gate: Arc<Notify>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            gate: Some(gate),
        }
    }
}

#[async_trait::async_trait]
impl ChatService for ScriptedService {
    async fn send_chat(&self, _req: ChatRequest) -> Result<ChatReply> {
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.replies
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(Error::Other("script exhausted".into())))
    }

    async fn analytics(&self, _user_id: &str) -> Result<AnalyticsReport> {
        Err(Error::Other("not under test".into()))
    }
}

#[derive(Default)]
struct RecordingSink {
    raised: Mutex<Vec<String>>,
}

impl EscalationSink for RecordingSink {
    fn raise(&self, summary: &str) {
        self.raised.lock().push(summary.to_owned());
    }
}

fn reply(bot_reply: &str) -> ChatReply {
    ChatReply {
        bot_reply: bot_reply.into(),
        detected_language: None,
        intent: None,
        sentiment_score: None,
        response_time: None,
        escalate: false,
        context_summary: None,
    }
}

fn controller(replies: Vec<Result<ChatReply>>) -> (Arc<SessionController>, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::default());
    let ctrl = Arc::new(SessionController::new(
        Arc::new(ScriptedService::replying(replies)),
        sink.clone(),
        "user-1",
        Locale::English,
    ));
    (ctrl, sink)
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Locale seeding
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[tokio::test]
async fn locale_change_on_empty_transcript_seeds_sample() {
    let (ctrl, _) = controller(vec![]);

    ctrl.change_locale(Locale::Hindi);

    assert_eq!(ctrl.locale(), Locale::Hindi);
    assert_eq!(ctrl.input(), "मेरा खाता लॉक हो गया है");
}

#[tokio::test]
async fn switching_back_and_forth_reseeds_each_time() {
    let (ctrl, _) = controller(vec![]);

    ctrl.change_locale(Locale::Hindi);
    ctrl.change_locale(Locale::Tamil);
    assert_eq!(ctrl.input(), "எனது கணக்கு பூட்டப்பட்டது");

    ctrl.change_locale(Locale::Hindi);
    assert_eq!(ctrl.input(), "मेरा खाता लॉक हो गया है");
}

#[tokio::test]
async fn same_locale_twice_yields_the_same_seed() {
    let (ctrl, _) = controller(vec![]);

    ctrl.change_locale(Locale::Bengali);
    let first = ctrl.input();
    ctrl.change_locale(Locale::Bengali);
    assert_eq!(ctrl.input(), first);
}

#[tokio::test]
async fn switching_to_default_locale_does_not_seed() {
    let (ctrl, _) = controller(vec![]);

    ctrl.set_input("typed by hand");
    ctrl.change_locale(Locale::English);

    assert_eq!(ctrl.input(), "typed by hand");
}

#[tokio::test]
async fn locale_change_after_conversation_started_keeps_input() {
    let (ctrl, _) = controller(vec![Ok(reply("Hi there"))]);

    ctrl.set_input("hello");
    assert_eq!(ctrl.send_message().await, SendOutcome::Delivered);

    ctrl.set_input("follow-up question");
    ctrl.change_locale(Locale::Telugu);

    // Locale switched, but the seeder must not clobber typed text.
    assert_eq!(ctrl.locale(), Locale::Telugu);
    assert_eq!(ctrl.input(), "follow-up question");
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Send cycle
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[tokio::test]
async fn successful_send_appends_user_then_assistant() {
    let (ctrl, _) = controller(vec![Ok(ChatReply {
        intent: Some("greeting".into()),
        sentiment_score: Some(0.8),
        response_time: Some("0.4s".into()),
        ..reply("Hi there")
    })]);

    ctrl.set_input("hello");
    assert_eq!(ctrl.send_message().await, SendOutcome::Delivered);

    let entries = ctrl.transcript();
    assert_eq!(entries.len(), 2);

    assert_eq!(entries[0].origin, Origin::User);
    assert_eq!(entries[0].text, "hello");
    assert!(entries[0].intent.is_none());
    assert!(entries[0].sentiment_score.is_none());

    assert_eq!(entries[1].origin, Origin::Assistant);
    assert_eq!(entries[1].text, "Hi there");
    assert_eq!(entries[1].intent.as_deref(), Some("greeting"));
    assert_eq!(entries[1].sentiment_score, Some(0.8));
    assert_eq!(entries[1].response_time.as_deref(), Some("0.4s"));
    assert!(!entries[1].escalate);

    assert!(ctrl.input().is_empty());
    assert!(!ctrl.is_in_flight());
}

#[tokio::test]
async fn failed_send_appends_error_entry_and_recovers() {
    let (ctrl, _) = controller(vec![
        Err(Error::Http("connection refused".into())),
        Ok(reply("back online")),
    ]);

    ctrl.set_input("hello?");
    assert_eq!(ctrl.send_message().await, SendOutcome::Delivered);

    let entries = ctrl.transcript();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[1].origin, Origin::Assistant);
    assert!(entries[1].text.contains("connection refused"));
    assert!(!entries[1].escalate);
    assert!(!ctrl.is_in_flight());

    // The failure was local to the attempt; the session stays usable.
    ctrl.set_input("retrying by hand");
    assert_eq!(ctrl.send_message().await, SendOutcome::Delivered);
    assert_eq!(ctrl.transcript().len(), 4);
    assert_eq!(ctrl.transcript()[3].text, "back online");
}

#[tokio::test]
async fn empty_and_whitespace_input_sends_nothing() {
    let (ctrl, _) = controller(vec![]);

    assert_eq!(ctrl.send_message().await, SendOutcome::EmptyInput);

    ctrl.set_input("   \t ");
    assert_eq!(ctrl.send_message().await, SendOutcome::EmptyInput);

    assert!(ctrl.transcript().is_empty());
    assert!(!ctrl.is_in_flight());
}

#[tokio::test]
async fn revision_tracks_appends() {
    let (ctrl, _) = controller(vec![Ok(reply("Hi there"))]);

    assert_eq!(ctrl.transcript_revision(), 0);
    ctrl.set_input("hello");
    ctrl.send_message().await;
    assert_eq!(ctrl.transcript_revision(), 2);
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// One dispatch at a time
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[tokio::test]
async fn send_while_in_flight_is_rejected() {
    let gate = Arc::new(Notify::new());
    let sink = Arc::new(RecordingSink::default());
    let ctrl = Arc::new(SessionController::new(
        Arc::new(ScriptedService::gated(vec![Ok(reply("slow reply"))], gate.clone())),
        sink,
        "user-1",
        Locale::English,
    ));

    ctrl.set_input("first");
    let pending = tokio::spawn({
        let ctrl = ctrl.clone();
        async move { ctrl.send_message().await }
    });

    // Wait until the first dispatch holds the in-flight flag.
    while !ctrl.is_in_flight() {
        tokio::task::yield_now().await;
    }
    assert_eq!(ctrl.transcript().len(), 1);

    // A second send while dispatching is a no-op.
    ctrl.set_input("second");
    assert_eq!(ctrl.send_message().await, SendOutcome::Busy);
    assert_eq!(ctrl.transcript().len(), 1);

    // Locale changes stay accepted mid-flight, without seeding.
    ctrl.change_locale(Locale::Marathi);
    assert_eq!(ctrl.locale(), Locale::Marathi);
    assert_eq!(ctrl.input(), "second");

    gate.notify_one();
    assert_eq!(pending.await.unwrap(), SendOutcome::Delivered);

    // Exactly one pair was appended, contiguously, user first.
    let entries = ctrl.transcript();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].text, "first");
    assert_eq!(entries[1].text, "slow reply");
    assert!(!ctrl.is_in_flight());
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Escalation
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[tokio::test(start_paused = true)]
async fn escalation_alert_fires_once_after_append_and_delay() {
    let (ctrl, sink) = controller(vec![Ok(ChatReply {
        escalate: true,
        context_summary: Some("account locked, 3 failed attempts".into()),
        ..reply("Escalating to human agent with context.")
    })]);

    ctrl.set_input("my account is locked");
    assert_eq!(ctrl.send_message().await, SendOutcome::Delivered);

    // The entry is already appended, the alert has not fired yet.
    assert_eq!(ctrl.transcript().len(), 2);
    assert!(ctrl.transcript()[1].escalate);
    tokio::task::yield_now().await;
    assert!(sink.raised.lock().is_empty());

    tokio::time::sleep(ALERT_DELAY * 2).await;
    tokio::task::yield_now().await;

    let raised = sink.raised.lock();
    assert_eq!(raised.len(), 1);
    assert_eq!(raised[0], "account locked, 3 failed attempts");
}

#[tokio::test(start_paused = true)]
async fn unflagged_reply_raises_no_alert() {
    let (ctrl, sink) = controller(vec![Ok(reply("Hi there"))]);

    ctrl.set_input("hello");
    ctrl.send_message().await;

    tokio::time::sleep(ALERT_DELAY * 2).await;
    tokio::task::yield_now().await;
    assert!(sink.raised.lock().is_empty());
}
