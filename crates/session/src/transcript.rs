//! Append-only in-memory transcript.
//!
//! One transcript per session, discarded with it. Entries are never mutated,
//! deleted, or reordered after insertion; ordering matches send order.

use sl_domain::message::Message;
use sl_domain::trace::TraceEvent;

/// Ordered collection of [`Message`] entries for the active session.
///
/// The `revision` counter bumps on every append; it is the change signal
/// the presentation layer watches to re-render and scroll to the latest
/// entry.
#[derive(Debug, Default)]
pub struct Transcript {
    entries: Vec<Message>,
    revision: u64,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one entry to the end of the sequence.
    pub fn append(&mut self, message: Message) {
        let origin = message.origin.to_string();
        self.entries.push(message);
        self.revision += 1;

        TraceEvent::TranscriptAppend {
            origin,
            total_entries: self.entries.len(),
        }
        .emit();
    }

    /// The full ordered sequence, oldest first.
    pub fn entries(&self) -> &[Message] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Monotonically increasing change counter.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}
