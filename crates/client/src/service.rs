use sl_domain::error::Result;

use crate::types::{AnalyticsReport, ChatRequest, ChatReply};

/// Trait the session core dispatches through.
///
/// The production implementation is [`crate::RestChatClient`]; tests supply
/// their own. The chat path carries no retry or cancellation: one call,
/// one outcome.
#[async_trait::async_trait]
pub trait ChatService: Send + Sync {
    /// Send one user message and wait for the full backend reply.
    async fn send_chat(&self, req: ChatRequest) -> Result<ChatReply>;

    /// Fetch the aggregated analytics report for a user.
    ///
    /// Entirely independent of chat state; a failure here never touches the
    /// session.
    async fn analytics(&self, user_id: &str) -> Result<AnalyticsReport>;
}
