//! Conversation view port
//!
//! Callbacks for rendering the conversation as a submission progresses.
//! Implementations live in the presentation layer; each append is expected
//! to bring the newest entry into view.

use medchat_domain::Source;

/// Sink for conversation updates during a submission.
pub trait ConversationView: Send + Sync {
    /// The user's question was accepted and appended to the log.
    fn on_user_message(&self, text: &str);

    /// An agent answer (or failure bubble) was appended to the log.
    fn on_agent_message(&self, text: &str, sources: &[Source]);

    /// A transient, user-correctable or transport error to surface outside
    /// the log.
    fn on_error(&self, message: &str);

    /// A request went in flight; input affordances should be disabled.
    fn on_busy_start(&self);

    /// The request resolved (either way); input affordances come back.
    fn on_busy_end(&self);
}

/// No-op view for headless use (JSON output, tests).
pub struct NoView;

impl ConversationView for NoView {
    fn on_user_message(&self, _text: &str) {}
    fn on_agent_message(&self, _text: &str, _sources: &[Source]) {}
    fn on_error(&self, _message: &str) {}
    fn on_busy_start(&self) {}
    fn on_busy_end(&self) {}
}
