//! Application layer for medchat
//!
//! This crate contains the submission use case and the port definitions the
//! infrastructure and presentation layers implement. It depends only on the
//! domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    agent_gateway::{AgentGateway, GatewayError},
    conversation_view::{ConversationView, NoView},
};
pub use use_cases::submit_question::{
    FAILURE_BUBBLE_TEXT, SubmissionOutcome, SubmitQuestionUseCase,
};
