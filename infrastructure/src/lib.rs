//! Infrastructure layer for medchat
//!
//! Adapters for the outside world: the HTTP gateway to the agent backend,
//! the retry decorator around it, the startup health probe, the canned-answer
//! demo gateway, and configuration loading.

pub mod config;
pub mod demo;
pub mod http;

// Re-export commonly used types
pub use config::{ClientConfig, ConfigLoader};
pub use demo::DemoAgentGateway;
pub use http::gateway::HttpAgentGateway;
pub use http::health::check_endpoint;
pub use http::response::MISSING_ANSWER_TEXT;
pub use http::retry::{RetryPolicy, RetryingGateway};
