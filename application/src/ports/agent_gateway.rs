//! Agent gateway port
//!
//! Defines the interface for asking the agent backend a question.
//! Implementations (adapters) live in the infrastructure layer.

use async_trait::async_trait;
use medchat_domain::{AnswerResult, Question};
use thiserror::Error;

/// Errors that can occur while talking to the agent backend.
///
/// The `Display` strings are the user-facing messages shown in the error
/// banner; classification details for logs travel in the variant fields.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// The request did not complete within the configured timeout.
    #[error("La richiesta è scaduta. Per favore riprova.")]
    Timeout,

    /// The server could not be reached at all.
    #[error("Impossibile connettersi al server. Verifica la tua connessione e riprova.")]
    NetworkUnreachable,

    /// The server answered with a non-success status. `message` is taken
    /// from the error body when one is present, otherwise built from the
    /// status line.
    #[error("{message}")]
    Http { status: u16, message: String },

    /// A success response carried a body that could not be parsed.
    #[error("Risposta del server non valida.")]
    Parse(String),

    /// Anything not covered above; propagated unchanged.
    #[error("{0}")]
    Other(String),
}

/// Gateway to the agent backend.
///
/// One call per submitted question; retry behavior is layered on top of
/// this port, not inside implementations.
#[async_trait]
pub trait AgentGateway: Send + Sync {
    /// Send a validated question and wait for the answer.
    async fn ask(&self, question: &Question) -> Result<AnswerResult, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_facing_messages() {
        assert_eq!(
            GatewayError::Timeout.to_string(),
            "La richiesta è scaduta. Per favore riprova."
        );
        assert_eq!(
            GatewayError::NetworkUnreachable.to_string(),
            "Impossibile connettersi al server. Verifica la tua connessione e riprova."
        );
    }

    #[test]
    fn test_http_error_displays_only_the_message() {
        let error = GatewayError::Http {
            status: 500,
            message: "db down".to_string(),
        };
        assert_eq!(error.to_string(), "db down");
    }

    #[test]
    fn test_parse_error_hides_the_detail_from_display() {
        let error = GatewayError::Parse("expected value at line 1".to_string());
        assert_eq!(error.to_string(), "Risposta del server non valida.");
    }
}
