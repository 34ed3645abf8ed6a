//! reqwest adapter for the agent's ask endpoint.

use crate::config::ClientConfig;
use crate::http::response::parse_answer;
use async_trait::async_trait;
use medchat_application::{AgentGateway, GatewayError};
use medchat_domain::{AnswerResult, Question};
use reqwest::StatusCode;
use reqwest::header::ACCEPT;
use serde::Serialize;
use tracing::debug;

/// Message used for an error body that is JSON but has no `error` or
/// `message` field.
const GENERIC_HTTP_ERROR: &str = "Si è verificato un errore durante la richiesta.";

#[derive(Serialize)]
struct AskRequest<'a> {
    question: &'a str,
}

/// HTTP implementation of [`AgentGateway`].
///
/// One POST per question; the whole-request timeout is carried by the
/// client, so an expired request is cancelled rather than abandoned.
pub struct HttpAgentGateway {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpAgentGateway {
    pub fn new(config: &ClientConfig) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| GatewayError::Other(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }
}

#[async_trait]
impl AgentGateway for HttpAgentGateway {
    async fn ask(&self, question: &Question) -> Result<AnswerResult, GatewayError> {
        debug!("POST {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .header(ACCEPT, "application/json")
            .json(&AskRequest {
                question: question.content(),
            })
            .send()
            .await
            .map_err(classify_send_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(error_from_status(status, &body));
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| GatewayError::Parse(e.to_string()))?;

        Ok(parse_answer(&body))
    }
}

fn classify_send_error(error: reqwest::Error) -> GatewayError {
    if error.is_timeout() {
        GatewayError::Timeout
    } else if error.is_connect() {
        GatewayError::NetworkUnreachable
    } else {
        GatewayError::Other(error.to_string())
    }
}

/// Build the failure message for a non-success status.
///
/// A JSON error body is probed for `error` then `message`; a body that is
/// not JSON yields a message built from the status line instead.
fn error_from_status(status: StatusCode, body: &str) -> GatewayError {
    let message = match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => ["error", "message"]
            .iter()
            .find_map(|field| {
                value
                    .get(field)
                    .and_then(serde_json::Value::as_str)
                    .filter(|s| !s.is_empty())
            })
            .unwrap_or(GENERIC_HTTP_ERROR)
            .to_string(),
        Err(_) => format!(
            "Errore {}: {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown")
        ),
    };

    GatewayError::Http {
        status: status.as_u16(),
        message,
    }
}
