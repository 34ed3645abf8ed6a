//! Startup health probe for the agent endpoint.
//!
//! Fire-and-forget: failures are logged at warn level and never surfaced to
//! the user; the submission pipeline does not depend on the outcome.

use std::time::Duration;
use tracing::{debug, warn};

const PROBE_TIMEOUT: Duration = Duration::from_secs(3);

/// Probe the endpoint with an OPTIONS request.
///
/// A 404 still means the server is reachable, so it is not reported.
pub async fn check_endpoint(endpoint: String) {
    let client = reqwest::Client::new();
    let result = client
        .request(reqwest::Method::OPTIONS, &endpoint)
        .timeout(PROBE_TIMEOUT)
        .send()
        .await;

    match result {
        Ok(response) => {
            let status = response.status();
            if !status.is_success() && status.as_u16() != 404 {
                warn!("health probe for {endpoint} returned {status}");
            } else {
                debug!("agent endpoint {endpoint} is reachable");
            }
        }
        Err(error) => {
            warn!("could not reach the agent endpoint {endpoint}: {error}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_probe_sends_options_once() {
        let server = MockServer::start().await;
        Mock::given(method("OPTIONS"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        check_endpoint(format!("{}/api/ask", server.uri())).await;
    }

    #[tokio::test]
    async fn test_probe_swallows_unreachable_endpoint() {
        // Must not panic or propagate anything
        check_endpoint("http://127.0.0.1:1/api/ask".to_string()).await;
    }
}
