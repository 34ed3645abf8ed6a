//! Bounded retry with linear backoff around an [`AgentGateway`].

use async_trait::async_trait;
use medchat_application::{AgentGateway, GatewayError};
use medchat_domain::{AnswerResult, Question};
use std::time::Duration;
use tracing::warn;

/// Attempt budget and backoff shape for one question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first. Values below 1 behave as 1.
    pub attempts: u32,
    /// The wait before retry N is `base_delay * N` (linear backoff).
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: 2,
            base_delay: Duration::from_millis(1000),
        }
    }
}

impl RetryPolicy {
    pub fn new(attempts: u32, base_delay: Duration) -> Self {
        Self {
            attempts,
            base_delay,
        }
    }

    /// Backoff to wait after `failed_attempt` (1-based) before the next try.
    pub fn delay_after(&self, failed_attempt: u32) -> Duration {
        self.base_delay * failed_attempt
    }
}

/// Decorator adding the retry policy to any [`AgentGateway`].
///
/// Attempts are strictly sequential; retries apply uniformly to every
/// failure kind, and after exhaustion the last error propagates.
pub struct RetryingGateway<G> {
    inner: G,
    policy: RetryPolicy,
}

impl<G: AgentGateway> RetryingGateway<G> {
    pub fn new(inner: G, policy: RetryPolicy) -> Self {
        Self { inner, policy }
    }
}

#[async_trait]
impl<G: AgentGateway> AgentGateway for RetryingGateway<G> {
    async fn ask(&self, question: &Question) -> Result<AnswerResult, GatewayError> {
        let attempts = self.policy.attempts.max(1);
        let mut attempt = 1;

        loop {
            match self.inner.ask(question).await {
                Ok(answer) => return Ok(answer),
                Err(error) if attempt < attempts => {
                    warn!(
                        "attempt {}/{} failed (will retry after backoff): {error:?}",
                        attempt, attempts
                    );
                    tokio::time::sleep(self.policy.delay_after(attempt)).await;
                    attempt += 1;
                }
                Err(error) => return Err(error),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::time::Instant;

    struct ScriptedGateway {
        responses: Mutex<VecDeque<Result<AnswerResult, GatewayError>>>,
        calls: AtomicUsize,
    }

    impl ScriptedGateway {
        fn new(responses: Vec<Result<AnswerResult, GatewayError>>) -> Self {
            Self {
                responses: Mutex::new(VecDeque::from(responses)),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl AgentGateway for ScriptedGateway {
        async fn ask(&self, _question: &Question) -> Result<AnswerResult, GatewayError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Err(GatewayError::Other("script exhausted".to_string())))
        }
    }

    fn question() -> Question {
        Question::parse("Che cos'è il diabete?").unwrap()
    }

    #[tokio::test]
    async fn test_first_success_needs_no_retry() {
        let inner = ScriptedGateway::new(vec![Ok(AnswerResult::new("ok", vec![]))]);
        let gateway = RetryingGateway::new(inner, RetryPolicy::default());

        let answer = gateway.ask(&question()).await.unwrap();
        assert_eq!(answer.text, "ok");
        assert_eq!(gateway.inner.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_two_attempts_with_linear_backoff_then_last_error() {
        let inner = ScriptedGateway::new(vec![
            Err(GatewayError::Timeout),
            Err(GatewayError::NetworkUnreachable),
        ]);
        let gateway = RetryingGateway::new(inner, RetryPolicy::default());

        let start = Instant::now();
        let error = gateway.ask(&question()).await.unwrap_err();

        // Exactly two network attempts, ~1000ms apart, last error surfaced
        assert_eq!(error, GatewayError::NetworkUnreachable);
        assert_eq!(gateway.inner.calls.load(Ordering::SeqCst), 2);
        assert!(start.elapsed() >= Duration::from_millis(1000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_recovers_when_the_retry_succeeds() {
        let inner = ScriptedGateway::new(vec![
            Err(GatewayError::Http {
                status: 500,
                message: "db down".to_string(),
            }),
            Ok(AnswerResult::new("ce l'abbiamo fatta", vec![])),
        ]);
        let gateway = RetryingGateway::new(inner, RetryPolicy::default());

        let answer = gateway.ask(&question()).await.unwrap();
        assert_eq!(answer.text, "ce l'abbiamo fatta");
        assert_eq!(gateway.inner.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_backoff_grows_linearly_with_the_attempt_number() {
        let inner = ScriptedGateway::new(vec![
            Err(GatewayError::Timeout),
            Err(GatewayError::Timeout),
            Err(GatewayError::Timeout),
        ]);
        let policy = RetryPolicy::new(3, Duration::from_millis(1000));
        let gateway = RetryingGateway::new(inner, policy);

        let start = Instant::now();
        let _ = gateway.ask(&question()).await;

        // 1000ms after the first failure + 2000ms after the second
        assert_eq!(gateway.inner.calls.load(Ordering::SeqCst), 3);
        assert!(start.elapsed() >= Duration::from_millis(3000));
    }

    #[test]
    fn test_delay_after_is_linear() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.delay_after(1), Duration::from_millis(1000));
        assert_eq!(policy.delay_after(2), Duration::from_millis(2000));
    }
}
