//! Submit Question use case.
//!
//! The submission state machine: validate the raw input, append the user
//! message optimistically, call the gateway while the view shows a busy
//! indication, then append the answer or surface the failure on both error
//! channels (banner and log bubble).
//!
//! One submission is processed at a time; a submission arriving while
//! another is in flight is ignored.

use crate::ports::agent_gateway::{AgentGateway, GatewayError};
use crate::ports::conversation_view::ConversationView;
use medchat_domain::{AnswerResult, Question, QuestionError, RequestState};
use std::sync::{Arc, Mutex};
use tracing::{debug, info, warn};

/// Text of the agent bubble appended to the log when a submission fails.
pub const FAILURE_BUBBLE_TEXT: &str = "❌ Mi dispiace, si è verificato un errore durante \
     l'elaborazione della tua domanda. Verifica che il server sia avviato e riprova.";

/// How a submission ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The backend answered; the agent message is already rendered.
    Answered(AnswerResult),
    /// Validation failed before any network activity.
    Rejected(QuestionError),
    /// The transport failed after retry exhaustion.
    Failed(GatewayError),
    /// Another submission was in flight; nothing happened.
    Busy,
}

/// Use case coordinating one question/answer round.
///
/// The gateway passed in is expected to already carry the retry policy;
/// this use case sees only the final result of an attempt sequence.
pub struct SubmitQuestionUseCase {
    gateway: Arc<dyn AgentGateway>,
    view: Arc<dyn ConversationView>,
    state: Mutex<RequestState>,
}

impl SubmitQuestionUseCase {
    pub fn new(gateway: Arc<dyn AgentGateway>, view: Arc<dyn ConversationView>) -> Self {
        Self {
            gateway,
            view,
            state: Mutex::new(RequestState::Idle),
        }
    }

    /// Current submission state (observable for tests and callers).
    pub fn state(&self) -> RequestState {
        *self.state.lock().unwrap()
    }

    /// Run the full submission flow for one raw input string.
    pub async fn execute(&self, raw: &str) -> SubmissionOutcome {
        {
            let mut state = self.state.lock().unwrap();
            if state.is_in_flight() {
                debug!("submission ignored: a request is already in flight");
                return SubmissionOutcome::Busy;
            }
            *state = RequestState::InFlight;
        }

        let question = match Question::parse(raw) {
            Ok(question) => question,
            Err(error) => {
                // Validation terminates the flow before any other side effect
                self.view.on_error(&error.to_string());
                *self.state.lock().unwrap() = RequestState::Idle;
                return SubmissionOutcome::Rejected(error);
            }
        };

        info!(
            "submitting question: {}",
            question.content().chars().take(80).collect::<String>()
        );

        // Optimistic append: the user bubble shows before the request resolves
        self.view.on_user_message(question.content());
        self.view.on_busy_start();

        let outcome = match self.gateway.ask(&question).await {
            Ok(answer) => {
                self.view.on_agent_message(&answer.text, &answer.sources);
                *self.state.lock().unwrap() = RequestState::Idle;
                SubmissionOutcome::Answered(answer)
            }
            Err(error) => {
                warn!("submission failed: {error:?}");
                // Both channels fire: the banner and a bubble in the log
                self.view.on_error(&error.to_string());
                self.view.on_agent_message(FAILURE_BUBBLE_TEXT, &[]);
                *self.state.lock().unwrap() = RequestState::Errored;
                SubmissionOutcome::Failed(error)
            }
        };

        // Single exit action for both paths: busy indication always clears
        self.view.on_busy_end();
        outcome
    }
}
