//! Demo gateway with canned answers, for trying the client without a
//! running backend.

use async_trait::async_trait;
use medchat_application::{AgentGateway, GatewayError};
use medchat_domain::{AnswerResult, Question, Source};
use std::time::Duration;

const HYPERTENSION_ANSWER: &str = "L'ipertensione, o pressione alta, è una condizione in cui \
     la pressione del sangue nelle arterie è costantemente elevata. È spesso chiamata 'killer \
     silenzioso' perché raramente causa sintomi ma può portare a gravi problemi di salute come \
     malattie cardiache, ictus e problemi renali. La pressione normale è inferiore a 120/80 mmHg.";

const DIABETES_ANSWER: &str = "Il diabete è una malattia cronica caratterizzata da livelli \
     elevati di glucosio nel sangue. I sintomi comuni includono: aumento della sete, minzione \
     frequente, fame eccessiva, perdita di peso inspiegabile, affaticamento, visione offuscata, \
     lenta guarigione delle ferite e infezioni frequenti. Esistono principalmente due tipi: \
     diabete di tipo 1 e di tipo 2.";

/// Offline [`AgentGateway`] that simulates the backend.
///
/// Knows about a couple of topics and echoes everything else back, after a
/// short artificial latency.
pub struct DemoAgentGateway {
    delay: Duration,
}

impl DemoAgentGateway {
    pub fn new() -> Self {
        Self {
            delay: Duration::from_millis(1500),
        }
    }

    /// Override the simulated latency (tests use zero).
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

impl Default for DemoAgentGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AgentGateway for DemoAgentGateway {
    async fn ask(&self, question: &Question) -> Result<AnswerResult, GatewayError> {
        tokio::time::sleep(self.delay).await;

        let lowered = question.content().to_lowercase();

        let answer = if lowered.contains("ipertensione") {
            AnswerResult::new(
                HYPERTENSION_ANSWER,
                vec![
                    Source::new(
                        "WHO - Hypertension",
                        "https://www.who.int/news-room/fact-sheets/detail/hypertension",
                    ),
                    Source::new(
                        "Mayo Clinic - High blood pressure",
                        "https://www.mayoclinic.org/diseases-conditions/high-blood-pressure/symptoms-causes/syc-20373410",
                    ),
                ],
            )
        } else if lowered.contains("diabete") {
            AnswerResult::new(
                DIABETES_ANSWER,
                vec![Source::new(
                    "CDC - Diabetes Symptoms",
                    "https://www.cdc.gov/diabetes/basics/symptoms.html",
                )],
            )
        } else {
            AnswerResult::new(
                format!(
                    "Ho ricevuto la tua domanda: '{}'. In modalità demo posso rispondere a \
                     domande su ipertensione e diabete. Per risposte complete, assicurati che \
                     il backend sia in esecuzione.",
                    question.content()
                ),
                vec![],
            )
        };

        Ok(answer)
    }
}
