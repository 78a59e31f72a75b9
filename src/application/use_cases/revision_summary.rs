use std::sync::Arc;

use tracing::{info, warn};

use crate::application::GenerationClient;
use crate::domain::GenerationRequest;

/// Returned verbatim whenever the summary cannot be produced. This endpoint
/// swallows failures entirely; the asymmetry with the ask exchange (which
/// surfaces backend failure as an HTTP error) is intentional and preserved.
pub const SUMMARY_UNAVAILABLE: &str = "Summary unavailable right now.";

const SUMMARY_NUM_PREDICT: u32 = 200;

const SUMMARY_PROMPT: &str = "\
Give a VERY SHORT revision summary on OLIGOPOLY.
- Definition
- Key features
- Kinked demand curve
- Collusion
- Exam tip
";

/// Produce the fixed-topic revision summary. Infallible from the caller's
/// perspective: any backend failure collapses into [`SUMMARY_UNAVAILABLE`].
pub struct RevisionSummaryUseCase {
    generation: Arc<dyn GenerationClient>,
}

impl RevisionSummaryUseCase {
    pub fn new(generation: Arc<dyn GenerationClient>) -> Self {
        Self { generation }
    }

    pub async fn execute(&self) -> String {
        let request =
            GenerationRequest::new(format!("\n{SUMMARY_PROMPT}")).with_num_predict(SUMMARY_NUM_PREDICT);

        info!("Requesting revision summary from inference backend");
        match self.generation.generate(&request).await {
            Ok(text) => {
                let text = text.trim();
                if text.is_empty() {
                    SUMMARY_UNAVAILABLE.to_string()
                } else {
                    text.to_string()
                }
            }
            Err(e) => {
                warn!("Revision summary failed, returning fallback: {e}");
                SUMMARY_UNAVAILABLE.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::MockGeneration;

    #[tokio::test]
    async fn summary_uses_fixed_prompt_and_cap() {
        let mock = Arc::new(MockGeneration::replying("Oligopoly: few firms dominate."));
        let use_case = RevisionSummaryUseCase::new(mock.clone());

        let summary = use_case.execute().await;
        assert_eq!(summary, "Oligopoly: few firms dominate.");

        let request = mock.last_request().unwrap();
        assert!(request.prompt().contains("revision summary on OLIGOPOLY"));
        assert_eq!(request.num_predict(), 200);
        assert_eq!(request.temperature(), None);
    }

    #[tokio::test]
    async fn failure_is_swallowed() {
        let mock = Arc::new(MockGeneration::failing("backend down"));
        let use_case = RevisionSummaryUseCase::new(mock);

        assert_eq!(use_case.execute().await, SUMMARY_UNAVAILABLE);
    }

    #[tokio::test]
    async fn empty_generation_falls_back() {
        let mock = Arc::new(MockGeneration::replying("  \n"));
        let use_case = RevisionSummaryUseCase::new(mock);

        assert_eq!(use_case.execute().await, SUMMARY_UNAVAILABLE);
    }
}
