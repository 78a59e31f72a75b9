use std::sync::Arc;

use tracing::{debug, info};

use crate::application::GenerationClient;
use crate::domain::{GenerationRequest, TutorError};

/// Returned without contacting the backend when the question is empty or
/// whitespace-only. Success, not an error.
pub const EMPTY_QUESTION_REPLY: &str = "Please ask a valid economics question 😊";

/// Returned when the backend answered but produced no usable text. Also
/// success, not an error.
pub const NO_RESPONSE_REPLY: &str = "⚠️ No response generated. Try again.";

/// Short output cap keeps answers fast on modest local hardware.
const ASK_NUM_PREDICT: u32 = 180;
/// Low temperature for focused, deterministic-leaning answers.
const ASK_TEMPERATURE: f32 = 0.4;

/// Instructional template the student's question is interpolated into.
const ASK_PROMPT_TEMPLATE: &str = "\
You are an A-Level Economics teacher.

Answer VERY briefly:
- 5–7 bullet points only
- Simple language
- One real-world example
- One exam tip at the end
- NO diagrams
- NO long paragraphs

Question:
";

/// The ask/respond exchange: validate the question, build the fixed teacher
/// prompt around it, make exactly one generation call, and normalize the
/// outcome into display text.
///
/// Only a backend failure propagates as an error; every other outcome
/// (empty input, empty generation, success) is a plain answer string.
pub struct AskQuestionUseCase {
    generation: Arc<dyn GenerationClient>,
}

impl AskQuestionUseCase {
    pub fn new(generation: Arc<dyn GenerationClient>) -> Self {
        Self { generation }
    }

    pub async fn execute(&self, question: &str) -> Result<String, TutorError> {
        if question.trim().is_empty() {
            debug!("Empty question, replying without contacting the backend");
            return Ok(EMPTY_QUESTION_REPLY.to_string());
        }

        // Trimming is only for the emptiness check; the prompt carries the
        // question exactly as submitted.

        let request = GenerationRequest::new(build_ask_prompt(question))
            .with_num_predict(ASK_NUM_PREDICT)
            .with_temperature(ASK_TEMPERATURE);

        info!("Forwarding question to inference backend");
        let answer = self.generation.generate(&request).await?;

        let answer = answer.trim();
        if answer.is_empty() {
            return Ok(NO_RESPONSE_REPLY.to_string());
        }

        Ok(answer.to_string())
    }
}

fn build_ask_prompt(question: &str) -> String {
    format!("\n{ASK_PROMPT_TEMPLATE}{question}\n")
}
