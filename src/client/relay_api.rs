use crate::connector::api::{AskRequest, AskResponse, ExamTipsResponse};
use crate::domain::TutorError;

/// HTTP client for the Relay Service, used by the chat REPL.
///
/// `/ask` returns its fixed busy message in the body even on HTTP 500, so the
/// status code is deliberately ignored here: any parsed body is a displayable
/// answer, and only transport-level failure is an error.
pub struct RelayApi {
    client: reqwest::Client,
    base: String,
}

impl RelayApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base: String = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub async fn ask(&self, question: &str) -> Result<String, TutorError> {
        let request = AskRequest {
            question: question.to_string(),
        };

        let response = self
            .client
            .post(format!("{}/ask", self.base))
            .json(&request)
            .send()
            .await
            .map_err(|e| TutorError::transport(format!("RelayApi: ask request failed: {e}")))?;

        let body: AskResponse = response
            .json()
            .await
            .map_err(|e| TutorError::transport(format!("RelayApi: failed to parse answer: {e}")))?;

        Ok(body.answer)
    }

    pub async fn exam_tips(&self) -> Result<Vec<String>, TutorError> {
        let response = self
            .client
            .get(format!("{}/exam-tips", self.base))
            .send()
            .await
            .map_err(|e| TutorError::transport(format!("RelayApi: tips request failed: {e}")))?;

        let body: ExamTipsResponse = response
            .json()
            .await
            .map_err(|e| TutorError::transport(format!("RelayApi: failed to parse tips: {e}")))?;

        Ok(body.tips)
    }
}
