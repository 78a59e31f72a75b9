use serde::{Deserialize, Serialize};

/// Body of `POST /ask`. A missing `question` field is treated the same as an
/// empty one, so the relay never rejects the envelope itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub question: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskResponse {
    pub answer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub summary: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamTipsResponse {
    pub tips: Vec<String>,
}
