use async_trait::async_trait;

use crate::domain::{GenerationRequest, TutorError};

/// An interface for sending a prompt to a text-generation backend and
/// receiving the generated text.
///
/// Implementors encapsulate transport, serialization, and vendor-specific API
/// details. Consumers (the use cases) stay decoupled from any particular
/// backend or HTTP client library.
#[async_trait]
pub trait GenerationClient: Send + Sync {
    /// Issue one non-streaming generation call and return the raw generated
    /// text. An empty string means the backend answered but produced no
    /// usable text; callers decide how to present that.
    async fn generate(&self, request: &GenerationRequest) -> Result<String, TutorError>;
}
