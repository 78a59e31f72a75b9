use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use tracing::debug;

use crate::application::GenerationClient;
use crate::domain::{GenerationRequest, TutorError};

/// A [`GenerationClient`] that returns a canned reply without any network
/// access. Records every request it receives so tests can assert on call
/// counts and prompt contents; also usable as a backend stand-in via the
/// `--mock-backend` flag.
pub struct MockGeneration {
    reply: Result<String, String>,
    calls: AtomicUsize,
    requests: Mutex<Vec<GenerationRequest>>,
}

impl MockGeneration {
    /// Every call succeeds with `reply`.
    pub fn replying(reply: impl Into<String>) -> Self {
        Self {
            reply: Ok(reply.into()),
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Every call fails with a backend error carrying `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            reply: Err(message.into()),
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<GenerationRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl GenerationClient for MockGeneration {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, TutorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());
        debug!("MockGeneration call {}", self.call_count());

        match &self.reply {
            Ok(reply) => Ok(reply.clone()),
            Err(message) => Err(TutorError::backend(message.clone())),
        }
    }
}
