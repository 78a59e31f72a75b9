use thiserror::Error;

#[derive(Debug, Error)]
pub enum TutorError {
    #[error("Backend error: {0}")]
    Backend(String),

    #[error("Backend timed out: {0}")]
    Timeout(String),

    #[error("Transport error: {0}")]
    Transport(String),
}

impl TutorError {
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }

    pub fn timeout(msg: impl Into<String>) -> Self {
        Self::Timeout(msg.into())
    }

    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }
}
