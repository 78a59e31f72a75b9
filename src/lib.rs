pub mod application;
pub mod cli;
pub mod client;
pub mod connector;
pub mod domain;

pub use application::{
    AskQuestionUseCase, ExamTipsUseCase, GenerationClient, RevisionSummaryUseCase,
    EMPTY_QUESTION_REPLY, NO_RESPONSE_REPLY, SUMMARY_UNAVAILABLE,
};

pub use cli::Commands;

pub use client::{ChatSession, RelayApi, CONNECTION_FAILURE_REPLY, GREETING, SUGGESTED_QUESTIONS};

pub use connector::{
    router, serve, AskRequest, AskResponse, Container, ContainerConfig, ExamTipsResponse,
    MockGeneration, OllamaClient, SummaryResponse, BUSY_REPLY, HEALTH_BANNER,
};

pub use domain::{GenerationRequest, Message, Role, TutorError, EXAM_TIPS};
