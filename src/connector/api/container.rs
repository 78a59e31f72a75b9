use std::sync::Arc;

use tracing::{info, warn};

use crate::application::{
    AskQuestionUseCase, ExamTipsUseCase, GenerationClient, RevisionSummaryUseCase,
};
use crate::connector::{MockGeneration, OllamaClient};

pub struct ContainerConfig {
    pub backend_url: String,
    pub model: String,
    /// Path of the optional supplementary knowledge text. Absence is
    /// tolerated and logged.
    pub knowledge_base: String,
    pub mock_backend: bool,
}

/// Process-wide wiring for the relay: the generation client plus the
/// knowledge base loaded once at startup. Read-only after construction; every
/// request is otherwise stateless.
pub struct Container {
    generation: Arc<dyn GenerationClient>,
    knowledge_base: Option<String>,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Self {
        let generation: Arc<dyn GenerationClient> = if config.mock_backend {
            info!("Using mock generation backend");
            Arc::new(MockGeneration::replying(
                "- Mock answer from the stub backend\n- Tip: run a real model",
            ))
        } else {
            info!(
                "Using Ollama backend at {} with model {}",
                config.backend_url, config.model
            );
            Arc::new(OllamaClient::new(config.model, config.backend_url))
        };

        let knowledge_base = load_knowledge_base(&config.knowledge_base);

        Self {
            generation,
            knowledge_base,
        }
    }

    /// Wire a container around an explicit generation client. Used by tests;
    /// the knowledge base is left empty.
    pub fn with_generation(generation: Arc<dyn GenerationClient>) -> Self {
        Self {
            generation,
            knowledge_base: None,
        }
    }

    pub fn ask_use_case(&self) -> AskQuestionUseCase {
        AskQuestionUseCase::new(self.generation.clone())
    }

    pub fn summary_use_case(&self) -> RevisionSummaryUseCase {
        RevisionSummaryUseCase::new(self.generation.clone())
    }

    pub fn exam_tips_use_case(&self) -> ExamTipsUseCase {
        ExamTipsUseCase::new()
    }

    /// Supplementary knowledge text, if the file was present at startup.
    /// Currently not referenced by either prompt template.
    pub fn knowledge_base(&self) -> Option<&str> {
        self.knowledge_base.as_deref()
    }
}

fn load_knowledge_base(path: &str) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(text) => {
            info!("Loaded knowledge base from {path} ({} bytes)", text.len());
            Some(text)
        }
        Err(e) => {
            warn!("Knowledge base {path} not loaded (optional): {e}");
            None
        }
    }
}
