/// Parameters for a single non-streaming generation call against the
/// inference backend.
///
/// The model name and the `stream: false` flag are owned by the transport
/// adapter; the request carries only what varies between call sites: the
/// prompt, the output-length cap, and an optional randomness override.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    prompt: String,
    num_predict: u32,
    temperature: Option<f32>,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            num_predict: 128,
            temperature: None,
        }
    }

    pub fn with_num_predict(mut self, num_predict: u32) -> Self {
        self.num_predict = num_predict;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn num_predict(&self) -> u32 {
        self.num_predict
    }

    pub fn temperature(&self) -> Option<f32> {
        self.temperature
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_request_builder() {
        let request = GenerationRequest::new("Question:\nWhat is oligopoly?")
            .with_num_predict(180)
            .with_temperature(0.4);

        assert_eq!(request.prompt(), "Question:\nWhat is oligopoly?");
        assert_eq!(request.num_predict(), 180);
        assert_eq!(request.temperature(), Some(0.4));
    }

    #[test]
    fn test_temperature_defaults_to_none() {
        let request = GenerationRequest::new("summary").with_num_predict(200);
        assert_eq!(request.temperature(), None);
    }
}
