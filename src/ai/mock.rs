use super::GenerationService;
use crate::{Error, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
pub struct MockGenerationClient {
    completion_responses: Arc<Mutex<Vec<String>>>,
    error_message: Arc<Mutex<Option<String>>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockGenerationClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_completion_response(self, response: String) -> Self {
        self.completion_responses.lock().unwrap().push(response);
        self
    }

    /// Makes every call fail, simulating a generation endpoint outage.
    pub fn with_error(self, message: String) -> Self {
        *self.error_message.lock().unwrap() = Some(message);
        self
    }

    pub fn get_call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    /// Prompts received so far, in call order.
    pub fn get_prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerationService for MockGenerationClient {
    async fn generate_edits(&self, prompt: &str) -> Result<String> {
        let mut prompts = self.prompts.lock().unwrap();
        prompts.push(prompt.to_string());
        let count = prompts.len();
        drop(prompts);

        if let Some(message) = self.error_message.lock().unwrap().clone() {
            return Err(Error::Generation(message));
        }

        let responses = self.completion_responses.lock().unwrap();
        if responses.is_empty() {
            // Default mock response: an empty edit list
            Ok("[]".to_string())
        } else {
            let index = (count - 1) % responses.len();
            Ok(responses[index].clone())
        }
    }
}
