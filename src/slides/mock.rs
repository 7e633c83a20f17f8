use super::SlidesService;
use crate::models::{BatchUpdateRequest, Presentation};
use crate::{Error, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
pub struct MockSlidesClient {
    presentations: Arc<Mutex<HashMap<String, Presentation>>>,
    copies: Arc<Mutex<Vec<(String, String)>>>,
    applied_updates: Arc<Mutex<Vec<(String, serde_json::Value)>>>,
    batch_update_error: Arc<Mutex<Option<String>>>,
}

impl MockSlidesClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_presentation(self, id: String, presentation: Presentation) -> Self {
        self.presentations.lock().unwrap().insert(id, presentation);
        self
    }

    /// Makes `batch_update` fail, simulating server-side rejection.
    pub fn with_batch_update_error(self, message: String) -> Self {
        *self.batch_update_error.lock().unwrap() = Some(message);
        self
    }

    /// `(template_id, copy_name)` pairs, in call order.
    pub fn get_copies(&self) -> Vec<(String, String)> {
        self.copies.lock().unwrap().clone()
    }

    /// `(presentation_id, requests)` pairs applied so far.
    pub fn get_applied_updates(&self) -> Vec<(String, serde_json::Value)> {
        self.applied_updates.lock().unwrap().clone()
    }

    pub fn get_batch_update_count(&self) -> usize {
        self.applied_updates.lock().unwrap().len()
    }
}

#[async_trait]
impl SlidesService for MockSlidesClient {
    async fn get_presentation(&self, presentation_id: &str) -> Result<Presentation> {
        self.presentations
            .lock()
            .unwrap()
            .get(presentation_id)
            .cloned()
            .ok_or_else(|| Error::Platform(format!("Presentation not found: {}", presentation_id)))
    }

    async fn copy_presentation(&self, template_id: &str, copy_name: &str) -> Result<String> {
        if !self
            .presentations
            .lock()
            .unwrap()
            .contains_key(template_id)
        {
            return Err(Error::Platform(format!(
                "Presentation not found: {}",
                template_id
            )));
        }

        let mut copies = self.copies.lock().unwrap();
        copies.push((template_id.to_string(), copy_name.to_string()));
        Ok(format!("copy-{}", copies.len()))
    }

    async fn batch_update(
        &self,
        presentation_id: &str,
        request: &BatchUpdateRequest,
    ) -> Result<()> {
        if let Some(message) = self.batch_update_error.lock().unwrap().clone() {
            return Err(Error::Apply(message));
        }

        self.applied_updates
            .lock()
            .unwrap()
            .push((presentation_id.to_string(), request.requests.clone()));
        Ok(())
    }
}
