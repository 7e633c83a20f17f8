use super::SlidesService;
use crate::models::{BatchUpdateRequest, CopiedFile, Presentation};
use crate::{Error, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

const DEFAULT_SLIDES_BASE_URL: &str = "https://slides.googleapis.com";
const DEFAULT_DRIVE_BASE_URL: &str = "https://www.googleapis.com";

#[derive(Debug, Serialize)]
struct CopyFileRequest<'a> {
    name: &'a str,
}

/// REST client for the Slides and Drive endpoints the pipeline consumes.
///
/// Token issuance is out of scope; the caller supplies a ready bearer token.
pub struct SlidesClient {
    client: Client,
    access_token: String,
    slides_base_url: String,
    drive_base_url: String,
    timeout: Duration,
}

impl SlidesClient {
    pub fn new(access_token: String) -> Self {
        Self::new_with_client(access_token, Client::new())
    }

    pub fn new_with_client(access_token: String, client: Client) -> Self {
        Self {
            client,
            access_token,
            slides_base_url: DEFAULT_SLIDES_BASE_URL.to_string(),
            drive_base_url: DEFAULT_DRIVE_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    #[cfg(test)]
    pub fn with_base_urls(mut self, slides_base_url: String, drive_base_url: String) -> Self {
        self.slides_base_url = slides_base_url;
        self.drive_base_url = drive_base_url;
        self
    }

    async fn read_body_checked(
        response: reqwest::Response,
        context: &str,
        error: fn(String) -> Error,
    ) -> Result<String> {
        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            tracing::error!("{} failed (status {}): {}", context, status, error_text);
            return Err(error(format!(
                "{} failed (status {}): {}",
                context, status, error_text
            )));
        }
        Ok(response.text().await?)
    }
}

#[async_trait]
impl SlidesService for SlidesClient {
    async fn get_presentation(&self, presentation_id: &str) -> Result<Presentation> {
        let url = format!(
            "{}/v1/presentations/{}",
            self.slides_base_url, presentation_id
        );

        let response = self
            .client
            .get(&url)
            .timeout(self.timeout)
            .bearer_auth(&self.access_token)
            .send()
            .await?;

        let body =
            Self::read_body_checked(response, "Presentation fetch", Error::Platform).await?;

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse presentation snapshot: {}\nBody: {}", e, body);
            Error::Platform(format!("Unparseable presentation snapshot: {}", e))
        })
    }

    async fn copy_presentation(&self, template_id: &str, copy_name: &str) -> Result<String> {
        let url = format!("{}/drive/v3/files/{}/copy", self.drive_base_url, template_id);

        let response = self
            .client
            .post(&url)
            .timeout(self.timeout)
            .bearer_auth(&self.access_token)
            .json(&CopyFileRequest { name: copy_name })
            .send()
            .await?;

        let body = Self::read_body_checked(response, "File copy", Error::Platform).await?;

        let copied: CopiedFile = serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse copy response: {}\nBody: {}", e, body);
            Error::Platform(format!("Unparseable copy response: {}", e))
        })?;

        Ok(copied.id)
    }

    async fn batch_update(
        &self,
        presentation_id: &str,
        request: &BatchUpdateRequest,
    ) -> Result<()> {
        let url = format!(
            "{}/v1/presentations/{}:batchUpdate",
            self.slides_base_url, presentation_id
        );

        let response = self
            .client
            .post(&url)
            .timeout(self.timeout)
            .bearer_auth(&self.access_token)
            .json(request)
            .send()
            .await?;

        Self::read_body_checked(response, "Batch update", Error::Apply).await?;
        Ok(())
    }
}
