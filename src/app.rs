//! Application orchestration for drafting a presentation from a template.

use crate::ai::{GeminiEditClient, GenerationService};
use crate::models::{BatchUpdateRequest, Config};
use crate::parse::{self, ParsedEdits};
use crate::slides::{SlidesClient, SlidesService};
use crate::{extract, prompts, Error, Result};
use chrono::Local;
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// Fixed URL template for the success report.
const PRESENTATION_URL_PREFIX: &str = "https://docs.google.com/presentation/d/";

/// Reference to the generated copy, handed back to the caller for reporting.
#[derive(Debug, Clone)]
pub struct GeneratedCopy {
    pub presentation_id: String,
    pub url: String,
}

pub fn presentation_url(presentation_id: &str) -> String {
    format!("{}{}/", PRESENTATION_URL_PREFIX, presentation_id)
}

/// Coordinates the template copy, text extraction, generation call, and
/// batch update for one run.
pub struct App {
    generation: Box<dyn GenerationService>,
    slides: Box<dyn SlidesService>,
    output_dir: PathBuf,
}

/// Injectable service bundle used to construct [`App`] in tests/harnesses.
pub struct AppServices {
    pub generation: Box<dyn GenerationService>,
    pub slides: Box<dyn SlidesService>,
}

impl App {
    /// Build an app from concrete service dependencies.
    ///
    /// This is primarily useful for integration tests and local harnesses
    /// that need to inject mocks.
    pub fn with_services(services: AppServices, output_dir: PathBuf) -> Self {
        Self {
            generation: services.generation,
            slides: services.slides,
            output_dir,
        }
    }

    /// Construct an app from environment configuration (`Config::from_env`).
    pub fn new() -> Result<Self> {
        let config = Config::from_env()?;

        let output_dir = PathBuf::from(&config.output_dir);
        fs::create_dir_all(&output_dir)?;

        // Reuse one HTTP connection pool across both API clients.
        let http_client = reqwest::Client::new();

        info!("Generation model: {}", config.gemini_model);
        let generation = Box::new(GeminiEditClient::new_with_client(
            config.gemini_api_key,
            config.gemini_model,
            http_client.clone(),
        ));
        let slides = Box::new(SlidesClient::new_with_client(
            config.google_access_token,
            http_client,
        ));

        Ok(Self::with_services(
            AppServices { generation, slides },
            output_dir,
        ))
    }

    /// Run the pipeline: copy the template, generate an edit list from its
    /// text and the user prompt, and apply it to the copy.
    pub async fn run(&self, template_id: &str, user_prompt: &str) -> Result<GeneratedCopy> {
        info!("Fetching presentation data...");
        let snapshot = self.slides.get_presentation(template_id).await?;

        let copy_name = format!(
            "[Generated] {} - {}",
            snapshot.title.as_deref().unwrap_or("Untitled"),
            Local::now().format("%m/%d/%Y")
        );
        info!("Copying template presentation as {:?}...", copy_name);
        let new_presentation_id = self.slides.copy_presentation(template_id, &copy_name).await?;
        info!("New presentation created with ID: {}", new_presentation_id);

        let texts = extract::flatten_text(&snapshot);
        info!("Extracted {} text fragments from template", texts.len());

        let date = Local::now().format("%m/%Y").to_string();
        let prompt = prompts::edit_request(user_prompt, &date, &texts);

        info!("Calling generation API...");
        let completion = self.generation.generate_edits(&prompt).await?;
        info!("Received completion ({} chars)", completion.len());

        let request = match parse::parse_edit_list(&completion) {
            ParsedEdits::Parsed(edits) => edits.into_batch_update(),
            ParsedEdits::Invalid { raw, error } => {
                return Err(Error::MalformedEditList { source: error, raw });
            }
        };

        self.dump_batch_update(&request)?;

        info!("Applying updates to the new presentation...");
        self.slides
            .batch_update(&new_presentation_id, &request)
            .await?;
        info!("Updates applied successfully");

        let url = presentation_url(&new_presentation_id);
        Ok(GeneratedCopy {
            presentation_id: new_presentation_id,
            url,
        })
    }

    /// Save the outgoing batchUpdate body locally for diagnostics.
    fn dump_batch_update(&self, request: &BatchUpdateRequest) -> Result<()> {
        let dump_path = self
            .output_dir
            .join(format!("batch_update_{}.json", Local::now().format("%H-%M-%S")));
        fs::write(&dump_path, serde_json::to_string_pretty(request)?)?;
        info!("Saved batch update body at: {}", dump_path.display());
        Ok(())
    }
}
