//! Generation service integration
//!
//! Provides the interface to the text-generation API that turns a template's
//! flattened text plus a user prompt into a batchUpdate edit list.

pub mod gemini;
pub mod mock;

pub use gemini::GeminiEditClient;
pub use mock::MockGenerationClient;

use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait GenerationService: Send + Sync {
    /// Send the assembled instruction and return the raw completion text.
    async fn generate_edits(&self, prompt: &str) -> Result<String>;
}
