//! Slides platform integration
//!
//! Handles reading the template snapshot, copying the template file, and
//! applying batchUpdate edit lists to the copy.

pub mod client;
pub mod mock;

pub use client::SlidesClient;
pub use mock::MockSlidesClient;

use crate::models::{BatchUpdateRequest, Presentation};
use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait SlidesService: Send + Sync {
    /// Fetch the full content snapshot of a presentation.
    async fn get_presentation(&self, presentation_id: &str) -> Result<Presentation>;

    /// Duplicate a presentation file and return the new file's identifier.
    async fn copy_presentation(&self, template_id: &str, copy_name: &str) -> Result<String>;

    /// Apply an edit list to a presentation. Atomic-or-fails from our side;
    /// no partial-success detection is attempted.
    async fn batch_update(&self, presentation_id: &str, request: &BatchUpdateRequest)
        -> Result<()>;
}
