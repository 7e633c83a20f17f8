//! slidedraft - drafts a new slide presentation from a template and a prompt
//!
//! Copies a template Google Slides presentation, extracts its text content,
//! asks a generative model for a batchUpdate edit list that rewrites that
//! text for the user's topic, and applies the edits to the copy.

pub mod ai;
pub mod app;
pub mod error;
pub mod extract;
pub mod input;
pub mod models;
pub mod parse;
pub mod prompts;
pub mod slides;

pub use error::{Error, Result};
