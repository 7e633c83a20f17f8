pub mod client;
pub mod edits;
pub mod types;

pub use edits::GeminiEditClient;
