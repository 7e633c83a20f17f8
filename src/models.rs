//! Data models and structures
//!
//! Defines the presentation snapshot read from the Slides REST API, the
//! batchUpdate envelope sent back to it, and runtime configuration.

use serde::{Deserialize, Serialize};

/// Full presentation snapshot as returned by `presentations.get`.
///
/// Only the fields the flattener and copy-naming need are modeled; the API
/// returns far more and serde drops the rest.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Presentation {
    pub presentation_id: Option<String>,
    pub title: Option<String>,
    #[serde(default)]
    pub slides: Vec<Slide>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    pub object_id: Option<String>,
    #[serde(default)]
    pub page_elements: Vec<PageElement>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageElement {
    pub object_id: Option<String>,
    pub shape: Option<Shape>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shape {
    pub text: Option<TextContent>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextContent {
    #[serde(default)]
    pub text_elements: Vec<TextElement>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextElement {
    pub text_run: Option<TextRun>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextRun {
    pub content: Option<String>,
}

/// Envelope for `presentations.batchUpdate`.
///
/// The `requests` value is whatever JSON the model produced; its shape is
/// owned by the Slides API and the API's rejection is the only validation.
#[derive(Debug, Clone, Serialize)]
pub struct BatchUpdateRequest {
    pub requests: serde_json::Value,
}

/// Response body of the Drive `files.copy` endpoint.
#[derive(Debug, Deserialize)]
pub struct CopiedFile {
    pub id: String,
    pub name: Option<String>,
}

// Configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub google_access_token: String,
    pub output_dir: String,
}

const PLACEHOLDER_API_KEY: &str = "YOUR_GEMINI_API_KEY_HERE";

impl Config {
    pub fn from_env() -> crate::Result<Self> {
        dotenvy::dotenv().ok();

        let gemini_api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| crate::Error::Config("GEMINI_API_KEY not set".to_string()))?;
        if gemini_api_key.is_empty() || gemini_api_key == PLACEHOLDER_API_KEY {
            return Err(crate::Error::Config(
                "GEMINI_API_KEY is still the placeholder value".to_string(),
            ));
        }

        Ok(Self {
            gemini_api_key,
            gemini_model: std::env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| "gemini-2.0-flash".to_string()),
            google_access_token: std::env::var("GOOGLE_ACCESS_TOKEN")
                .map_err(|_| crate::Error::Config("GOOGLE_ACCESS_TOKEN not set".to_string()))?,
            output_dir: std::env::var("SLIDEDRAFT_OUTPUT_DIR")
                .unwrap_or_else(|_| "output".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presentation_deserializes_slides_wire_format() {
        let json = r#"{
            "presentationId": "abc123",
            "title": "Q3 Template",
            "slides": [{
                "objectId": "p1",
                "pageElements": [{
                    "objectId": "el1",
                    "shape": {
                        "text": {
                            "textElements": [
                                { "textRun": { "content": "Hello\n" } },
                                { "paragraphMarker": {} }
                            ]
                        }
                    }
                }]
            }]
        }"#;

        let presentation: Presentation = serde_json::from_str(json).unwrap();
        assert_eq!(presentation.title.as_deref(), Some("Q3 Template"));
        assert_eq!(presentation.slides.len(), 1);

        let slide = &presentation.slides[0];
        assert_eq!(slide.object_id.as_deref(), Some("p1"));

        let runs: Vec<_> = slide.page_elements[0]
            .shape
            .as_ref()
            .unwrap()
            .text
            .as_ref()
            .unwrap()
            .text_elements
            .iter()
            .filter_map(|e| e.text_run.as_ref())
            .collect();
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].content.as_deref(), Some("Hello\n"));
    }

    #[test]
    fn test_presentation_tolerates_missing_fields() {
        let presentation: Presentation = serde_json::from_str("{}").unwrap();
        assert!(presentation.slides.is_empty());
        assert!(presentation.title.is_none());

        let slide: Slide = serde_json::from_str(r#"{"objectId": "p9"}"#).unwrap();
        assert!(slide.page_elements.is_empty());
    }

    #[test]
    fn test_batch_update_request_serializes_requests_field() {
        let request = BatchUpdateRequest {
            requests: serde_json::json!([{ "replaceAllText": { "replaceText": "Acme" } }]),
        };

        let json = serde_json::to_string(&request).unwrap();
        assert!(json.starts_with("{\"requests\":["));
        assert!(json.contains("replaceAllText"));
    }
}
