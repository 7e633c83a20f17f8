//! Cleans up a model completion and parses it into a batchUpdate edit list.

use crate::models::BatchUpdateRequest;

/// Edit operations parsed from a completion.
///
/// The value is kept as raw JSON: operation shapes belong to the Slides API
/// and server-side rejection is the only structural check.
#[derive(Debug, Clone)]
pub struct EditList(serde_json::Value);

impl EditList {
    pub fn into_batch_update(self) -> BatchUpdateRequest {
        BatchUpdateRequest { requests: self.0 }
    }

    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }
}

/// Outcome of parsing a completion, with failure as an inspectable value.
#[derive(Debug)]
pub enum ParsedEdits {
    Parsed(EditList),
    Invalid {
        raw: String,
        error: serde_json::Error,
    },
}

/// Remove every triple-backtick fence marker, along with any language tag
/// glued to it, then trim surrounding whitespace.
///
/// Models regularly wrap the edit list in ```json fences despite being told
/// not to. Stripping is unconditional and idempotent.
pub fn strip_code_fences(completion: &str) -> String {
    let mut stripped = String::with_capacity(completion.len());
    let mut rest = completion;

    while let Some(index) = rest.find("```") {
        stripped.push_str(&rest[..index]);
        rest = &rest[index + 3..];

        let tag_len: usize = rest
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric())
            .map(|c| c.len_utf8())
            .sum();
        rest = &rest[tag_len..];
    }
    stripped.push_str(rest);

    stripped.trim().to_string()
}

/// Parse a completion into an edit list after fence cleanup.
pub fn parse_edit_list(completion: &str) -> ParsedEdits {
    let cleaned = strip_code_fences(completion);

    match serde_json::from_str(&cleaned) {
        Ok(value) => ParsedEdits::Parsed(EditList(value)),
        Err(error) => ParsedEdits::Invalid {
            raw: cleaned,
            error,
        },
    }
}
