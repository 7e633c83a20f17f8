//! Flattens a presentation snapshot into the ordered text list used as
//! generation context.

use crate::models::Presentation;

/// Marker emitted for a slide whose snapshot carries no object id.
const UNKNOWN_SLIDE: &str = "unknown";

/// Walk the snapshot slide by slide and collect its text as a flat list.
///
/// Each slide contributes one `Slide number: {id}` marker followed by one
/// trimmed string per text run in its shapes. Runs whose content trims to
/// nothing still contribute an empty string; the list order is the only
/// positional context the model gets, so every run must keep its slot.
pub fn flatten_text(presentation: &Presentation) -> Vec<String> {
    let mut texts = Vec::new();

    for slide in &presentation.slides {
        texts.push(format!(
            "Slide number: {}",
            slide.object_id.as_deref().unwrap_or(UNKNOWN_SLIDE)
        ));

        for element in &slide.page_elements {
            let Some(text) = element.shape.as_ref().and_then(|shape| shape.text.as_ref()) else {
                continue;
            };
            for text_element in &text.text_elements {
                if let Some(content) = text_element
                    .text_run
                    .as_ref()
                    .and_then(|run| run.content.as_deref())
                {
                    texts.push(content.trim().to_string());
                }
            }
        }
    }

    texts
}
