use slidedraft::{
    ai::MockGenerationClient,
    app::{App, AppServices},
    error::Error,
    input,
    models::{PageElement, Presentation, Shape, Slide, TextContent, TextElement, TextRun},
    slides::MockSlidesClient,
};
use std::fs;
use std::io::Cursor;
use std::path::PathBuf;

const TEMPLATE_ID: &str = "template-1";

fn single_run_template(content: &str) -> Presentation {
    Presentation {
        presentation_id: Some(TEMPLATE_ID.to_string()),
        title: Some("Shell HLD".to_string()),
        slides: vec![Slide {
            object_id: Some("p1".to_string()),
            page_elements: vec![PageElement {
                object_id: Some("el1".to_string()),
                shape: Some(Shape {
                    text: Some(TextContent {
                        text_elements: vec![TextElement {
                            text_run: Some(TextRun {
                                content: Some(content.to_string()),
                            }),
                        }],
                    }),
                }),
            }],
        }],
    }
}

fn setup_output_dir() -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let output_dir = dir.path().join("output");
    fs::create_dir_all(&output_dir).unwrap();
    (dir, output_dir)
}

/// Scenario A: one slide with one run "Hello"; the model suggests one
/// replaceAllText edit; exactly that edit reaches the write service.
#[tokio::test]
async fn test_full_run_applies_single_replace_edit() {
    let (_dir, output_dir) = setup_output_dir();

    let edits = r#"[{"replaceAllText":{"containsText":{"text":"Hello"},"replaceText":"Acme"}}]"#;
    let generation = MockGenerationClient::new().with_completion_response(edits.to_string());
    let slides =
        MockSlidesClient::new().with_presentation(TEMPLATE_ID.to_string(), single_run_template("Hello"));
    let slides_probe = slides.clone();

    let app = App::with_services(
        AppServices {
            generation: Box::new(generation),
            slides: Box::new(slides),
        },
        output_dir,
    );

    let copy = app.run(TEMPLATE_ID, "rename to Acme").await.unwrap();
    assert!(copy.url.contains(&copy.presentation_id));

    let applied = slides_probe.get_applied_updates();
    assert_eq!(applied.len(), 1);
    assert_eq!(applied[0].0, copy.presentation_id);

    let expected: serde_json::Value = serde_json::from_str(edits).unwrap();
    assert_eq!(applied[0].1, expected);
}

/// A fenced completion applies identically to a bare one.
#[tokio::test]
async fn test_full_run_accepts_fenced_completion() {
    let (_dir, output_dir) = setup_output_dir();

    let edits = r#"[{"replaceAllText":{"containsText":{"text":"Hello"},"replaceText":"Acme"}}]"#;
    let generation = MockGenerationClient::new()
        .with_completion_response(format!("```json\n{}\n```", edits));
    let slides =
        MockSlidesClient::new().with_presentation(TEMPLATE_ID.to_string(), single_run_template("Hello"));
    let slides_probe = slides.clone();

    let app = App::with_services(
        AppServices {
            generation: Box::new(generation),
            slides: Box::new(slides),
        },
        output_dir,
    );

    app.run(TEMPLATE_ID, "rename to Acme").await.unwrap();

    let expected: serde_json::Value = serde_json::from_str(edits).unwrap();
    assert_eq!(slides_probe.get_applied_updates()[0].1, expected);
}

/// Scenario B: the generation service fails; the write service is never
/// invoked and the copy made earlier stays orphaned.
#[tokio::test]
async fn test_generation_failure_aborts_before_write() {
    let (_dir, output_dir) = setup_output_dir();

    let generation =
        MockGenerationClient::new().with_error("Gemini API error (status 500)".to_string());
    let slides =
        MockSlidesClient::new().with_presentation(TEMPLATE_ID.to_string(), single_run_template("Hello"));
    let slides_probe = slides.clone();

    let app = App::with_services(
        AppServices {
            generation: Box::new(generation),
            slides: Box::new(slides),
        },
        output_dir,
    );

    let err = app.run(TEMPLATE_ID, "rename to Acme").await.unwrap_err();
    assert!(matches!(err, Error::Generation(_)));
    assert_eq!(slides_probe.get_batch_update_count(), 0);
    assert_eq!(slides_probe.get_copies().len(), 1);
}

/// A completion that is not JSON must never reach the write service.
#[tokio::test]
async fn test_malformed_completion_aborts_before_write() {
    let (_dir, output_dir) = setup_output_dir();

    let generation = MockGenerationClient::new()
        .with_completion_response("```\nHere are your slides!\n```".to_string());
    let slides =
        MockSlidesClient::new().with_presentation(TEMPLATE_ID.to_string(), single_run_template("Hello"));
    let slides_probe = slides.clone();

    let app = App::with_services(
        AppServices {
            generation: Box::new(generation),
            slides: Box::new(slides),
        },
        output_dir,
    );

    let err = app.run(TEMPLATE_ID, "rename to Acme").await.unwrap_err();
    match err {
        Error::MalformedEditList { raw, .. } => assert_eq!(raw, "Here are your slides!"),
        other => panic!("expected MalformedEditList, got {:?}", other),
    }
    assert_eq!(slides_probe.get_batch_update_count(), 0);
}

/// Scenario C: cancelled input collection happens before any service is
/// touched, so nothing is called at all.
#[tokio::test]
async fn test_cancelled_input_makes_no_service_calls() {
    let generation = MockGenerationClient::new();
    let slides = MockSlidesClient::new();

    let mut stdin = Cursor::new("\n");
    let prompt = input::collect_prompt(&mut stdin).unwrap();
    assert_eq!(prompt, None);

    // The gate in main returns before constructing or invoking the app.
    if prompt.is_none() {
        assert_eq!(generation.get_call_count(), 0);
        assert_eq!(slides.get_batch_update_count(), 0);
        assert!(slides.get_copies().is_empty());
        return;
    }
    unreachable!("empty input must cancel the run");
}

/// The prompt the generation service receives carries the user text, the
/// current month/year, and the flattened template text in order.
#[tokio::test]
async fn test_prompt_carries_user_text_date_and_flattened_text() {
    let (_dir, output_dir) = setup_output_dir();

    let generation = MockGenerationClient::new();
    let generation_probe = generation.clone();
    let slides =
        MockSlidesClient::new().with_presentation(TEMPLATE_ID.to_string(), single_run_template("Hello"));

    let app = App::with_services(
        AppServices {
            generation: Box::new(generation),
            slides: Box::new(slides),
        },
        output_dir,
    );

    app.run(TEMPLATE_ID, "a deck about caching layers")
        .await
        .unwrap();

    let prompts = generation_probe.get_prompts();
    assert_eq!(prompts.len(), 1);
    let prompt = &prompts[0];

    assert!(prompt.contains("a deck about caching layers"));
    assert!(prompt.contains("Slide number: p1\nHello"));

    let date = chrono::Local::now().format("%m/%Y").to_string();
    assert!(prompt.contains(&date));
}
