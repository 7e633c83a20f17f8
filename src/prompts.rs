pub const EDIT_REQUEST: &str = include_str!("../data/prompts/edit_request.txt");

/// Replace `{{key}}` placeholders in a template string.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut result = template.to_string();
    for (key, value) in vars {
        result = result.replace(&format!("{{{{{}}}}}", key), value);
    }
    result
}

/// Assemble the full generation instruction for one run.
///
/// The user prompt goes in verbatim; the flattened slide text is joined one
/// fragment per line so list order survives into the prompt.
pub fn edit_request(user_prompt: &str, date: &str, slide_text: &[String]) -> String {
    render(
        EDIT_REQUEST,
        &[
            ("user_prompt", user_prompt),
            ("date", date),
            ("slide_text", &slide_text.join("\n")),
        ],
    )
}
