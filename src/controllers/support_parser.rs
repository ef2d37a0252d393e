use tracing::debug;

use crate::models::SupportResponse;

/// Split a supportive reply into message, techniques and next steps.
/// Paragraphs are separated by a blank line; missing ones come back empty.
pub fn parse_support_response(raw: &str) -> SupportResponse {
    let normalized = raw.replace("\r\n", "\n");
    let mut paragraphs = normalized.split("\n\n");

    let message = paragraphs.next().unwrap_or_default().to_string();
    let techniques = non_blank_lines(paragraphs.next());
    let next_steps = non_blank_lines(paragraphs.next());

    debug!(
        techniques = techniques.len(),
        next_steps = next_steps.len(),
        "parsed support response"
    );

    SupportResponse {
        message,
        techniques,
        next_steps,
    }
}

fn non_blank_lines(paragraph: Option<&str>) -> Vec<String> {
    paragraph
        .map(|text| {
            text.lines()
                .filter(|line| !line.trim().is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
