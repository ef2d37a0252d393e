use serde::Deserialize;

use crate::error::SuggestionError;

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    error: Option<ServiceError>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ServiceError {
    code: u16,
    #[serde(default)]
    message: String,
}

/// Pull the first candidate's text out of a generate-content JSON reply
pub fn extract_candidate_text(body: &str) -> Result<String, SuggestionError> {
    let response: GenerateContentResponse = serde_json::from_str(body)
        .map_err(|e| SuggestionError::Payload(format!("invalid JSON: {}", e)))?;

    if let Some(error) = response.error {
        return Err(SuggestionError::Status {
            code: error.code,
            message: error.message,
        });
    }

    response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().next())
        .and_then(|part| part.text)
        .ok_or_else(|| SuggestionError::Payload("response has no candidate text".to_string()))
}
