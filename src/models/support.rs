use serde::{Deserialize, Serialize};

pub const MIN_INTENSITY: u8 = 1;
pub const MAX_INTENSITY: u8 = 10;

/// How someone is feeling, as reported before asking for support
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmotionalState {
    intensity: u8,
    pub description: String,
}

impl EmotionalState {
    /// Intensity is clamped to 1..=10
    pub fn new(intensity: u8, description: impl Into<String>) -> Self {
        Self {
            intensity: intensity.clamp(MIN_INTENSITY, MAX_INTENSITY),
            description: description.into(),
        }
    }

    pub fn intensity(&self) -> u8 {
        self.intensity
    }

    pub fn label(&self) -> &'static str {
        match self.intensity {
            0..=2 => "Calm",
            3..=4 => "Mild Distress",
            5..=6 => "Moderate Distress",
            7..=8 => "High Distress",
            _ => "Crisis",
        }
    }

    pub fn prompt(&self) -> String {
        format!(
            "As an empathetic AI counselor, provide a supportive response to someone experiencing the following emotional state:\n\
             Intensity Level: {}/10 ({})\n\
             Description: {}\n\
             \n\
             Please provide:\n\
             1. A validating and empathetic response\n\
             2. 2-3 specific coping techniques they can try right now\n\
             3. Gentle next steps for moving forward\n\
             \n\
             Format the response in a structured way that's easy to read.",
            self.intensity,
            self.label(),
            self.description
        )
    }
}

/// A supportive reply split into its three paragraphs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportResponse {
    pub message: String,
    pub techniques: Vec<String>,
    pub next_steps: Vec<String>,
}
