use thiserror::Error;

#[derive(Error, Debug)]
pub enum MealBotError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Favorite meal not found with id: {0}")]
    MealNotFound(String),

    #[error("Shopping list not found at index: {0}")]
    ShoppingListNotFound(usize),

    #[error("Shopping list {list} has no item at index {item}")]
    ShoppingListItemNotFound { list: usize, item: usize },

    #[error(transparent)]
    Suggestion(#[from] SuggestionError),
}

pub type Result<T> = std::result::Result<T, MealBotError>;

/// How a failed suggestion request is surfaced to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionErrorKind {
    Api,
    Network,
    Parsing,
}

impl SuggestionErrorKind {
    pub fn user_message(&self) -> &'static str {
        match self {
            SuggestionErrorKind::Api => {
                "Error connecting to the meal suggestion service. Please try again."
            }
            SuggestionErrorKind::Network => "Network error. Please check your internet connection.",
            SuggestionErrorKind::Parsing => {
                "Error processing the meal suggestion. Please try again."
            }
        }
    }
}

/// Failures raised around the parsing core: configuration, transport and service replies.
#[derive(Error, Debug)]
pub enum SuggestionError {
    /// Raised by the transport layer wrapping this crate before any request is sent
    #[error("API key is not configured. Please add your API key to the environment.")]
    MissingApiKey,

    #[error("API Error: {code} {message}")]
    Status { code: u16, message: String },

    /// Raised by the transport layer wrapping this crate; nothing here does network I/O
    #[error("Network error: {0}")]
    Transport(String),

    #[error("Unexpected response payload: {0}")]
    Payload(String),
}

impl SuggestionError {
    pub fn kind(&self) -> SuggestionErrorKind {
        match self {
            SuggestionError::MissingApiKey | SuggestionError::Status { .. } => {
                SuggestionErrorKind::Api
            }
            SuggestionError::Transport(_) => SuggestionErrorKind::Network,
            SuggestionError::Payload(_) => SuggestionErrorKind::Parsing,
        }
    }

    /// Text shown to the user. A missing key gets its own setup hint.
    pub fn user_message(&self) -> String {
        match self {
            SuggestionError::MissingApiKey => self.to_string(),
            _ => self.kind().user_message().to_string(),
        }
    }
}
