/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Catalog is empty, no suggestion available")]
    EmptyCatalog,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Whether the caller should treat this as "no suggestion available"
    /// rather than as a fault.
    pub fn is_no_suggestion(&self) -> bool {
        matches!(self, AppError::EmptyCatalog)
    }
}

pub type AppResult<T> = Result<T, AppError>;
