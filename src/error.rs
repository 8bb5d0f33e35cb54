use thiserror::Error;

#[derive(Debug, Error)]
pub enum MovieDbError {
    #[error("Unsupported file type: {0} (expected .json or .csv)")]
    UnsupportedFileType(String),

    #[error("Movie {0} already exists!")]
    AlreadyExists(String),

    #[error("Movie {0} doesn't exist in the database!")]
    NotFound(String),

    #[error("Movie {0} not found.")]
    MovieNotFound(String),

    #[error("API is not accessible (status {0})")]
    ApiUnavailable(u16),

    #[error("API returned unusable data: {0}")]
    InvalidApiData(String),

    #[error("No OMDb API key configured, set OMDB_API_KEY or pass --api-key")]
    MissingApiKey,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, MovieDbError>;
