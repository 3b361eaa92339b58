use thiserror::Error;

#[derive(Error, Debug)]
pub enum AgriError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Reqwest(Box<reqwest::Error>),

    #[error("Request failed with status code {status}")]
    HttpStatus { status: u16, body: String },

    #[error("Failed to start task runtime: {0}")]
    Runtime(String),

    #[error("Logging setup failed: {0}")]
    Logging(String),

    #[error("AgriError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for AgriError {
    fn from(error: std::io::Error) -> Self {
        AgriError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for AgriError {
    fn from(error: reqwest::Error) -> Self {
        AgriError::Reqwest(Box::new(error))
    }
}
