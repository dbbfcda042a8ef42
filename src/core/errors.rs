use thiserror::Error;

#[derive(Error, Debug)]
pub enum CardboxError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Request error: {0}")]
    Reqwest(Box<reqwest::Error>),

    // Human-readable message taken from the server's error body.
    #[error("{0}")]
    Api(String),

    #[error("CardboxError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for CardboxError {
    fn from(error: std::io::Error) -> Self {
        CardboxError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for CardboxError {
    fn from(error: reqwest::Error) -> Self {
        CardboxError::Reqwest(Box::new(error))
    }
}
