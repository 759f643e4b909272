use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyzeError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Request returned status {0}")]
    BadStatus(u16),
}

pub type Result<T> = std::result::Result<T, AnalyzeError>;
