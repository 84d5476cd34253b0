use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no route found: {0}")]
    NoRoute(String),

    #[error("response parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ProviderResult<T> = Result<T, ProviderError>;
