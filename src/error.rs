use thiserror::Error;

#[derive(Error, Debug)]
pub enum TriageError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("invalid category '{0}'")]
    InvalidCategory(String),

    #[error("invalid priority '{0}'")]
    InvalidPriority(String),

    #[error("invalid status '{0}'")]
    InvalidStatus(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("backend error (HTTP {status}): {message}")]
    Backend { status: u16, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, TriageError>;
