use thiserror::Error;

#[derive(Error, Debug)]
pub enum CrmqlError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid backend URL '{url}': {reason}")]
    InvalidBackendUrl { url: String, reason: String },

    #[error("Backend request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("Backend returned {status} for {method} {url}")]
    Status {
        method: reqwest::Method,
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Could not decode backend response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CrmqlError>;
