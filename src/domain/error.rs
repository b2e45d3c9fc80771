use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrqError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown translator '{0}'")]
    Engine(String),

    #[error("Translation error: {0}")]
    Api(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),
}
