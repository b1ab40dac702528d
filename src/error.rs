use thiserror::Error;

pub type Result<T> = std::result::Result<T, RampartError>;

/// Errors from the outer layers only. Parsing and analysis are total and
/// never construct one of these.
#[derive(Error, Debug)]
pub enum RampartError {
    #[error("Input error: {0}")]
    Input(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Output error: {0}")]
    Output(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl RampartError {
    pub fn exit_code(&self) -> i32 {
        2
    }
}
