use thiserror::Error;

#[derive(Debug, Error)]
pub enum NeurorxError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Duplicate drug id in catalog: {0}")]
    DuplicateDrugId(String),

    #[error("Invalid drug record '{id}': {reason}")]
    InvalidRecord { id: String, reason: String },

    #[error("Drug not found: {0}")]
    DrugNotFound(String),

    #[error("Unsupported catalog format: {0}")]
    UnsupportedFormat(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, NeurorxError>;
