use thiserror::Error;

/// Errors surfaced while building or validating a chain client profile
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid duration format in {field}: '{value}'")]
    InvalidDurationFormat { field: &'static str, value: String },
    #[error("invalid gas prices: {0}")]
    InvalidGasPrice(String),
    #[error("invalid endpoint: {0}")]
    Endpoint(#[from] url::ParseError),
    #[error("error parsing preset table: {0}")]
    InvalidPreset(#[from] toml::de::Error),
    #[error("unrecognized {field} option: '{value}'")]
    UnrecognizedOption { field: &'static str, value: String },
    #[error("{0}")]
    UnsupportedChain(String),
}

/// Errors from reading or writing profiles on disk
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("error reading or writing file: {0}")]
    FileIO(#[from] std::io::Error),
    #[error("error processing json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("error parsing toml: {0}")]
    TomlDeserialize(#[from] toml::de::Error),
    #[error("error encoding toml: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
    #[error("error processing yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("unsupported profile format: {0}")]
    UnsupportedFormat(String),
}
