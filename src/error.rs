use thiserror::Error;

use crate::domain::error::DomainError;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Snapshot store errors. All fatal; the run is re-invoked on the next
/// scheduled trigger rather than retried.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to read or write snapshot store: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to decode snapshot store: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("snapshot API error: {0}")]
    Api(String),

    #[error("corrupt tag value '{value}' on snapshot {snapshot}: {source}")]
    CorruptTagValue {
        snapshot: String,
        value: String,
        source: DomainError,
    },

    #[error("cluster '{cluster}' not present in snapshot store")]
    UnknownCluster { cluster: String },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("cluster '{cluster}' is not an existing DB cluster")]
    ClusterNotFound { cluster: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
