use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to read config file at {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file at {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to initialize logging: {0}")]
    LoggingInit(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
    #[error("failed to resolve storage paths: {details}")]
    StoragePathResolution { details: String },
    #[error("failed to create storage directory at {path}: {source}")]
    StorageDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read session token at {path}: {source}")]
    TokenRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write session token at {path}: {source}")]
    TokenWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to remove session token at {path}: {source}")]
    TokenRemove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to build http client: {details}")]
    HttpClientInit { details: String },
    #[error(transparent)]
    Other(anyhow::Error),
}
