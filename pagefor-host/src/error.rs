use thiserror::Error;

/// Result type for host operations.
pub type HostResult<T> = Result<T, HostError>;

#[derive(Debug, Error)]
pub enum HostError {
    #[error("content type error: {0}")]
    ContentType(#[from] pagefor_types::Error),

    #[error("store error: {0}")]
    Store(#[from] pagefor_store::StoreError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid site file: {0}")]
    Site(#[from] toml::de::Error),
}
