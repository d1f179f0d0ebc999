use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("bad size: {0}")]
    BadSize(String),
    #[error("bounding box requested for a cluster without points")]
    EmptyCluster,
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TrackerError>;
