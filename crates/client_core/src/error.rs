use thiserror::Error;

/// Why a retrieval failed. Only logged; callers see [`shared::error::FetchFailed`].
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("transport error: {0:#}")]
    Transport(anyhow::Error),
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    #[error("malformed todo list payload: {0}")]
    Parse(#[from] serde_json::Error),
}
