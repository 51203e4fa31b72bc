use thiserror::Error;

/// The only failure surfaced to callers of a fetch.
///
/// Network errors, non-success statuses and undecodable bodies all collapse
/// into this one signal; no status code or message is carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("failed to fetch todo list")]
pub struct FetchFailed;
