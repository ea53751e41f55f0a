use thiserror::Error;

/// Errors from decoding outline notifications.
#[derive(Debug, Error)]
pub enum OutlineError {
	/// The notification payload is not a valid outline.
	#[error("malformed outline notification: {0}")]
	Json(#[from] serde_json::Error),
}

/// Result type for outline decoding.
pub type Result<T> = std::result::Result<T, OutlineError>;
