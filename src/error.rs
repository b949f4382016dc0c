//! Sync Errors
//!
//! Failures that can happen between a category change and the item list update.

/// Common result type for sync operations
pub type SyncResult<T> = Result<T, SyncError>;

/// Why an item list update did not happen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncError {
    /// Items selector not present in the page
    MissingElement(String),
    /// Request could not be sent or body could not be read
    Network(String),
    /// Server answered with a non-2xx status
    Status(u16),
    /// Body is not a JSON array of `{id, text}`
    Decode(String),
    /// Browser rejected a DOM mutation
    Dom(String),
}

impl std::fmt::Display for SyncError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SyncError::MissingElement(id) => write!(f, "Missing element: #{}", id),
            SyncError::Network(msg) => write!(f, "Network error: {}", msg),
            SyncError::Status(code) => write!(f, "Unexpected HTTP status: {}", code),
            SyncError::Decode(msg) => write!(f, "Invalid item payload: {}", msg),
            SyncError::Dom(msg) => write!(f, "DOM error: {}", msg),
        }
    }
}

impl std::error::Error for SyncError {}

impl From<serde_json::Error> for SyncError {
    fn from(err: serde_json::Error) -> Self {
        SyncError::Decode(err.to_string())
    }
}
