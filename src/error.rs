//! Bridge Errors
//!
//! Failures that can come back from a backend round-trip.

/// Errors from talking to the host backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeError {
    /// The backend rejected the call (message as sent by the host)
    Invoke(String),
    /// Arguments could not be converted for the bridge
    Serialize(String),
    /// The response did not match the expected shape
    Decode(String),
}

impl std::fmt::Display for BridgeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BridgeError::Invoke(msg) => write!(f, "Backend error: {}", msg),
            BridgeError::Serialize(msg) => write!(f, "Serialization error: {}", msg),
            BridgeError::Decode(msg) => write!(f, "Response error: {}", msg),
        }
    }
}

impl std::error::Error for BridgeError {}

/// Common result type for backend calls
pub type BridgeResult<T> = Result<T, BridgeError>;
