//! Domain Layer - Store Errors

/// Common result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors from the todo store and its save file
#[derive(Debug)]
pub enum StoreError {
    /// No todo carries this label
    NotFound(String),
    /// Reading or writing the save file failed
    Io(std::io::Error),
    /// The save file is not a label -> flag JSON object
    Format(serde_json::Error),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::NotFound(item) => write!(f, "Todo item '{}' not found", item),
            StoreError::Io(err) => write!(f, "Failed to access todo file: {}", err),
            StoreError::Format(err) => write!(f, "Invalid todo file: {}", err),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::NotFound(_) => None,
            StoreError::Io(err) => Some(err),
            StoreError::Format(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io(err)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Format(err)
    }
}
