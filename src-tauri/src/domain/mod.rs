//! Domain Layer
//!
//! Todo entities and the store error type.
//! This layer has NO external dependencies (except serde for serialization).

mod error;
mod todo;

pub use error::{StoreError, StoreResult};
pub use todo::{TodoItem, TodoMap};
