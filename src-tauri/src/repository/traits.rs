//! Repository Layer - Core Traits
//!
//! Defines the abstract interface for the live todo list.

use async_trait::async_trait;
use crate::domain::{StoreResult, TodoItem, TodoMap};

/// Live, ordered todo list shared by all commands
///
/// Todos are addressed by label; duplicate labels are allowed.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// All todos in insertion order
    async fn list(&self) -> StoreResult<Vec<TodoItem>>;

    /// Append a new active todo
    async fn add(&self, item: String) -> StoreResult<()>;

    /// Mark every todo with this label completed
    async fn complete(&self, item: &str) -> StoreResult<()>;

    /// Replace the whole list with the contents of a mapping
    async fn replace_all(&self, todos: &TodoMap) -> StoreResult<()>;
}
