//! Backend Seam
//!
//! The five operations the view-model needs from the host, behind a trait
//! so the view-model can run against the Tauri bridge or an in-memory fake.

use async_trait::async_trait;

use crate::commands;
use crate::error::BridgeResult;
use crate::models::{SaveSnapshot, TodoItem};

/// Todo operations offered by the host application
///
/// Futures are `?Send`: in the browser everything runs on one thread.
#[async_trait(?Send)]
pub trait TodoBackend: Send + Sync {
    /// Fetch the current list
    async fn get_todos(&self) -> BridgeResult<Vec<TodoItem>>;

    /// Add an item with the given label
    async fn add_todo(&self, item: &str) -> BridgeResult<()>;

    /// Mark the item with the given label completed
    async fn complete_todo(&self, item: &str) -> BridgeResult<()>;

    /// Persist a label -> flag mapping
    async fn save_todos(&self, todos: &SaveSnapshot) -> BridgeResult<()>;

    /// Load the persisted list
    async fn load_todos(&self) -> BridgeResult<Vec<TodoItem>>;
}

/// Backend reached through `window.__TAURI__.core.invoke`
#[derive(Debug, Clone, Copy, Default)]
pub struct TauriBackend;

#[async_trait(?Send)]
impl TodoBackend for TauriBackend {
    async fn get_todos(&self) -> BridgeResult<Vec<TodoItem>> {
        commands::get_todos().await
    }

    async fn add_todo(&self, item: &str) -> BridgeResult<()> {
        commands::add_todo(item).await
    }

    async fn complete_todo(&self, item: &str) -> BridgeResult<()> {
        commands::complete_todo(item).await
    }

    async fn save_todos(&self, todos: &SaveSnapshot) -> BridgeResult<()> {
        commands::save_todos(todos).await
    }

    async fn load_todos(&self) -> BridgeResult<Vec<TodoItem>> {
        commands::load_todos().await
    }
}
