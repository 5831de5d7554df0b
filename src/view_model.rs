//! Todo View-Model
//!
//! Holds the todo list and the draft text, and turns user actions into
//! backend round-trips. State only changes after the backend confirms.
//! Failures are logged and otherwise swallowed; the UI has no error view.

use std::sync::Arc;

use leptos::prelude::*;
use reactive_stores::Store;
use tokio::sync::Mutex;

use crate::backend::TodoBackend;
use crate::error::BridgeResult;
use crate::models::{SaveSnapshot, Status, TodoItem};

/// View state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    /// Todos in display order
    pub todos: Vec<TodoItem>,
    /// Pending text for a new todo
    pub draft: String,
}

/// Mediates between the rendered list and the backend
pub struct TodoViewModel<B> {
    backend: Arc<B>,
    state: Store<TodoState>,
    /// One backend operation at a time, in the order they were issued
    gate: Arc<Mutex<()>>,
}

impl<B> Clone for TodoViewModel<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            state: self.state,
            gate: Arc::clone(&self.gate),
        }
    }
}

impl<B: TodoBackend + 'static> TodoViewModel<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend: Arc::new(backend),
            state: Store::new(TodoState::default()),
            gate: Arc::new(Mutex::new(())),
        }
    }

    // ========================
    // Reads (for rendering)
    // ========================

    pub fn todos(&self) -> Vec<TodoItem> {
        self.state.todos().get()
    }

    pub fn todos_untracked(&self) -> Vec<TodoItem> {
        self.state.todos().get_untracked()
    }

    pub fn draft(&self) -> String {
        self.state.draft().get()
    }

    pub fn set_draft(&self, text: String) {
        self.state.draft().set(text);
    }

    pub fn active_count(&self) -> usize {
        self.state
            .todos()
            .with(|todos| todos.iter().filter(|t| t.status.is_active()).count())
    }

    // ========================
    // Operations
    // ========================

    /// Populate the list from the backend (run once on mount)
    pub async fn initialize(&self) -> BridgeResult<()> {
        let _turn = self.gate.lock().await;
        let todos = self
            .backend
            .get_todos()
            .await
            .inspect_err(|e| log::error!("[TODOS] Error fetching todos: {}", e))?;
        log::info!("[TODOS] Fetched {} todos", todos.len());
        self.state.todos().set(todos);
        Ok(())
    }

    /// Add the draft as a new active todo. Blank drafts are ignored.
    pub async fn add_todo(&self) -> BridgeResult<()> {
        let label = self.state.draft().with_untracked(|draft| draft.trim().to_string());
        if label.is_empty() {
            return Ok(());
        }

        let _turn = self.gate.lock().await;
        self.backend
            .add_todo(&label)
            .await
            .inspect_err(|e| log::error!("[TODOS] Error adding todo '{}': {}", label, e))?;
        self.state.todos().write().push(TodoItem::active(label));
        self.state.draft().set(String::new());
        Ok(())
    }

    /// Mark every todo with this label completed
    pub async fn complete_todo(&self, label: &str) -> BridgeResult<()> {
        let _turn = self.gate.lock().await;
        self.backend
            .complete_todo(label)
            .await
            .inspect_err(|e| log::error!("[TODOS] Error completing todo '{}': {}", label, e))?;
        self.state
            .todos()
            .write()
            .iter_mut()
            .filter(|todo| todo.item == label)
            .for_each(|todo| todo.status = Status::Completed);
        Ok(())
    }

    /// Send the current list to the backend as a label -> flag mapping
    pub async fn save_todos(&self) -> BridgeResult<()> {
        let _turn = self.gate.lock().await;
        let snapshot = self
            .state
            .todos()
            .with_untracked(|todos| SaveSnapshot::from_todos(todos));
        self.backend
            .save_todos(&snapshot)
            .await
            .inspect_err(|e| log::error!("[TODOS] Failed to save todos: {}", e))?;
        log::info!("[TODOS] Todos saved successfully ({} entries)", snapshot.len());
        Ok(())
    }

    /// Replace the list with the persisted one, unless nothing was persisted
    pub async fn load_todos(&self) -> BridgeResult<()> {
        let _turn = self.gate.lock().await;
        let todos = self
            .backend
            .load_todos()
            .await
            .inspect_err(|e| log::error!("[TODOS] Failed to load todos: {}", e))?;
        if todos.is_empty() {
            log::info!("[TODOS] No todos found.");
            return Ok(());
        }
        log::info!("[TODOS] Loaded {} todos", todos.len());
        self.state.todos().set(todos);
        Ok(())
    }
}
