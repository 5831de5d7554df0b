//! Tauri Commands for Todos
//!
//! Exposes the todo list and its save file to the frontend via Tauri IPC.
//! Errors are logged here and returned to the frontend as strings.

use tauri::State;

use crate::domain::{StoreResult, TodoItem, TodoMap};
use crate::repository::TodoRepository;
use crate::AppState;

fn to_ipc<T>(action: &str, result: StoreResult<T>) -> Result<T, String> {
    result.map_err(|e| {
        let _ = rolling_logger::error(&format!("[todos] {} failed: {}", action, e));
        e.to_string()
    })
}

/// List all todos
#[tauri::command]
pub async fn get_todos(state: State<'_, AppState>) -> Result<Vec<TodoItem>, String> {
    to_ipc("get_todos", state.todos.list().await)
}

/// Add an active todo
#[tauri::command]
pub async fn add_todo(state: State<'_, AppState>, item: String) -> Result<(), String> {
    log::info!("[todos] add '{}'", item);
    to_ipc("add_todo", state.todos.add(item).await)
}

/// Mark every todo with this label completed
#[tauri::command]
pub async fn complete_todo(state: State<'_, AppState>, item: String) -> Result<(), String> {
    log::info!("[todos] complete '{}'", item);
    to_ipc("complete_todo", state.todos.complete(&item).await)
}

/// Write the frontend's mapping to the save file and adopt it as the live list
#[tauri::command]
pub async fn save_todos(state: State<'_, AppState>, todos: TodoMap) -> Result<(), String> {
    to_ipc("save_todos", state.save(&todos).await)?;
    log::info!(
        "[todos] saved {} todos to {}",
        todos.len(),
        state.todo_file.path().display()
    );
    Ok(())
}

/// Read the save file; an absent file yields an empty list
#[tauri::command]
pub async fn load_todos(state: State<'_, AppState>) -> Result<Vec<TodoItem>, String> {
    let Some(todos) = to_ipc("load_todos", state.todo_file.load().await)? else {
        log::info!("[todos] no save file at {}", state.todo_file.path().display());
        return Ok(Vec::new());
    };
    to_ipc("load_todos", state.todos.replace_all(&todos).await)?;
    log::info!("[todos] loaded {} todos", todos.len());
    Ok(todos.to_items())
}
