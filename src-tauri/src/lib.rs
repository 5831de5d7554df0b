//! Todo Bridge Backend
//!
//! Layered architecture:
//! - domain: Todo entities and errors
//! - repository: Live todo list and the JSON save file
//! - commands: Tauri command handlers

use tauri::Manager;

mod domain;
mod repository;
mod commands;

use domain::{StoreResult, TodoMap};
use repository::{InMemoryTodoRepository, TodoFile, TodoRepository};

/// Save file name inside the app data directory
const TODO_FILE_NAME: &str = "todos.json";

/// Application state shared across commands
pub struct AppState {
    pub todos: InMemoryTodoRepository,
    pub todo_file: TodoFile,
}

impl AppState {
    /// Write the mapping to disk, then adopt it as the live list.
    /// A failed write leaves the live list untouched.
    pub async fn save(&self, todos: &TodoMap) -> StoreResult<()> {
        self.todo_file.save(todos).await?;
        self.todos.replace_all(todos).await
    }
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .setup(|app| {
            let app_handle = app.handle().clone();

            // Initialize logging
            rolling_logger::init_logger(app_handle.path().app_log_dir()?, "TodoBridge")?;

            let todo_path = app_handle.path().app_data_dir()?.join(TODO_FILE_NAME);
            let _ = rolling_logger::info(&format!("App setup, save file at {}", todo_path.display()));

            app.manage(AppState {
                todos: InMemoryTodoRepository::new(),
                todo_file: TodoFile::new(todo_path),
            });

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::get_todos,
            commands::add_todo,
            commands::complete_todo,
            commands::save_todos,
            commands::load_todos,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TodoItem;

    #[tokio::test]
    async fn test_save_adopts_mapping() {
        let dir = tempfile::tempdir().unwrap();
        let state = AppState {
            todos: InMemoryTodoRepository::new(),
            todo_file: TodoFile::new(dir.path().join(TODO_FILE_NAME)),
        };
        let mut map = TodoMap::new();
        map.insert("buy milk".to_string(), false);

        state.save(&map).await.expect("Save failed");

        assert_eq!(
            state.todos.list().await.unwrap(),
            vec![TodoItem { item: "buy milk".to_string(), completed: false }]
        );
        assert_eq!(state.todo_file.load().await.unwrap(), Some(map));
    }

    #[tokio::test]
    async fn test_failed_write_keeps_live_list() {
        let dir = tempfile::tempdir().unwrap();
        // Parent "directory" is a plain file, so the write cannot succeed
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();
        let state = AppState {
            todos: InMemoryTodoRepository::new(),
            todo_file: TodoFile::new(blocker.join(TODO_FILE_NAME)),
        };
        state.todos.add("keep me".to_string()).await.unwrap();
        let mut map = TodoMap::new();
        map.insert("replacement".to_string(), true);

        assert!(state.save(&map).await.is_err());

        assert_eq!(
            state.todos.list().await.unwrap(),
            vec![TodoItem::new("keep me".to_string())]
        );
    }
}
