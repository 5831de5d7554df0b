//! In-Memory Todo Repository

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::traits::TodoRepository;
use crate::domain::{StoreError, StoreResult, TodoItem, TodoMap};

#[derive(Default)]
pub struct InMemoryTodoRepository {
    todos: Mutex<Vec<TodoItem>>,
}

impl InMemoryTodoRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn list(&self) -> StoreResult<Vec<TodoItem>> {
        Ok(self.todos.lock().await.clone())
    }

    async fn add(&self, item: String) -> StoreResult<()> {
        self.todos.lock().await.push(TodoItem::new(item));
        Ok(())
    }

    async fn complete(&self, item: &str) -> StoreResult<()> {
        let mut todos = self.todos.lock().await;
        let mut found = false;
        for todo in todos.iter_mut().filter(|t| t.item == item) {
            todo.completed = false;
            found = true;
        }
        if found {
            Ok(())
        } else {
            Err(StoreError::NotFound(item.to_string()))
        }
    }

    async fn replace_all(&self, todos: &TodoMap) -> StoreResult<()> {
        *self.todos.lock().await = todos.to_items();
        Ok(())
    }
}
