//! Todo Save File
//!
//! Persists a `TodoMap` as a JSON object in the app data directory.

use std::path::{Path, PathBuf};

use crate::domain::{StoreResult, TodoMap};

pub struct TodoFile {
    path: PathBuf,
}

impl TodoFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the mapping, creating the parent directory if needed
    pub async fn save(&self, todos: &TodoMap) -> StoreResult<()> {
        if let Some(dir) = self.path.parent() {
            tokio::fs::create_dir_all(dir).await?;
        }
        let json = serde_json::to_string(todos)?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }

    /// Read the mapping; `None` when nothing has been saved yet
    pub async fn load(&self) -> StoreResult<Option<TodoMap>> {
        if !tokio::fs::try_exists(&self.path).await? {
            return Ok(None);
        }
        let json = tokio::fs::read_to_string(&self.path).await?;
        Ok(Some(serde_json::from_str(&json)?))
    }
}
