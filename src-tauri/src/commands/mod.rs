//! Commands Layer
//!
//! Tauri command handlers that bridge frontend to backend services.

mod todo_cmd;

pub use todo_cmd::*;
