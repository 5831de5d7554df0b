//! Todo Commands
//!
//! Frontend bindings for the five todo backend commands.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::{call, to_args};
use crate::error::{BridgeError, BridgeResult};
use crate::models::{SaveSnapshot, TodoItem};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct ItemArgs<'a> {
    item: &'a str,
}

#[derive(Serialize)]
struct SaveTodosArgs<'a> {
    todos: &'a SaveSnapshot,
}

// ========================
// Commands
// ========================

pub async fn get_todos() -> BridgeResult<Vec<TodoItem>> {
    let result = call("get_todos", JsValue::NULL).await?;
    serde_wasm_bindgen::from_value(result).map_err(|e| BridgeError::Decode(e.to_string()))
}

pub async fn add_todo(item: &str) -> BridgeResult<()> {
    let js_args = to_args(&ItemArgs { item })?;
    call("add_todo", js_args).await?;
    Ok(())
}

pub async fn complete_todo(item: &str) -> BridgeResult<()> {
    let js_args = to_args(&ItemArgs { item })?;
    call("complete_todo", js_args).await?;
    Ok(())
}

pub async fn save_todos(todos: &SaveSnapshot) -> BridgeResult<()> {
    let js_args = to_args(&SaveTodosArgs { todos })?;
    call("save_todos", js_args).await?;
    Ok(())
}

pub async fn load_todos() -> BridgeResult<Vec<TodoItem>> {
    let result = call("load_todos", JsValue::NULL).await?;
    serde_wasm_bindgen::from_value(result).map_err(|e| BridgeError::Decode(e.to_string()))
}
