//! Tauri Command Wrappers
//!
//! Frontend bindings to backend commands.

mod todo;

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::error::{BridgeError, BridgeResult};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["window", "__TAURI__", "core"])]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

pub use todo::*;

/// Maps become plain objects, which is what Tauri expects for arguments
const ARGS_SERIALIZER: serde_wasm_bindgen::Serializer =
    serde_wasm_bindgen::Serializer::json_compatible();

fn to_args<T: Serialize>(args: &T) -> BridgeResult<JsValue> {
    args.serialize(&ARGS_SERIALIZER)
        .map_err(|e| BridgeError::Serialize(e.to_string()))
}

/// Call a backend command, turning a rejected promise into `BridgeError::Invoke`
async fn call(cmd: &str, args: JsValue) -> BridgeResult<JsValue> {
    invoke(cmd, args).await.map_err(|err| {
        let msg = err.as_string().unwrap_or_else(|| format!("{:?}", err));
        BridgeError::Invoke(msg)
    })
}
