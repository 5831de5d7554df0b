//! Application Context
//!
//! The view-model is shared with every component via Leptos context.

use leptos::prelude::*;

use crate::backend::TauriBackend;
use crate::view_model::TodoViewModel;

/// View-model wired to the Tauri bridge
pub type AppViewModel = TodoViewModel<TauriBackend>;

/// Get the view-model from context
pub fn use_todos() -> AppViewModel {
    expect_context::<AppViewModel>()
}
