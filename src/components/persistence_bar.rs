//! Persistence Bar Component
//!
//! Save / Load buttons for the persisted list.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_todos;

#[component]
pub fn PersistenceBar() -> impl IntoView {
    let vm = use_todos();
    let load_vm = vm.clone();

    view! {
        <div class="container-2">
            <button
                class="button-style-2"
                on:click=move |_| {
                    let vm = vm.clone();
                    spawn_local(async move {
                        let _ = vm.save_todos().await;
                    });
                }
            >
                "Save Todos"
            </button>
            <button
                class="button-style-2"
                on:click=move |_| {
                    let vm = load_vm.clone();
                    spawn_local(async move {
                        let _ = vm.load_todos().await;
                    });
                }
            >
                "Load Todos"
            </button>
        </div>
    }
}
