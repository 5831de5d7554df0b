//! Todo Bridge Frontend App
//!
//! Root component: builds the view-model, shares it, fetches once on mount.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::backend::TauriBackend;
use crate::components::{NewTodoForm, PersistenceBar, TodoList};
use crate::view_model::TodoViewModel;

#[component]
pub fn App() -> impl IntoView {
    let vm = TodoViewModel::new(TauriBackend);

    // Provide context to all children
    provide_context(vm.clone());

    // Fetch todos on mount
    let init_vm = vm.clone();
    Effect::new(move |_| {
        let vm = init_vm.clone();
        spawn_local(async move {
            let _ = vm.initialize().await;
        });
    });

    view! {
        <div class="container-1">
            <h1>"Todo List"</h1>

            <TodoList />

            <NewTodoForm />
            <br />

            <PersistenceBar />

            <p class="item-count">
                {move || format!("{} items, {} active", vm.todos().len(), vm.active_count())}
            </p>
        </div>
    }
}
