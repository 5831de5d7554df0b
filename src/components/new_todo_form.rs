//! New Todo Form Component
//!
//! Text input bound to the draft plus the Add button.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_todos;

/// Form for adding a todo (button or Enter)
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let vm = use_todos();

    let submit_vm = vm.clone();
    let add_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let vm = submit_vm.clone();
        spawn_local(async move {
            let _ = vm.add_todo().await;
        });
    };

    let draft_vm = vm.clone();

    view! {
        <form class="new-todo-form" on:submit=add_todo>
            <input
                class="search-style"
                type="text"
                placeholder="Add a new todo"
                prop:value=move || draft_vm.draft()
                on:input=move |ev| vm.set_draft(event_target_value(&ev))
            />
            <button class="button-style-1" type="submit">"Add Todo"</button>
        </form>
    }
}
