//! Todo Row Component
//!
//! A single todo with its status and, while active, a Complete button.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_todos;
use crate::models::TodoItem;

/// One row in the todo list
#[component]
pub fn TodoRow(todo: TodoItem) -> impl IntoView {
    let vm = use_todos();
    let status = todo.status;
    let label = todo.item.clone();
    let row_class = if status.is_active() { "todo-row" } else { "todo-row completed" };

    view! {
        <li class=row_class>
            {format!("{} - {} ", todo.item, status.label())}
            {status.is_active().then(move || view! {
                <button
                    class="button-style-3"
                    on:click=move |_| {
                        let vm = vm.clone();
                        let label = label.clone();
                        spawn_local(async move {
                            let _ = vm.complete_todo(&label).await;
                        });
                    }
                >
                    "Complete"
                </button>
            })}
        </li>
    }
}
