//! Todo List Component
//!
//! Renders the view-model's todos in order.

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::context::use_todos;
use crate::models::TodoItem;

#[component]
pub fn TodoList() -> impl IntoView {
    let vm = use_todos();
    let rows = move || vm.todos().into_iter().enumerate().collect::<Vec<_>>();

    view! {
        <ul class="list-style">
            <For
                each=rows
                // Labels are not unique, so position is part of the key
                key=|(index, todo)| (*index, todo.item.clone(), todo.status.is_active())
                children=move |(_, todo): (usize, TodoItem)| {
                    view! { <TodoRow todo=todo /> }
                }
            />
        </ul>
    }
}
