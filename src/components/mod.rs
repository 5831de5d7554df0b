//! UI Components
//!
//! Leptos components rendering the todo view-model.

mod todo_row;
mod todo_list;
mod new_todo_form;
mod persistence_bar;

pub use todo_row::TodoRow;
pub use todo_list::TodoList;
pub use new_todo_form::NewTodoForm;
pub use persistence_bar::PersistenceBar;
