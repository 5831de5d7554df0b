//! Repository Layer
//!
//! Data access abstractions and implementations.

mod traits;
mod todo_repo;
mod todo_file;


pub use traits::TodoRepository;
pub use todo_repo::InMemoryTodoRepository;
pub use todo_file::TodoFile;
