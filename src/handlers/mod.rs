pub mod todo_handlers;
