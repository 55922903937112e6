pub mod queries;
pub mod types;

pub use queries::TodoStore;
pub use types::{Todo, TodoDraft, TodoForm};
