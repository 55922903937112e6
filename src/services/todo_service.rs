use crate::errors::AppError;
use crate::models::todo::{Todo, TodoDraft, TodoStore};

/// Application-level entry point for to-do items. Currently forwards every
/// call to the store; item-level business rules belong here.
#[derive(Clone)]
pub struct TodoService {
    store: TodoStore,
}

impl TodoService {
    pub fn new(store: TodoStore) -> Self {
        Self { store }
    }

    pub async fn find_all(&self) -> Result<Vec<Todo>, AppError> {
        self.store.select_all().await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Todo>, AppError> {
        self.store.select_by_id(id).await
    }

    pub async fn create(&self, draft: &TodoDraft) -> Result<Todo, AppError> {
        self.store.insert(draft).await
    }

    pub async fn update(&self, id: i64, draft: &TodoDraft) -> Result<Todo, AppError> {
        self.store.update(id, draft).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.store.delete(id).await
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        self.store.count().await
    }
}
