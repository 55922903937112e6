use sqlx::PgPool;

use crate::errors::AppError;
use super::types::{Todo, TodoDraft};

const TODO_COLUMNS: &str =
    "id, title, detail, completed, priority, category, created_at, updated_at";

/// Data access for the `todos` table. Every operation is a single statement.
#[derive(Clone)]
pub struct TodoStore {
    pool: PgPool,
}

impl TodoStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All items in insertion order.
    pub async fn select_all(&self) -> Result<Vec<Todo>, AppError> {
        let sql = format!("SELECT {TODO_COLUMNS} FROM todos ORDER BY id");
        let todos = sqlx::query_as::<_, Todo>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(todos)
    }

    pub async fn select_by_id(&self, id: i64) -> Result<Option<Todo>, AppError> {
        let sql = format!("SELECT {TODO_COLUMNS} FROM todos WHERE id = $1");
        let todo = sqlx::query_as::<_, Todo>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(todo)
    }

    /// Insert a new row; id and both timestamps are assigned by the database.
    pub async fn insert(&self, draft: &TodoDraft) -> Result<Todo, AppError> {
        let sql = format!(
            "INSERT INTO todos (title, detail, completed, priority, category) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {TODO_COLUMNS}"
        );
        let todo = sqlx::query_as::<_, Todo>(&sql)
            .bind(&draft.title)
            .bind(&draft.detail)
            .bind(draft.completed)
            .bind(draft.priority)
            .bind(&draft.category)
            .fetch_one(&self.pool)
            .await?;
        Ok(todo)
    }

    /// Replace every editable field of row `id` and refresh `updated_at`.
    /// Returns `AppError::NotFound` when no such row exists.
    pub async fn update(&self, id: i64, draft: &TodoDraft) -> Result<Todo, AppError> {
        let sql = format!(
            "UPDATE todos \
             SET title = $1, detail = $2, completed = $3, priority = $4, category = $5, \
                 updated_at = GREATEST(NOW(), created_at) \
             WHERE id = $6 \
             RETURNING {TODO_COLUMNS}"
        );
        sqlx::query_as::<_, Todo>(&sql)
            .bind(&draft.title)
            .bind(&draft.detail)
            .bind(draft.completed)
            .bind(draft.priority)
            .bind(&draft.category)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(AppError::NotFound)
    }

    /// Delete row `id`. Deleting a missing id is not an error.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM todos")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
