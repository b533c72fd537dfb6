//! Repository for the `todos` table.

use sqlx::SqlitePool;
use todo_core::todo::Todo;
use todo_core::types::DbId;

use crate::models::todo::{CreateTodo, TodoRow, UpdateTodo};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, done";

/// Provides CRUD and bulk operations for todos.
pub struct TodoRepo;

impl TodoRepo {
    /// List todos whose title or description contains `search`, incomplete
    /// first, then newest first within each group. An empty search matches
    /// every row. Case sensitivity follows SQLite's `LIKE` default.
    pub async fn list(pool: &SqlitePool, search: &str) -> Result<Vec<Todo>, sqlx::Error> {
        let pattern = format!("%{search}%");
        let query = format!(
            "SELECT {COLUMNS} FROM todos
             WHERE title LIKE ? OR description LIKE ?
             ORDER BY done ASC, id DESC"
        );
        let rows = sqlx::query_as::<_, TodoRow>(&query)
            .bind(&pattern)
            .bind(&pattern)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Todo::from).collect())
    }

    /// List every todo in storage order. Used by export, which preserves
    /// whatever order the engine returns rather than the list-view order.
    pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Todo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM todos");
        let rows = sqlx::query_as::<_, TodoRow>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Todo::from).collect())
    }

    /// Find a todo by id.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Todo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM todos WHERE id = ?");
        let row = sqlx::query_as::<_, TodoRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Todo::from))
    }

    /// Insert a new todo with `done = false`, returning its assigned id.
    ///
    /// Field validation (non-empty title/description) happens at the
    /// handler edge, not here: import needs to write rows as-is.
    pub async fn create(pool: &SqlitePool, input: &CreateTodo) -> Result<DbId, sqlx::Error> {
        let result = sqlx::query("INSERT INTO todos (title, description, done) VALUES (?, ?, FALSE)")
            .bind(&input.title)
            .bind(&input.description)
            .execute(pool)
            .await?;
        Ok(result.last_insert_rowid())
    }

    /// Update a todo's title and description. Returns `false` when no row
    /// with the given id exists (the caller treats that as a no-op).
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateTodo,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE todos SET title = ?, description = ? WHERE id = ?")
            .bind(&input.title)
            .bind(&input.description)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Flip a todo's done flag. Returns `false` when no row matched.
    pub async fn toggle(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE todos SET done = NOT done WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a todo by id. Returns `false` when no row matched, so a
    /// repeat delete is a no-op rather than an error.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM todos WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Insert-or-update keyed by id in one statement. An existing row with
    /// the same id gets its title, description and done flag overwritten.
    pub async fn upsert(pool: &SqlitePool, todo: &Todo) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO todos (id, title, description, done) VALUES (?, ?, ?, ?)
             ON CONFLICT(id) DO UPDATE SET
                title = excluded.title,
                description = excluded.description,
                done = excluded.done",
        )
        .bind(todo.id)
        .bind(&todo.title)
        .bind(&todo.description)
        .bind(todo.done)
        .execute(pool)
        .await?;
        Ok(())
    }
}
