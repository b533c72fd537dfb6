//! Row model and DTOs for the `todos` table.

use serde::Deserialize;
use sqlx::FromRow;
use todo_core::todo::Todo;
use todo_core::types::DbId;

/// A raw row from the `todos` table.
///
/// Kept separate from the domain [`Todo`] so `todo-core` stays free of
/// database dependencies.
#[derive(Debug, Clone, FromRow)]
pub struct TodoRow {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub done: bool,
}

impl From<TodoRow> for Todo {
    fn from(row: TodoRow) -> Self {
        Todo {
            id: row.id,
            title: row.title,
            description: row.description,
            done: row.done,
        }
    }
}

/// DTO for creating a new todo. `done` always starts false.
#[derive(Debug, Deserialize)]
pub struct CreateTodo {
    pub title: String,
    pub description: String,
}

/// DTO for editing an existing todo's text fields.
#[derive(Debug, Deserialize)]
pub struct UpdateTodo {
    pub title: String,
    pub description: String,
}
