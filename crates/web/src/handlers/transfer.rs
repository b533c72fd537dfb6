//! CSV export and import handlers.

use axum::extract::{Multipart, State};
use axum::http::header;
use axum::response::{IntoResponse, Redirect, Response};

use todo_core::transfer;
use todo_db::repositories::TodoRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /export
///
/// Serve every row as a `todos.csv` attachment. Rows come back in storage
/// order; the document is built in memory before the response is sent, so
/// a failure anywhere fails the whole download.
pub async fn export(State(state): State<AppState>) -> AppResult<Response> {
    let todos = TodoRepo::list_all(&state.pool).await?;
    let body = transfer::write_csv(&todos)?;

    tracing::info!(rows = todos.len(), "Exported todos to CSV");

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"todos.csv\"",
            ),
        ],
        body,
    )
        .into_response())
}

/// POST /import
///
/// Accept a multipart upload with a `file` field, parse it as CSV and
/// upsert row-by-row. There is no transaction around the loop: rows
/// applied before a failure stay applied.
pub async fn import(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Redirect> {
    let mut data = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() == Some("file") {
            data = Some(
                field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?,
            );
            break;
        }
    }

    let data =
        data.ok_or_else(|| AppError::BadRequest("Missing multipart field 'file'".to_string()))?;

    let todos = transfer::read_csv(&data)?;
    for todo in &todos {
        TodoRepo::upsert(&state.pool, todo).await?;
    }

    tracing::info!(rows = todos.len(), "Imported todos from CSV");

    Ok(Redirect::to("/"))
}
