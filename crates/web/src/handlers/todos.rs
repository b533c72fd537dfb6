//! Handlers for the list view and the CRUD form posts.
//!
//! Every mutating handler redirects `303 See Other` back to `/`, whether
//! or not the operation changed anything: a validation no-op (empty
//! field, unknown id) looks identical to success from the client's side.

use axum::extract::{Query, State};
use axum::response::{Html, Redirect};
use axum::Form;
use serde::Deserialize;

use todo_core::todo::fields_present;
use todo_core::types::DbId;
use todo_db::models::todo::{CreateTodo, UpdateTodo};
use todo_db::repositories::TodoRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// Query parameters for the list view.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub search: String,
}

/// Form payload for POST /add.
#[derive(Debug, Deserialize)]
pub struct AddForm {
    pub title: String,
    pub description: String,
}

/// Form payload for POST /edit.
#[derive(Debug, Deserialize)]
pub struct EditForm {
    pub id: DbId,
    pub title: String,
    pub description: String,
}

/// Form payload for POST /toggle and POST /delete.
#[derive(Debug, Deserialize)]
pub struct IdForm {
    pub id: DbId,
}

/// GET /
///
/// Render the list view, filtered by the optional `search` query param.
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Html<String>> {
    let todos = TodoRepo::list(&state.pool, &params.search).await?;
    let page = state.renderer.render(&todos, &params.search)?;
    Ok(Html(page))
}

/// POST /add
pub async fn add(State(state): State<AppState>, Form(form): Form<AddForm>) -> AppResult<Redirect> {
    if fields_present(&form.title, &form.description) {
        let input = CreateTodo {
            title: form.title,
            description: form.description,
        };
        let id = TodoRepo::create(&state.pool, &input).await?;
        tracing::info!(id, "Todo created");
    }

    Ok(Redirect::to("/"))
}

/// POST /edit
pub async fn edit(
    State(state): State<AppState>,
    Form(form): Form<EditForm>,
) -> AppResult<Redirect> {
    if fields_present(&form.title, &form.description) {
        let input = UpdateTodo {
            title: form.title,
            description: form.description,
        };
        let changed = TodoRepo::update(&state.pool, form.id, &input).await?;
        if changed {
            tracing::info!(id = form.id, "Todo edited");
        }
    }

    Ok(Redirect::to("/"))
}

/// POST /toggle
pub async fn toggle(
    State(state): State<AppState>,
    Form(form): Form<IdForm>,
) -> AppResult<Redirect> {
    let changed = TodoRepo::toggle(&state.pool, form.id).await?;
    if changed {
        tracing::info!(id = form.id, "Todo toggled");
    }

    Ok(Redirect::to("/"))
}

/// POST /delete
pub async fn delete(
    State(state): State<AppState>,
    Form(form): Form<IdForm>,
) -> AppResult<Redirect> {
    let changed = TodoRepo::delete(&state.pool, form.id).await?;
    if changed {
        tracing::info!(id = form.id, "Todo deleted");
    }

    Ok(Redirect::to("/"))
}
