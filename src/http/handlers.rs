//! HTTP request handlers for the gateway surface.
//!
//! Each handler parses its inputs, invokes the matching service operation,
//! and hands failures to the shared error mapping. Input validation happens
//! before any downstream call is made.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use crate::http::response;
use crate::http::server::AppState;
use crate::upstream::{Todo, UpstreamError, UpstreamResult};

/// GET /todos/all
///
/// Streams the full downstream collection as a JSON array.
pub async fn all_todos(State(state): State<AppState>) -> Result<Response, UpstreamError> {
    let todos = state.service.todos().await?;
    Ok(response::json_array(todos))
}

/// GET /todos/{id}
///
/// A non-numeric id is rejected with 400 before the downstream is called.
pub async fn todo_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> UpstreamResult<Json<Todo>> {
    let id: i64 = id
        .parse()
        .map_err(|_| UpstreamError::InvalidArgument(format!("invalid todo id '{id}'")))?;

    let todo = state.service.todo_by_id(id).await?;
    Ok(Json(todo))
}

/// Query parameters accepted by `GET /todos`.
#[derive(Debug, Deserialize)]
pub struct TodosQuery {
    #[serde(rename = "userId")]
    user_id: Option<String>,
}

/// GET /todos?userId={n}
///
/// A missing or unparsable userId filters for user 0 rather than erroring.
/// This leniency is deliberate and applies to this parameter only.
pub async fn todos_by_user(
    State(state): State<AppState>,
    Query(query): Query<TodosQuery>,
) -> Result<Response, UpstreamError> {
    let user_id = query
        .user_id
        .as_deref()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(0);

    let todos = state.service.todos_by_user_id(user_id).await?;
    Ok(response::json_array(todos))
}

/// Fallback for requests matching no route.
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "no matching route")
}
