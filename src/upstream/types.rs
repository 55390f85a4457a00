//! Domain types and error taxonomy for the downstream Todo API.

use futures_util::stream::BoxStream;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single todo record as served by the downstream API.
///
/// Instances are decoded fresh from each downstream response and are never
/// cached or mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub user_id: i64,
    pub id: i64,
    pub title: String,
    pub completed: bool,
}

/// Result type alias for downstream operations.
pub type UpstreamResult<T> = Result<T, UpstreamError>;

/// A finite, non-restartable sequence of todos, emitted in the order the
/// downstream returned them.
pub type TodoStream = BoxStream<'static, UpstreamResult<Todo>>;

/// Errors produced by the downstream client.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Input rejected locally, before any network call was made.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The downstream has no resource matching the request.
    #[error("resource not found upstream")]
    NotFound,

    /// The downstream could not be reached (connect, network, timeout).
    #[error("upstream unavailable: {0}")]
    Unavailable(#[source] reqwest::Error),

    /// The downstream answered with a non-2xx status.
    #[error("upstream returned status {0}")]
    Status(u16),

    /// The downstream body could not be decoded as the expected JSON shape.
    #[error("failed to decode upstream response: {0}")]
    Decode(#[source] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_wire_shape_is_camel_case() {
        let todo = Todo {
            user_id: 1,
            id: 2,
            title: "quis ut nam".to_string(),
            completed: true,
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "userId": 1,
                "id": 2,
                "title": "quis ut nam",
                "completed": true
            })
        );
    }

    #[test]
    fn test_todo_decodes_from_downstream_payload() {
        let todo: Todo = serde_json::from_str(
            r#"{"userId":1,"id":1,"title":"delectus aut autem","completed":false}"#,
        )
        .unwrap();
        assert_eq!(todo.user_id, 1);
        assert_eq!(todo.id, 1);
        assert!(!todo.completed);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            UpstreamError::Status(503).to_string(),
            "upstream returned status 503"
        );
        assert_eq!(
            UpstreamError::InvalidArgument("bad id".to_string()).to_string(),
            "invalid argument: bad id"
        );
    }
}
