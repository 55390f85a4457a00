//! Streaming JSON responses.
//!
//! # Responsibilities
//! - Write a todo stream to the client as a JSON array, element by
//!   element, in emission order
//! - Abort the transport on a mid-stream failure instead of finishing a
//!   truncated array as a success
//!
//! # Design Decisions
//! - The status line is committed only after the upstream payload has
//!   decoded, so a body error here aborts the chunked transfer rather
//!   than producing a well-formed-looking partial 200

use axum::body::{Body, Bytes};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use futures_util::{future, stream, Stream, StreamExt};

use crate::upstream::TodoStream;

/// Build a `200 OK` response that streams the todos as a JSON array.
pub fn json_array(todos: TodoStream) -> Response {
    (
        [(header::CONTENT_TYPE, "application/json")],
        Body::from_stream(encode_array(todos)),
    )
        .into_response()
}

/// Encode a todo stream as JSON array chunks: `[`, comma-joined elements, `]`.
fn encode_array(todos: TodoStream) -> impl Stream<Item = Result<Bytes, axum::BoxError>> {
    let mut first = true;
    let elements = todos.map(move |next| {
        let todo = next.map_err(axum::BoxError::from)?;
        let json = serde_json::to_vec(&todo).map_err(axum::BoxError::from)?;

        let mut chunk = Vec::with_capacity(json.len() + 1);
        if first {
            first = false;
        } else {
            chunk.push(b',');
        }
        chunk.extend_from_slice(&json);
        Ok(Bytes::from(chunk))
    });

    stream::once(future::ready(Ok(Bytes::from_static(b"["))))
        .chain(elements)
        .chain(stream::once(future::ready(Ok(Bytes::from_static(b"]")))))
}
