//! The `/compile` handler and request-body reader.

use axum::body::{to_bytes, Body};
use axum::extract::State;

use crate::schema::compile::CompileResponse;
use crate::state::AppState;

/// Maximum request body size drained into memory (10 MiB).
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Compiles a model source into its compiled artifact.
///
/// `POST /compile`
///
/// Always answers HTTP 200; the JSON body carries success or one of the
/// three failure shapes.
pub async fn compile(State(state): State<AppState>, body: Body) -> CompileResponse {
    let raw = read_body(body).await;
    state.compile.handle(&raw)
}

/// Drains the request body into a single string.
///
/// A read fault yields the empty string -- "no body" -- so decoding fails
/// naturally downstream instead of fabricating content. The body is
/// consumed by value, so the stream is released on every exit path.
async fn read_body(body: Body) -> String {
    match to_bytes(body, MAX_BODY_BYTES).await {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(err) => {
            tracing::debug!(error = %err, "failed to drain request body");
            String::new()
        }
    }
}
