//! Schema types for the `/compile` endpoint.
//!
//! [`CompileResponse`] preserves the legacy wire shapes exactly: `status`
//! is `"OK"` or `"Error"`, and the two error shapes are distinguished on
//! the wire only by the presence of `line`/`charPosition`. Every response
//! is delivered with transport status 200; success and failure live in
//! the body alone.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;

/// A decoded `/compile` request.
///
/// Only the `"model"` action carries a payload. Unrecognized actions are
/// accepted with an empty payload and compile to an empty result.
#[derive(Debug, Clone)]
pub struct CompileRequest {
    /// Operation discriminator; `"model"` is the only recognized value.
    pub action: String,
    /// Payload of the `model` action; `None` for every other action.
    pub model: Option<ModelPayload>,
}

/// Payload of the `model` action.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelPayload {
    /// Model identifier.
    pub id: String,
    /// Namespace the model is registered under.
    pub namespace: String,
    /// Model source text to compile.
    pub text: String,
}

/// Outcome of a `/compile` request, as a closed set of wire shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileResponse {
    /// Compilation succeeded. `result` is empty for unrecognized actions.
    Ok { result: String },

    /// Decode, compile, or render failure without source coordinates.
    Error { message: String },

    /// Compiler failure located in the source text (1-based line).
    CompilerError {
        message: String,
        line: u32,
        char_position: u32,
    },
}

impl CompileResponse {
    /// The JSON body this response puts on the wire.
    pub fn to_body(&self) -> serde_json::Value {
        match self {
            CompileResponse::Ok { result } => json!({
                "status": "OK",
                "result": result,
            }),
            CompileResponse::Error { message } => json!({
                "status": "Error",
                "message": message,
            }),
            CompileResponse::CompilerError {
                message,
                line,
                char_position,
            } => json!({
                "status": "Error",
                "message": message,
                "line": line,
                "charPosition": char_position,
            }),
        }
    }
}

impl IntoResponse for CompileResponse {
    fn into_response(self) -> Response {
        // The transport status is 200 for every outcome; clients read
        // success or failure from the body.
        (StatusCode::OK, Json(self.to_body())).into_response()
    }
}
