//! The `/img/{*path}` handler: static diagram files from the image root.
//!
//! Faults follow a silent-failure policy: logged at warn level, answered
//! with an empty body, never surfaced as an error payload.

use std::path::Path as FsPath;

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::error::ImageFault;
use crate::state::AppState;

/// Serves a file from the image root, bytes verbatim.
///
/// `GET /img/{*path}`
///
/// The Content-Length header equals the file's byte size; no content-type
/// negotiation is performed.
pub async fn serve_image(State(state): State<AppState>, Path(path): Path<String>) -> Response {
    match read_image(&state.image_root, &path).await {
        Ok(bytes) => (
            StatusCode::OK,
            [(header::CONTENT_LENGTH, bytes.len().to_string())],
            bytes,
        )
            .into_response(),
        Err(fault) => {
            tracing::warn!(path = %path, error = %fault, "image request failed");
            StatusCode::NOT_FOUND.into_response()
        }
    }
}

/// Resolves `relative` against `root` and reads the file.
///
/// Both sides are canonicalized and the resolution must stay inside the
/// root; anything else is an [`ImageFault::OutsideRoot`].
async fn read_image(root: &FsPath, relative: &str) -> Result<Vec<u8>, ImageFault> {
    let root = tokio::fs::canonicalize(root).await?;
    let resolved = tokio::fs::canonicalize(root.join(relative)).await?;
    if !resolved.starts_with(&root) {
        return Err(ImageFault::OutsideRoot);
    }
    Ok(tokio::fs::read(&resolved).await?)
}
