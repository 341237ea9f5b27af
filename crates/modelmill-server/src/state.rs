//! Shared application state.
//!
//! [`AppState`] is cloned into every handler task. All fields are
//! read-only per request, so no locking discipline is required: the
//! compiler is shared behind an `Arc` and the image root is a fixed path.

use std::path::PathBuf;
use std::sync::Arc;

use modelmill_compile::ModelCompiler;

use crate::service::CompileService;

/// Shared state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    /// Dispatch core for `/compile`.
    pub compile: CompileService,
    /// Root directory image paths resolve against.
    pub image_root: Arc<PathBuf>,
}

impl AppState {
    /// Creates state compiling through `compiler` and serving images from
    /// `image_root`.
    pub fn new(compiler: Arc<dyn ModelCompiler>, image_root: PathBuf) -> Self {
        AppState {
            compile: CompileService::new(compiler),
            image_root: Arc::new(image_root),
        }
    }
}
