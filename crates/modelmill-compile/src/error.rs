//! Error taxonomy for the compilation capability.
//!
//! Uses `thiserror` for structured, matchable variants covering the
//! failure categories a compile run can produce. `Display` is the bare
//! message for every variant so callers can forward it verbatim.

use thiserror::Error;

/// Failures produced by a [`ModelCompiler`](crate::ModelCompiler) run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    /// The model source could not be decoded into a model document.
    #[error("{message}")]
    Decode { message: String },

    /// The diagram renderer rejected the compiled model.
    #[error("{message}")]
    Render { message: String },

    /// The compiler rejected the source at a specific location.
    ///
    /// `line` is 1-based; `char_position` is the character offset into
    /// the original source text.
    #[error("{message}")]
    Compiler {
        message: String,
        line: u32,
        char_position: u32,
    },
}
