//! Failure types for request decoding and image serving.
//!
//! Neither error crosses the wire as a transport failure: decode errors
//! are folded into the `/compile` JSON body, image faults are logged and
//! answered with an empty body.

use thiserror::Error;

/// Failures while decoding a `/compile` request body.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The body was not well-formed JSON.
    #[error("malformed request body: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The body carried no string `action` field.
    #[error("request has no 'action' field")]
    MissingAction,

    /// A `model` action arrived without a `model` payload.
    #[error("'model' action requires a 'model' object")]
    MissingModel,

    /// The `model` payload was present but not decodable.
    #[error("malformed 'model' payload: {0}")]
    MalformedModel(serde_json::Error),
}

/// Faults on the image route. Logged server-side, never surfaced.
#[derive(Debug, Error)]
pub enum ImageFault {
    /// Resolving or reading the file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The resolved path escaped the image root.
    #[error("path escapes the image root")]
    OutsideRoot,
}
