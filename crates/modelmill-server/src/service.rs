//! CompileService: the dispatch core between the HTTP handlers and the
//! compilation capability.
//!
//! All `/compile` business logic flows through [`CompileService::handle`]:
//! decode the raw body, route the action, and fold every failure category
//! into its wire shape. Handlers are thin wrappers.

use std::sync::Arc;

use modelmill_compile::{CompileError, ModelCompiler};
use serde_json::Value;

use crate::error::DecodeError;
use crate::schema::compile::{CompileRequest, CompileResponse, ModelPayload};

/// Dispatches decoded compile requests to the capability and formats the
/// outcome.
#[derive(Clone)]
pub struct CompileService {
    compiler: Arc<dyn ModelCompiler>,
}

impl CompileService {
    /// Creates a service dispatching to `compiler`.
    pub fn new(compiler: Arc<dyn ModelCompiler>) -> Self {
        CompileService { compiler }
    }

    /// Handles one raw `/compile` body, producing exactly one response
    /// shape. Total: decode and compile failures become error bodies;
    /// this never panics and never raises.
    pub fn handle(&self, raw_body: &str) -> CompileResponse {
        let request = match decode(raw_body) {
            Ok(request) => request,
            Err(err) => {
                return CompileResponse::Error {
                    message: err.to_string(),
                }
            }
        };

        match (request.action.as_str(), request.model) {
            ("model", Some(model)) => self.compile(&model),
            // Unrecognized actions compile to an empty result rather than
            // an error; `decode` guarantees the payload for "model".
            _ => CompileResponse::Ok {
                result: String::new(),
            },
        }
    }

    fn compile(&self, model: &ModelPayload) -> CompileResponse {
        match self
            .compiler
            .compile_model(&model.id, &model.namespace, &model.text)
        {
            Ok(result) => CompileResponse::Ok { result },
            Err(CompileError::Compiler {
                message,
                line,
                char_position,
            }) => CompileResponse::CompilerError {
                message,
                line,
                char_position,
            },
            Err(err) => CompileResponse::Error {
                message: err.to_string(),
            },
        }
    }
}

/// Decodes a raw request body into a [`CompileRequest`].
///
/// The decode is deliberately permissive: only the `model` action has its
/// payload validated. Any other action succeeds with no payload, whatever
/// else the body carries.
pub fn decode(raw: &str) -> Result<CompileRequest, DecodeError> {
    let body: Value = serde_json::from_str(raw)?;
    let action = body
        .get("action")
        .and_then(Value::as_str)
        .ok_or(DecodeError::MissingAction)?
        .to_owned();

    let model = if action == "model" {
        let payload = body.get("model").ok_or(DecodeError::MissingModel)?;
        Some(serde_json::from_value(payload.clone()).map_err(DecodeError::MalformedModel)?)
    } else {
        None
    };

    Ok(CompileRequest { action, model })
}

#[cfg(test)]
mod tests {
    use super::*;
    use modelmill_compile::StaticCompiler;

    fn service(compiler: StaticCompiler) -> CompileService {
        CompileService::new(Arc::new(compiler))
    }

    const MODEL_BODY: &str =
        r#"{"action":"model","model":{"id":"m1","namespace":"ns","text":"a -> b"}}"#;

    #[test]
    fn model_action_returns_compiled_text() {
        let response = service(StaticCompiler::ok("compiled output")).handle(MODEL_BODY);
        assert_eq!(
            response,
            CompileResponse::Ok {
                result: "compiled output".into()
            }
        );
    }

    #[test]
    fn malformed_json_is_a_generic_error() {
        let response = service(StaticCompiler::ok("unused")).handle("{not json");
        match response {
            CompileResponse::Error { message } => assert!(!message.is_empty()),
            other => panic!("expected generic error, got {other:?}"),
        }
    }

    #[test]
    fn missing_action_is_a_decode_error() {
        let response = service(StaticCompiler::ok("unused")).handle("{}");
        assert_eq!(
            response,
            CompileResponse::Error {
                message: "request has no 'action' field".into()
            }
        );
    }

    #[test]
    fn model_action_without_payload_is_rejected() {
        let response = service(StaticCompiler::ok("unused")).handle(r#"{"action":"model"}"#);
        assert_eq!(
            response,
            CompileResponse::Error {
                message: "'model' action requires a 'model' object".into()
            }
        );
    }

    #[test]
    fn model_payload_missing_fields_is_rejected() {
        let response =
            service(StaticCompiler::ok("unused")).handle(r#"{"action":"model","model":{"id":"m1"}}"#);
        match response {
            CompileResponse::Error { message } => {
                assert!(message.starts_with("malformed 'model' payload"))
            }
            other => panic!("expected generic error, got {other:?}"),
        }
    }

    #[test]
    fn unknown_action_compiles_to_empty_result() {
        let response = service(StaticCompiler::ok("unused")).handle(r#"{"action":"inspect"}"#);
        assert_eq!(
            response,
            CompileResponse::Ok {
                result: String::new()
            }
        );
    }

    #[test]
    fn unknown_action_ignores_junk_payload() {
        let response =
            service(StaticCompiler::ok("unused")).handle(r#"{"action":"inspect","model":42}"#);
        assert_eq!(
            response,
            CompileResponse::Ok {
                result: String::new()
            }
        );
    }

    #[test]
    fn located_failure_keeps_exact_coordinates() {
        let compiler = StaticCompiler::fail(CompileError::Compiler {
            message: "unexpected token".into(),
            line: 3,
            char_position: 7,
        });
        let response = service(compiler).handle(MODEL_BODY);
        assert_eq!(
            response,
            CompileResponse::CompilerError {
                message: "unexpected token".into(),
                line: 3,
                char_position: 7,
            }
        );
    }

    #[test]
    fn render_failure_is_a_generic_error() {
        let compiler = StaticCompiler::fail(CompileError::Render {
            message: "no layout for node 'x'".into(),
        });
        let response = service(compiler).handle(MODEL_BODY);
        assert_eq!(
            response,
            CompileResponse::Error {
                message: "no layout for node 'x'".into()
            }
        );
    }
}
