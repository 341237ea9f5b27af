//! Compilation capability for modelmill model sources.
//!
//! Defines the narrow seam between the HTTP surface and the compiler
//! toolchain: the [`ModelCompiler`] trait plus the [`CompileError`]
//! taxonomy. Two implementations ship with the crate:
//! [`PassthroughCompiler`], the baseline wired by the server binary, and
//! [`StaticCompiler`], a preset-outcome backend for tests.

pub mod error;

pub use error::CompileError;

/// Compiles a namespaced model source text into its compiled artifact.
///
/// Implementations are shared across server tasks, so they must be
/// `Send + Sync`. A compile run is expected to be pure: the same
/// `(id, namespace, source)` triple yields the same outcome.
pub trait ModelCompiler: Send + Sync {
    /// Compiles `source`, registered under `namespace:id`, returning the
    /// compiled output text.
    fn compile_model(
        &self,
        id: &str,
        namespace: &str,
        source: &str,
    ) -> Result<String, CompileError>;
}

/// Baseline [`ModelCompiler`] that returns the source text unchanged.
///
/// The parser/renderer toolchain lives behind the trait; deployments
/// without one serve model sources as their own compiled form.
#[derive(Debug, Default, Clone, Copy)]
pub struct PassthroughCompiler;

impl ModelCompiler for PassthroughCompiler {
    fn compile_model(
        &self,
        _id: &str,
        _namespace: &str,
        source: &str,
    ) -> Result<String, CompileError> {
        Ok(source.to_owned())
    }
}

/// Preset-outcome [`ModelCompiler`] -- a first-class backend for tests.
///
/// Replays the same configured result for every call, which makes each
/// failure category exercisable without a real toolchain.
#[derive(Debug, Clone)]
pub struct StaticCompiler {
    outcome: Result<String, CompileError>,
}

impl StaticCompiler {
    /// A compiler whose every run succeeds with `output`.
    pub fn ok(output: impl Into<String>) -> Self {
        StaticCompiler {
            outcome: Ok(output.into()),
        }
    }

    /// A compiler whose every run fails with `error`.
    pub fn fail(error: CompileError) -> Self {
        StaticCompiler {
            outcome: Err(error),
        }
    }
}

impl ModelCompiler for StaticCompiler {
    fn compile_model(
        &self,
        _id: &str,
        _namespace: &str,
        _source: &str,
    ) -> Result<String, CompileError> {
        self.outcome.clone()
    }
}
