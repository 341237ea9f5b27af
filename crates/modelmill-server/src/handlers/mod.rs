//! HTTP handler modules.
//!
//! Handlers stay thin: drain the body, delegate to
//! [`CompileService`](crate::service::CompileService) or the image
//! resolver, and convert the outcome into a response. No business logic
//! lives here.

pub mod compile;
pub mod image;
