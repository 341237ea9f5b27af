//! Request and response schema types for the HTTP API.

pub mod compile;
