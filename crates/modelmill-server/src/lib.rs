//! HTTP/JSON service for compiling namespaced model sources.
//!
//! `POST /compile` turns a compile request into one of three shape-stable
//! JSON bodies, always delivered with transport status 200; success and
//! failure are encoded solely in the payload. `GET /img/{*path}` serves
//! rendered diagram files from the image root. This crate contains the
//! server framework, request/response schema types, the dispatch service,
//! and route definitions; the compiler toolchain is consumed through the
//! `modelmill-compile` trait seam.

pub mod error;
pub mod handlers;
pub mod router;
pub mod schema;
pub mod service;
pub mod state;
