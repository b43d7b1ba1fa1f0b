//! colorsvc library - a demonstration HTTP endpoint that answers with a color.
//!
//! This library exposes the core of the `colorsvc` binary for use in tests
//! and for embedding the router in other axum applications.
//!
//! # Modules
//!
//! - `color`: Color resolution (override, request parameters, random pick)
//! - `output`: Response writer with the `"blue"` failure sentinel
//! - `server`: Request handler, router and serve loop
//! - `config`: Layered service configuration
//! - `error`: Error types with user-recoverable hints
//! - `logging`: Tracing subscriber setup
#![forbid(unsafe_code)]

pub mod cli;
pub mod color;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod server;
