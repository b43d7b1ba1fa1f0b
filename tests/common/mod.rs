//! Common test utilities for colorsvc.
//!
//! - `cli`: binary runner with fluent assertions
//! - `env`: serialized environment mutation
//! - `http`: helpers for driving the router in-process
#![allow(dead_code)]

pub mod env;

use tracing_subscriber::EnvFilter;

pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
