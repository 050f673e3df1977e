//! vidrelay command-line interface.
//!
//! Parses flags and environment into a `ServerConfig`. The binary in
//! `main.rs` adds logging setup and starts the server.

#![deny(unused_crate_dependencies)]

// Used by the binary, not the library
use dotenvy as _;
use tokio as _;
use tracing as _;
use tracing_subscriber as _;

// Silence unused dev-dependency warnings
#[cfg(test)]
use tempfile as _;

pub mod config;
pub mod parser;

pub use parser::Cli;
