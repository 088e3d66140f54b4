//! Preview server for built errror sites.
//!
//! Serves the output directory as plain static files.

pub mod server;

pub use server::{BoundServer, PreviewConfig, PreviewServer, ServerError};
