//! Core types shared across the demystat workspace.

pub mod error;

pub use error::{Error, Result};

/// Workspace version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
