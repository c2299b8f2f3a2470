//! Error types for railroad diagram operations.
//!
//! This module provides the main error type [`RailroadError`]. Structural
//! and configuration problems are detected before any output is produced;
//! the only error a render call can return is a failure of the caller's
//! output sink.

use std::io;

use thiserror::Error;

/// The main error type for railroad diagram operations.
#[derive(Debug, Error)]
pub enum RailroadError {
    /// A node was built with the wrong number of children or an
    /// out-of-range default branch.
    #[error("Structural error: {0}")]
    Structural(String),

    /// A parameter value is invalid or a parameter file names an unknown key.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Writing the rendered output failed.
    #[error("Render target error: {0}")]
    RenderTarget(#[from] io::Error),
}
