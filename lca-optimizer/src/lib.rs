//! Lineaycolor Optimizer Library
//!
//! Produces resized JPEG derivatives and WebP twins of the source images by
//! driving external command-line tools, and renders the matching responsive
//! `<picture>` markup.

pub mod markup;
pub mod pipeline;
pub mod runner;
pub mod tools;

pub use markup::render_markup;
pub use pipeline::{DerivativeOutcome, DerivativeResult, Pipeline, PipelineReport};
pub use runner::{SystemRunner, ToolOutput, ToolRunner};
pub use tools::ResizeTool;

use std::path::PathBuf;

/// Result type for lca-optimizer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for lca-optimizer operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Config error: {0}")]
    Config(#[from] lca_core::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Required tool '{program}' is not available: {reason}")]
    ToolUnavailable { program: String, reason: String },

    #[error("Failed to run '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{program}' exited with {status}: {stderr}")]
    ToolFailed {
        program: String,
        status: String,
        stderr: String,
    },
}

/// Pipeline configuration
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Directory holding the source images
    pub source_dir: PathBuf,
    /// Directory the derivatives are written to
    pub output_dir: PathBuf,
    /// Tool used to resize and re-encode JPEGs
    pub resize_tool: ResizeTool,
    /// WebP encoder executable
    pub webp_program: String,
    /// WebP encoding quality (0-100)
    pub webp_quality: u8,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("."),
            output_dir: PathBuf::from("images/optimized"),
            resize_tool: ResizeTool::default(),
            webp_program: "cwebp".to_string(),
            webp_quality: 80,
        }
    }
}
