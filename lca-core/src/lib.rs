//! Lineaycolor Core Library
//!
//! This library provides the core data structures shared by the asset
//! generator and the derivative optimizer: colours, gradients, canvas presets
//! and the static source → derivative table.

pub mod color;
pub mod derivative;
pub mod preset;

pub use color::{Gradient, Rgb};
pub use derivative::{total_derivatives, DerivativeSpec, SourceConfig, IMAGE_CONFIGS};
pub use preset::{CanvasPreset, Caption, CANVAS_PRESETS};

/// Result type for lca-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for lca-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid quality {quality} for {file}, expected 0-100")]
    InvalidQuality { file: String, quality: u8 },

    #[error("Source {0} has no derivatives")]
    EmptyDerivatives(String),
}
