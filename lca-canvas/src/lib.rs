//! Lineaycolor Canvas Library
//!
//! Renders the placeholder marketing images (gradient + centered captions)
//! and the PWA icon set.

pub mod generator;
pub mod icons;
pub mod render;
pub mod typeface;

pub use generator::Generator;
pub use icons::{generate_icons, IconConfig, IconReport};
pub use typeface::{FontBook, Typeface};

use std::path::PathBuf;

/// Result type for lca-canvas operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for lca-canvas operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Font error: {0}")]
    Font(String),
}

/// Generator configuration
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Directory the source images are written to
    pub out_dir: PathBuf,
    /// JPEG encoding quality (0-100)
    pub quality: u8,
    /// Font file tried before the system candidates
    pub font: Option<PathBuf>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("."),
            quality: 95,
            font: None,
        }
    }
}
