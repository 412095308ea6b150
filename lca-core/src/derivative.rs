//! Static source → derivative table

use crate::{Error, Result};

/// One resized output of a source image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivativeSpec {
    /// Target width in pixels
    pub width: u32,
    /// Target height in pixels
    pub height: u32,
    /// Output JPEG file name
    pub output_name: &'static str,
}

impl DerivativeSpec {
    /// Creates a new derivative spec
    pub const fn new(width: u32, height: u32, output_name: &'static str) -> Self {
        Self {
            width,
            height,
            output_name,
        }
    }

    /// File name of the WebP twin: the output name with its extension replaced
    pub fn webp_name(&self) -> String {
        match self.output_name.rsplit_once('.') {
            Some((stem, _)) => format!("{stem}.webp"),
            None => format!("{}.webp", self.output_name),
        }
    }
}

/// All derivatives of one source image, sharing a JPEG quality
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceConfig {
    /// Source file name
    pub source: &'static str,
    /// JPEG quality (0-100) for every derivative
    pub quality: u8,
    /// Derivatives, largest first
    pub derivatives: &'static [DerivativeSpec],
}

impl SourceConfig {
    /// Checks the quality range and that at least one derivative is listed
    pub fn validate(&self) -> Result<()> {
        if self.quality > 100 {
            return Err(Error::InvalidQuality {
                file: self.source.to_string(),
                quality: self.quality,
            });
        }
        if self.derivatives.is_empty() {
            return Err(Error::EmptyDerivatives(self.source.to_string()));
        }

        Ok(())
    }

    /// Source file name without its extension
    pub fn stem(&self) -> &str {
        self.source
            .rsplit_once('.')
            .map(|(stem, _)| stem)
            .unwrap_or(self.source)
    }
}

const DEFAULT_QUALITY: u8 = 85;

/// Derivative table for every source image
pub const IMAGE_CONFIGS: &[SourceConfig] = &[
    SourceConfig {
        source: "hero-image.jpg",
        quality: DEFAULT_QUALITY,
        derivatives: &[
            DerivativeSpec::new(1920, 1080, "hero-1920w.jpg"),
            DerivativeSpec::new(1440, 810, "hero-1440w.jpg"),
            DerivativeSpec::new(1024, 576, "hero-1024w.jpg"),
            DerivativeSpec::new(768, 432, "hero-768w.jpg"),
            DerivativeSpec::new(480, 270, "hero-480w.jpg"),
        ],
    },
    SourceConfig {
        source: "collection1.jpg",
        quality: DEFAULT_QUALITY,
        derivatives: &[
            DerivativeSpec::new(600, 800, "collection1-600w.jpg"),
            DerivativeSpec::new(450, 600, "collection1-450w.jpg"),
            DerivativeSpec::new(300, 400, "collection1-300w.jpg"),
        ],
    },
    SourceConfig {
        source: "collection2.jpg",
        quality: DEFAULT_QUALITY,
        derivatives: &[
            DerivativeSpec::new(600, 800, "collection2-600w.jpg"),
            DerivativeSpec::new(450, 600, "collection2-450w.jpg"),
            DerivativeSpec::new(300, 400, "collection2-300w.jpg"),
        ],
    },
    SourceConfig {
        source: "collection3.jpg",
        quality: DEFAULT_QUALITY,
        derivatives: &[
            DerivativeSpec::new(600, 800, "collection3-600w.jpg"),
            DerivativeSpec::new(450, 600, "collection3-450w.jpg"),
            DerivativeSpec::new(300, 400, "collection3-300w.jpg"),
        ],
    },
];

/// Total number of derivatives across all sources
pub fn total_derivatives(configs: &[SourceConfig]) -> usize {
    configs.iter().map(|c| c.derivatives.len()).sum()
}
