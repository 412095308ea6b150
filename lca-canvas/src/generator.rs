//! Source image generation

use crate::render::{render_preset, save_jpeg};
use crate::typeface::FontBook;
use crate::{GeneratorConfig, Result};
use lca_core::CanvasPreset;
use std::path::PathBuf;

/// Renders canvas presets and writes them as JPEG files
pub struct Generator {
    config: GeneratorConfig,
    fonts: FontBook,
}

impl Generator {
    /// Creates a new generator, looking up a font once for all presets
    pub fn new(config: GeneratorConfig) -> Self {
        let fonts = FontBook::load(config.font.as_deref());
        Self::with_fonts(config, fonts)
    }

    /// Creates a generator with an already loaded font book
    pub fn with_fonts(config: GeneratorConfig, fonts: FontBook) -> Self {
        Self { config, fonts }
    }

    /// Renders and writes every preset, returning the written paths in order.
    ///
    /// The first I/O or encoding error aborts the run.
    pub fn generate(&self, presets: &[CanvasPreset]) -> Result<Vec<PathBuf>> {
        std::fs::create_dir_all(&self.config.out_dir)?;

        let mut written = Vec::with_capacity(presets.len());
        for preset in presets {
            let path = self.config.out_dir.join(preset.file_name);
            let canvas = render_preset(preset, &self.fonts);
            save_jpeg(&canvas, &path, self.config.quality)?;
            tracing::debug!(path = %path.display(), "wrote source image");
            written.push(path);
        }

        Ok(written)
    }
}
