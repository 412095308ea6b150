//! Canvas presets for the placeholder marketing images

use crate::color::{Gradient, Rgb};

const INK: Rgb = Rgb(0x33, 0x33, 0x33);
const GOLD: Rgb = Rgb(0xC9, 0xA9, 0x61);

/// A line of text drawn horizontally centered at a fixed vertical offset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Caption {
    /// Text to draw
    pub text: &'static str,
    /// Nominal font size in pixels
    pub size_px: f32,
    /// Top edge of the text in pixels
    pub y: u32,
    /// Text colour
    pub color: Rgb,
}

impl Caption {
    /// Creates a new caption
    pub const fn new(text: &'static str, size_px: f32, y: u32, color: Rgb) -> Self {
        Self {
            text,
            size_px,
            y,
            color,
        }
    }
}

/// A source image the generator produces and the optimizer consumes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasPreset {
    /// Output file name
    pub file_name: &'static str,
    /// Width of the canvas in pixels
    pub width: u32,
    /// Height of the canvas in pixels
    pub height: u32,
    /// Initial fill before the gradient is painted
    pub background: Rgb,
    /// Row-by-row gradient
    pub gradient: Gradient,
    /// Captions, drawn in order
    pub captions: &'static [Caption],
}

/// The four source images used by the storefront
pub const CANVAS_PRESETS: &[CanvasPreset] = &[
    CanvasPreset {
        file_name: "hero-image.jpg",
        width: 1920,
        height: 1080,
        background: Rgb(0x1a, 0x1a, 0x1a),
        gradient: Gradient::new(Rgb(26, 26, 26), Rgb(45, 45, 45)),
        captions: &[
            Caption::new("LINEAYCOLOR", 120.0, 450, Rgb::WHITE),
            Caption::new("FASHION & STYLE", 40.0, 600, Rgb::WHITE),
        ],
    },
    CanvasPreset {
        file_name: "collection1.jpg",
        width: 600,
        height: 800,
        background: Rgb(0xFF, 0xE5, 0xCC),
        gradient: Gradient::new(Rgb(255, 229, 204), Rgb(255, 171, 145)),
        captions: &[
            Caption::new("SUMMER", 120.0, 380, INK),
            Caption::new("COLLECTION", 40.0, 450, INK),
        ],
    },
    CanvasPreset {
        file_name: "collection2.jpg",
        width: 600,
        height: 800,
        background: Rgb(0x1a, 0x1a, 0x2e),
        gradient: Gradient::new(Rgb(26, 26, 46), Rgb(22, 22, 42)),
        captions: &[
            Caption::new("EVENING", 120.0, 380, GOLD),
            Caption::new("ELEGANCE", 40.0, 450, GOLD),
        ],
    },
    CanvasPreset {
        file_name: "collection3.jpg",
        width: 600,
        height: 800,
        background: Rgb(0xE8, 0xE8, 0xE8),
        gradient: Gradient::new(Rgb(232, 232, 232), Rgb(184, 184, 184)),
        captions: &[
            Caption::new("CASUAL", 120.0, 380, INK),
            Caption::new("CHIC", 40.0, 450, INK),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::IMAGE_CONFIGS;

    #[test]
    fn test_every_config_source_has_a_preset() {
        for config in IMAGE_CONFIGS {
            assert!(
                CANVAS_PRESETS.iter().any(|p| p.file_name == config.source),
                "no preset for {}",
                config.source
            );
        }
    }

    #[test]
    fn test_captions_start_inside_canvas() {
        for preset in CANVAS_PRESETS {
            assert!(!preset.captions.is_empty() && preset.captions.len() <= 2);
            for caption in preset.captions {
                assert!(caption.y < preset.height);
            }
        }
    }
}
