//! Font lookup and text rasterization
//!
//! Outline fonts are loaded from disk with `ab_glyph`. When no font file can
//! be loaded, text is drawn with the built-in 8x8 bitmap font, scaled up to
//! approximate the requested size.

use crate::{Error, Result};
use ab_glyph::{point, Font, FontVec, GlyphId, PxScale, ScaleFont};
use font8x8::{UnicodeFonts, BASIC_FONTS};
use image::RgbImage;
use lca_core::Rgb;
use std::path::{Path, PathBuf};

/// Well-known system font files, tried in order
pub const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    "/System/Library/Fonts/Helvetica.ttc",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Side length of a glyph in the built-in font
const BITMAP_GLYPH: u32 = 8;

/// Loads an outline font (TTF, OTF or the first face of a TTC)
pub fn load_font_file(path: &Path) -> Result<FontVec> {
    let data = std::fs::read(path)?;
    FontVec::try_from_vec_and_index(data, 0)
        .map_err(|e| Error::Font(format!("{}: {}", path.display(), e)))
}

/// The font available to the renderer, shared across sizes
pub struct FontBook {
    outline: Option<FontVec>,
    origin: Option<PathBuf>,
}

impl FontBook {
    /// Loads the first usable font, trying `preferred` before the system candidates.
    ///
    /// Never fails: falls back to the built-in bitmap font.
    pub fn load(preferred: Option<&Path>) -> Self {
        let candidates = preferred
            .into_iter()
            .map(Path::to_path_buf)
            .chain(SYSTEM_FONT_CANDIDATES.iter().map(PathBuf::from));

        for path in candidates {
            match load_font_file(&path) {
                Ok(font) => {
                    tracing::debug!(font = %path.display(), "loaded outline font");
                    return Self {
                        outline: Some(font),
                        origin: Some(path),
                    };
                }
                Err(err) => tracing::debug!(font = %path.display(), %err, "font unavailable"),
            }
        }

        tracing::debug!("no outline font found, using built-in bitmap font");
        Self::builtin()
    }

    /// A font book holding only the built-in bitmap font
    pub fn builtin() -> Self {
        Self {
            outline: None,
            origin: None,
        }
    }

    /// Path of the loaded outline font, if any
    pub fn origin(&self) -> Option<&Path> {
        self.origin.as_deref()
    }

    /// Returns a typeface at the given pixel size
    pub fn face(&self, size_px: f32) -> Typeface<'_> {
        match &self.outline {
            Some(font) => Typeface::Outline {
                font,
                scale: PxScale::from(size_px),
            },
            None => Typeface::Bitmap {
                cell: ((size_px / 16.0) as u32).max(1),
            },
        }
    }
}

/// A font at a concrete size
#[derive(Clone, Copy)]
pub enum Typeface<'a> {
    /// Outline font rasterized with anti-aliasing
    Outline { font: &'a FontVec, scale: PxScale },
    /// Built-in 8x8 font; every glyph pixel becomes a `cell`x`cell` square
    Bitmap { cell: u32 },
}

impl Typeface<'_> {
    /// Advance width of `text` in pixels
    pub fn measure(&self, text: &str) -> u32 {
        match *self {
            Typeface::Outline { font, scale } => {
                let scaled = font.as_scaled(scale);
                let mut width = 0.0f32;
                let mut prev: Option<GlyphId> = None;
                for ch in text.chars() {
                    let id = font.glyph_id(ch);
                    if let Some(prev) = prev {
                        width += scaled.kern(prev, id);
                    }
                    width += scaled.h_advance(id);
                    prev = Some(id);
                }
                width.ceil().max(0.0) as u32
            }
            Typeface::Bitmap { cell } => text.chars().count() as u32 * BITMAP_GLYPH * cell,
        }
    }

    /// Height of one line of text in pixels
    pub fn line_height(&self) -> u32 {
        match *self {
            Typeface::Outline { font, scale } => {
                let scaled = font.as_scaled(scale);
                (scaled.ascent() - scaled.descent()).ceil().max(0.0) as u32
            }
            Typeface::Bitmap { cell } => BITMAP_GLYPH * cell,
        }
    }

    /// Draws `text` with its top-left corner at (`x`, `y`); clipped to the canvas
    pub fn draw(&self, canvas: &mut RgbImage, x: i32, y: i32, color: Rgb, text: &str) {
        match *self {
            Typeface::Outline { font, scale } => {
                draw_outline(canvas, font, scale, x, y, color, text)
            }
            Typeface::Bitmap { cell } => draw_bitmap(canvas, cell, x, y, color, text),
        }
    }
}

fn draw_outline(
    canvas: &mut RgbImage,
    font: &FontVec,
    scale: PxScale,
    x: i32,
    y: i32,
    color: Rgb,
    text: &str,
) {
    let scaled = font.as_scaled(scale);
    let baseline = y as f32 + scaled.ascent();
    let mut caret = x as f32;
    let mut prev: Option<GlyphId> = None;

    for ch in text.chars() {
        let id = font.glyph_id(ch);
        if let Some(prev) = prev {
            caret += scaled.kern(prev, id);
        }
        let glyph = id.with_scale_and_position(scale, point(caret, baseline));
        caret += scaled.h_advance(id);
        prev = Some(id);

        if let Some(outlined) = font.outline_glyph(glyph) {
            let bounds = outlined.px_bounds();
            outlined.draw(|gx, gy, coverage| {
                let px = bounds.min.x as i32 + gx as i32;
                let py = bounds.min.y as i32 + gy as i32;
                blend_pixel(canvas, px, py, color, coverage);
            });
        }
    }
}

fn draw_bitmap(canvas: &mut RgbImage, cell: u32, x: i32, y: i32, color: Rgb, text: &str) {
    let advance = (BITMAP_GLYPH * cell) as i32;

    for (index, ch) in text.chars().enumerate() {
        // Characters outside the basic set render as blanks.
        let Some(rows) = BASIC_FONTS.get(ch) else {
            continue;
        };
        let origin_x = x + index as i32 * advance;

        for (row, bits) in rows.iter().enumerate() {
            for col in 0..BITMAP_GLYPH {
                if bits & (1 << col) == 0 {
                    continue;
                }
                let cell_x = origin_x + (col * cell) as i32;
                let cell_y = y + (row as u32 * cell) as i32;
                for dy in 0..cell as i32 {
                    for dx in 0..cell as i32 {
                        blend_pixel(canvas, cell_x + dx, cell_y + dy, color, 1.0);
                    }
                }
            }
        }
    }
}

/// Blends `color` over the pixel at (`x`, `y`) with the given coverage (0.0-1.0)
pub(crate) fn blend_pixel(canvas: &mut RgbImage, x: i32, y: i32, color: Rgb, coverage: f32) {
    if x < 0 || y < 0 || x as u32 >= canvas.width() || y as u32 >= canvas.height() {
        return;
    }

    let alpha = coverage.clamp(0.0, 1.0);
    let inv_alpha = 1.0 - alpha;
    let pixel = canvas.get_pixel_mut(x as u32, y as u32);
    for (dst, src) in pixel.0.iter_mut().zip(color.channels()) {
        *dst = (src as f32 * alpha + *dst as f32 * inv_alpha).round() as u8;
    }
}
