//! Canvas painting and JPEG encoding

use crate::typeface::{FontBook, Typeface};
use crate::Result;
use image::codecs::jpeg::JpegEncoder;
use image::{ImageBuffer, RgbImage};
use lca_core::{CanvasPreset, Caption, Gradient};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Horizontal offset that centers text of `text_width` on the canvas, truncated toward zero
pub fn centered_x(canvas_width: u32, text_width: u32) -> i32 {
    ((canvas_width as i64 - text_width as i64) / 2) as i32
}

/// Paints every row with the gradient colour for that row
pub fn paint_gradient(canvas: &mut RgbImage, gradient: &Gradient) {
    let rows = canvas.height();
    for (y, row) in canvas.enumerate_rows_mut() {
        let color = image::Rgb(gradient.row_color(y, rows).channels());
        for (_, _, pixel) in row {
            *pixel = color;
        }
    }
}

/// Draws a caption horizontally centered at its fixed vertical offset
pub fn draw_caption(canvas: &mut RgbImage, face: &Typeface<'_>, caption: &Caption) {
    let x = centered_x(canvas.width(), face.measure(caption.text));
    face.draw(canvas, x, caption.y as i32, caption.color, caption.text);
}

/// Renders a preset into a new canvas
pub fn render_preset(preset: &CanvasPreset, fonts: &FontBook) -> RgbImage {
    let background = image::Rgb(preset.background.channels());
    let mut canvas: RgbImage = ImageBuffer::from_pixel(preset.width, preset.height, background);

    paint_gradient(&mut canvas, &preset.gradient);

    for caption in preset.captions {
        draw_caption(&mut canvas, &fonts.face(caption.size_px), caption);
    }

    canvas
}

/// Encodes the canvas as JPEG at the given quality and writes it to `path`
pub fn save_jpeg(canvas: &RgbImage, path: &Path, quality: u8) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    JpegEncoder::new_with_quality(&mut writer, quality).encode_image(canvas)?;
    writer.flush()?;
    Ok(())
}
