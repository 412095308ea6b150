//! PWA icon rendering

use crate::render::centered_x;
use crate::typeface::FontBook;
use crate::{Error, Result};
use image::{DynamicImage, ImageBuffer, RgbImage};
use lca_core::Rgb;
use std::path::PathBuf;

/// Square icon sizes referenced by the web app manifest
pub const ICON_SIZES: &[u32] = &[72, 96, 128, 144, 152, 192, 384, 512];

const FAVICON_SIZE: u32 = 32;
const APPLE_TOUCH_SIZE: u32 = 180;

const ICON_BACKGROUND: Rgb = Rgb(0x1a, 0x1a, 0x1a);
const ICON_INK: Rgb = Rgb(0xc9, 0xa9, 0x61);
const ICON_TEXT: &str = "LC";

/// Where the icon set is written
#[derive(Debug, Clone)]
pub struct IconConfig {
    /// Directory for the sized `icon-NxN.png` files
    pub icons_dir: PathBuf,
    /// Site root for `favicon.ico` and `apple-touch-icon.png`
    pub root_dir: PathBuf,
}

impl IconConfig {
    /// Uses the parent of `icons_dir` as the site root
    pub fn from_icons_dir(icons_dir: impl Into<PathBuf>) -> Self {
        let icons_dir = icons_dir.into();
        let root_dir = match icons_dir.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        Self {
            icons_dir,
            root_dir,
        }
    }
}

impl Default for IconConfig {
    fn default() -> Self {
        Self::from_icons_dir("public/icons")
    }
}

/// Outcome of an icon run; failures do not stop the remaining icons
#[derive(Debug, Default)]
pub struct IconReport {
    /// Icons written successfully
    pub written: Vec<PathBuf>,
    /// Icons that could not be written
    pub failed: Vec<(PathBuf, Error)>,
}

/// Renders the "LC" monogram centered on a square canvas
pub fn render_icon(size: u32, fonts: &FontBook) -> RgbImage {
    let background = image::Rgb(ICON_BACKGROUND.channels());
    let mut canvas: RgbImage = ImageBuffer::from_pixel(size, size, background);

    let face = fonts.face(size as f32 * 0.35);
    let x = centered_x(size, face.measure(ICON_TEXT));
    let y = (size as i32 - face.line_height() as i32) / 2;
    face.draw(&mut canvas, x, y, ICON_INK, ICON_TEXT);

    canvas
}

/// Every icon file with its pixel size
pub fn icon_targets(config: &IconConfig) -> Vec<(PathBuf, u32)> {
    let icons = &config.icons_dir;
    let root = &config.root_dir;
    ICON_SIZES
        .iter()
        .map(|&size| (icons.join(format!("icon-{size}x{size}.png")), size))
        .chain([
            (root.join("favicon.ico"), FAVICON_SIZE),
            (root.join("apple-touch-icon.png"), APPLE_TOUCH_SIZE),
        ])
        .collect()
}

/// Writes the icon set, creating both directories if needed.
///
/// Only failing to create a directory is an error; individual icons that
/// fail are collected in the report.
pub fn generate_icons(config: &IconConfig, fonts: &FontBook) -> Result<IconReport> {
    std::fs::create_dir_all(&config.icons_dir)?;
    std::fs::create_dir_all(&config.root_dir)?;

    let mut report = IconReport::default();
    for (path, size) in icon_targets(config) {
        // The ICO encoder wants RGBA input; the format follows the extension.
        let icon = DynamicImage::ImageRgb8(render_icon(size, fonts)).into_rgba8();
        match icon.save(&path) {
            Ok(()) => report.written.push(path),
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "failed to write icon");
                report.failed.push((path, err.into()));
            }
        }
    }

    Ok(report)
}
