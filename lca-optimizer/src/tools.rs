//! Command lines for the external image tools

use lca_core::DerivativeSpec;
use std::ffi::OsString;
use std::path::Path;

/// Tool used to resize and re-encode the JPEG derivatives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResizeTool {
    /// macOS `sips`
    #[default]
    Sips,
    /// ImageMagick 7 `magick`
    Magick,
}

impl ResizeTool {
    /// Executable name
    pub fn program(self) -> &'static str {
        match self {
            ResizeTool::Sips => "sips",
            ResizeTool::Magick => "magick",
        }
    }

    /// Arguments for a cheap invocation that succeeds when the tool is installed
    pub fn version_args(self) -> Vec<OsString> {
        match self {
            ResizeTool::Sips => vec!["--help".into()],
            ResizeTool::Magick => vec!["-version".into()],
        }
    }

    /// Arguments that resize `src` to exactly the derivative's dimensions and write a JPEG to `dst`
    pub fn resize_args(
        self,
        spec: &DerivativeSpec,
        quality: u8,
        src: &Path,
        dst: &Path,
    ) -> Vec<OsString> {
        match self {
            ResizeTool::Sips => vec![
                "-z".into(),
                spec.height.to_string().into(),
                spec.width.to_string().into(),
                "--setProperty".into(),
                "formatOptions".into(),
                quality.to_string().into(),
                src.into(),
                "--out".into(),
                dst.into(),
            ],
            ResizeTool::Magick => vec![
                src.into(),
                "-resize".into(),
                format!("{}x{}!", spec.width, spec.height).into(),
                "-quality".into(),
                quality.to_string().into(),
                dst.into(),
            ],
        }
    }
}

/// `cwebp` arguments converting `src` to `dst` at `quality`
pub fn webp_args(quality: u8, src: &Path, dst: &Path) -> Vec<OsString> {
    vec![
        "-q".into(),
        quality.to_string().into(),
        src.into(),
        "-o".into(),
        dst.into(),
    ]
}
