//! Responsive `<picture>` markup for the derivative table

use lca_core::SourceConfig;
use std::fmt::Write;

/// `sizes` hint for the full-width hero image
pub const HERO_SIZES: &str =
    "(max-width: 480px) 480px, (max-width: 768px) 768px, (max-width: 1024px) 1024px, 1920px";

/// `sizes` hint for the collection cards
pub const CARD_SIZES: &str = "(max-width: 300px) 300px, (max-width: 450px) 450px, 600px";

/// Picks the `sizes` hint from the source name
pub fn sizes_hint(config: &SourceConfig) -> &'static str {
    if config.stem().contains("hero") {
        HERO_SIZES
    } else {
        CARD_SIZES
    }
}

/// Candidate list `"<prefix>/<file> <width>w, ..."`, using WebP names when `webp` is set
pub fn srcset(config: &SourceConfig, prefix: &str, webp: bool) -> String {
    let prefix = prefix.trim_end_matches('/');
    config
        .derivatives
        .iter()
        .map(|spec| {
            let name = if webp {
                spec.webp_name()
            } else {
                spec.output_name.to_string()
            };
            if prefix.is_empty() {
                format!("{name} {}w", spec.width)
            } else {
                format!("{prefix}/{name} {}w", spec.width)
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// One `<picture>` block with WebP and JPEG sources and a lazy `<img>` fallback
pub fn picture_element(config: &SourceConfig, prefix: &str) -> String {
    let sizes = sizes_hint(config);
    let mut out = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(out, "<!-- {} -->", config.source);
    let _ = writeln!(out, "<picture>");
    let _ = writeln!(
        out,
        "  <source type=\"image/webp\" srcset=\"{}\" sizes=\"{sizes}\">",
        srcset(config, prefix, true)
    );
    let _ = writeln!(
        out,
        "  <source type=\"image/jpeg\" srcset=\"{}\" sizes=\"{sizes}\">",
        srcset(config, prefix, false)
    );
    let _ = writeln!(
        out,
        "  <img src=\"{}\" alt=\"\" loading=\"lazy\" decoding=\"async\">",
        config.source
    );
    let _ = writeln!(out, "</picture>");

    out
}

/// Markup for every source, blocks separated by a blank line
pub fn render_markup(configs: &[SourceConfig], prefix: &str) -> String {
    configs
        .iter()
        .map(|config| picture_element(config, prefix))
        .collect::<Vec<_>>()
        .join("\n")
}
