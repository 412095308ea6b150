//! Lineaycolor asset CLI
//!
//! Command-line interface for generating the placeholder storefront images,
//! the PWA icon set, and the optimized derivatives with their markup.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use lca_canvas::{generate_icons, FontBook, Generator, GeneratorConfig, IconConfig};
use lca_core::{total_derivatives, CANVAS_PRESETS, IMAGE_CONFIGS};
use lca_optimizer::{
    render_markup, Pipeline, PipelineConfig, PipelineReport, ResizeTool, SystemRunner,
};
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lca")]
#[command(about = "Lineaycolor asset tooling - placeholder images, icons and derivatives")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the four placeholder source images
    Generate {
        /// Directory to write the images to
        #[arg(short, long, default_value = ".")]
        out: PathBuf,

        /// Font file to try before the system fonts
        #[arg(long)]
        font: Option<PathBuf>,

        /// JPEG encoding quality (0-100)
        #[arg(long, default_value = "95", value_parser = clap::value_parser!(u8).range(0..=100))]
        quality: u8,
    },

    /// Generate the PWA icons, favicon and Apple touch icon
    Icons {
        /// Directory to write the sized icons to
        #[arg(short, long, default_value = "public/icons")]
        out: PathBuf,

        /// Site root for favicon.ico and apple-touch-icon.png (defaults to the parent of --out)
        #[arg(long)]
        root_dir: Option<PathBuf>,

        /// Font file to try before the system fonts
        #[arg(long)]
        font: Option<PathBuf>,
    },

    /// Resize the sources into derivatives, convert them to WebP and print markup
    Optimize {
        /// Directory holding the source images
        #[arg(long, default_value = ".")]
        source_dir: PathBuf,

        /// Directory to write the derivatives to
        #[arg(short, long, default_value = "images/optimized")]
        output_dir: PathBuf,

        /// Tool used for resizing
        #[arg(long, value_enum, default_value_t = ResizeToolArg::Sips)]
        resize_tool: ResizeToolArg,

        /// WebP encoder executable
        #[arg(long, default_value = "cwebp")]
        webp_program: String,

        /// WebP encoding quality (0-100)
        #[arg(long, default_value = "80", value_parser = clap::value_parser!(u8).range(0..=100))]
        webp_quality: u8,

        /// Path prefix of the derivatives in the markup
        #[arg(long, default_value = "images/optimized")]
        prefix: String,

        /// Skip printing the picture markup
        #[arg(long)]
        no_markup: bool,
    },

    /// Print the picture markup without touching any files
    Markup {
        /// Path prefix of the derivatives in the markup
        #[arg(long, default_value = "images/optimized")]
        prefix: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ResizeToolArg {
    /// macOS sips
    Sips,
    /// ImageMagick 7
    Magick,
}

impl From<ResizeToolArg> for ResizeTool {
    fn from(arg: ResizeToolArg) -> Self {
        match arg {
            ResizeToolArg::Sips => ResizeTool::Sips,
            ResizeToolArg::Magick => ResizeTool::Magick,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Generate { out, font, quality } => generate_sources(out, font, quality)?,

        Commands::Icons {
            out,
            root_dir,
            font,
        } => generate_icon_set(icon_config(out, root_dir), font.as_deref())?,

        Commands::Optimize {
            source_dir,
            output_dir,
            resize_tool,
            webp_program,
            webp_quality,
            prefix,
            no_markup,
        } => {
            let config = PipelineConfig {
                source_dir,
                output_dir,
                resize_tool: resize_tool.into(),
                webp_program,
                webp_quality,
            };
            let markup = (!no_markup).then_some(prefix);
            optimize_images(config, markup)?
        }

        Commands::Markup { prefix } => print_markup(&prefix),
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn generate_sources(out: PathBuf, font: Option<PathBuf>, quality: u8) -> Result<()> {
    let config = GeneratorConfig {
        out_dir: out,
        quality,
        font,
    };

    let generator = Generator::new(config);
    let written = generator
        .generate(CANVAS_PRESETS)
        .context("Failed to generate source images")?;

    println!("Images generated successfully!");
    for (path, preset) in written.iter().zip(CANVAS_PRESETS) {
        println!("- {} ({}x{})", path.display(), preset.width, preset.height);
    }

    Ok(())
}

fn icon_config(out: PathBuf, root_dir: Option<PathBuf>) -> IconConfig {
    match root_dir {
        Some(root_dir) => IconConfig {
            icons_dir: out,
            root_dir,
        },
        None => IconConfig::from_icons_dir(out),
    }
}

fn generate_icon_set(config: IconConfig, font: Option<&Path>) -> Result<()> {
    println!("Generating PWA icons...");

    let fonts = FontBook::load(font);
    let report = generate_icons(&config, &fonts).with_context(|| {
        format!(
            "Failed to create icon directories {} and {}",
            config.icons_dir.display(),
            config.root_dir.display()
        )
    })?;

    for path in &report.written {
        println!("✓ Generated {}", path.display());
    }
    for (path, err) in &report.failed {
        println!("✗ Failed to generate {}: {}", path.display(), err);
    }

    println!("Icon generation complete!");
    Ok(())
}

fn optimize_images(config: PipelineConfig, markup_prefix: Option<String>) -> Result<()> {
    println!("Image Optimization for Lineaycolor");
    println!("{}", "=".repeat(50));

    let pipeline = Pipeline::new(config, SystemRunner);
    let report = pipeline
        .run(IMAGE_CONFIGS)
        .context("Image optimization aborted")?;

    print_summary(&report);

    if let Some(prefix) = markup_prefix {
        println!("\n\nGenerated Picture Elements:\n");
        print_markup(&prefix);
    }

    println!(
        "\nOptimization complete! Check the {} directory.",
        pipeline.config().output_dir.display()
    );
    Ok(())
}

fn print_summary(report: &PipelineReport) {
    println!(
        "\nCreated {} of {} derivatives ({} WebP), {} failed",
        report.created_count(),
        total_derivatives(IMAGE_CONFIGS),
        report.webp_count(),
        report.failed_count()
    );
    if !report.skipped_sources.is_empty() {
        println!("Skipped missing sources: {}", report.skipped_sources.join(", "));
    }
}

fn print_markup(prefix: &str) {
    print!("{}", render_markup(IMAGE_CONFIGS, prefix));
}
