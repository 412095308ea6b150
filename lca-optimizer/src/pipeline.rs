//! Derivative generation pipeline
//!
//! For every source in the table the pipeline resizes the image once per
//! derivative and then tries to convert each result to WebP. Only a missing
//! resize tool stops the run; everything else is reported and skipped.

use crate::runner::ToolRunner;
use crate::tools::webp_args;
use crate::{Error, PipelineConfig, Result};
use lca_core::{DerivativeSpec, SourceConfig};
use std::path::{Path, PathBuf};

/// What happened to a single derivative
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DerivativeOutcome {
    /// JPEG written; `webp` tells whether the WebP twin was written too
    Created { webp: bool },
    /// The resize tool failed; nothing was written for this derivative
    Failed(String),
}

/// Result of one attempted derivative
#[derive(Debug, Clone)]
pub struct DerivativeResult {
    /// Source file name
    pub source: &'static str,
    /// Derivative that was attempted
    pub spec: DerivativeSpec,
    /// JPEG output path
    pub path: PathBuf,
    /// Outcome
    pub outcome: DerivativeOutcome,
}

/// Summary of a pipeline run
#[derive(Debug, Clone, Default)]
pub struct PipelineReport {
    /// One entry per attempted derivative, in table order
    pub results: Vec<DerivativeResult>,
    /// Sources that were missing on disk
    pub skipped_sources: Vec<&'static str>,
}

impl PipelineReport {
    /// Number of JPEG derivatives written
    pub fn created_count(&self) -> usize {
        self.results
            .iter()
            .filter(|r| matches!(r.outcome, DerivativeOutcome::Created { .. }))
            .count()
    }

    /// Number of WebP twins written
    pub fn webp_count(&self) -> usize {
        self.results
            .iter()
            .filter(|r| r.outcome == DerivativeOutcome::Created { webp: true })
            .count()
    }

    /// Number of derivatives the resize tool failed on
    pub fn failed_count(&self) -> usize {
        self.results
            .iter()
            .filter(|r| matches!(r.outcome, DerivativeOutcome::Failed(_)))
            .count()
    }

    /// Number of JPEG derivatives written for `source`
    pub fn created_for(&self, source: &str) -> usize {
        self.results
            .iter()
            .filter(|r| r.source == source)
            .filter(|r| matches!(r.outcome, DerivativeOutcome::Created { .. }))
            .count()
    }
}

/// Sequential derivative pipeline over an injected tool runner
pub struct Pipeline<R> {
    config: PipelineConfig,
    runner: R,
}

impl<R: ToolRunner> Pipeline<R> {
    /// Creates a new pipeline
    pub fn new(config: PipelineConfig, runner: R) -> Self {
        Self { config, runner }
    }

    /// Gets the pipeline configuration
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Verifies that the resize tool can be run
    pub fn check_tools(&self) -> Result<()> {
        let tool = self.config.resize_tool;
        let unavailable = |reason: String| Error::ToolUnavailable {
            program: tool.program().to_string(),
            reason,
        };

        match self.runner.run_checked(tool.program(), &tool.version_args()) {
            Ok(_) => Ok(()),
            Err(Error::Spawn { source, .. }) => Err(unavailable(source.to_string())),
            Err(err) => Err(unavailable(err.to_string())),
        }
    }

    /// Runs the whole table.
    ///
    /// Fails before touching the filesystem if a config is invalid or the
    /// resize tool is missing, and fails if the output directory cannot be
    /// created. Per-source and per-derivative problems end up in the report
    /// instead.
    pub fn run(&self, configs: &[SourceConfig]) -> Result<PipelineReport> {
        for source in configs {
            source.validate()?;
        }
        self.check_tools()?;
        std::fs::create_dir_all(&self.config.output_dir)?;

        let mut report = PipelineReport::default();
        for source in configs {
            let source_path = self.config.source_dir.join(source.source);
            if !source_path.exists() {
                tracing::warn!(source = source.source, "source image not found, skipping");
                report.skipped_sources.push(source.source);
                continue;
            }

            println!("\nProcessing {}...", source.source);
            for spec in source.derivatives {
                let result = self.process_derivative(source, spec, &source_path);
                report.results.push(result);
            }
        }

        Ok(report)
    }

    fn process_derivative(
        &self,
        source: &SourceConfig,
        spec: &DerivativeSpec,
        source_path: &Path,
    ) -> DerivativeResult {
        let tool = self.config.resize_tool;
        let output_path = self.config.output_dir.join(spec.output_name);
        let args = tool.resize_args(spec, source.quality, source_path, &output_path);

        let outcome = match self.runner.run_checked(tool.program(), &args) {
            Ok(_) => {
                println!(
                    "  ✓ Created {} ({}x{})",
                    spec.output_name, spec.width, spec.height
                );
                DerivativeOutcome::Created {
                    webp: self.convert_webp(spec, &output_path),
                }
            }
            Err(err) => {
                println!("  ✗ Failed to create {}: {}", spec.output_name, err);
                tracing::warn!(output = spec.output_name, %err, "resize failed");
                DerivativeOutcome::Failed(err.to_string())
            }
        };

        DerivativeResult {
            source: source.source,
            spec: *spec,
            path: output_path,
            outcome,
        }
    }

    /// Best-effort WebP conversion; returns whether the twin was written
    fn convert_webp(&self, spec: &DerivativeSpec, jpeg_path: &Path) -> bool {
        let webp_name = spec.webp_name();
        let webp_path = jpeg_path.with_file_name(&webp_name);
        let args = webp_args(self.config.webp_quality, jpeg_path, &webp_path);

        match self.runner.run_checked(&self.config.webp_program, &args) {
            Ok(_) => {
                println!("  ✓ Created {webp_name}");
                true
            }
            Err(err) => {
                println!("  ! WebP conversion failed for {webp_name}");
                tracing::warn!(output = %webp_name, %err, "webp conversion failed");
                false
            }
        }
    }
}
