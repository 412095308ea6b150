//! End-to-end pipeline runs against a scripted tool runner

use lca_core::{total_derivatives, DerivativeSpec, SourceConfig, IMAGE_CONFIGS};
use lca_optimizer::{
    DerivativeOutcome, Error, Pipeline, PipelineConfig, ResizeTool, Result, ToolOutput, ToolRunner,
};
use std::cell::RefCell;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Records every call and writes an empty file at the last argument on success
#[derive(Default)]
struct FakeRunner {
    calls: RefCell<Vec<(String, Vec<OsString>)>>,
    missing: Vec<&'static str>,
    failing_outputs: Vec<&'static str>,
}

impl FakeRunner {
    fn calls_to(&self, program: &str) -> usize {
        self.calls.borrow().iter().filter(|(p, _)| p == program).count()
    }
}

impl ToolRunner for FakeRunner {
    fn run(&self, program: &str, args: &[OsString]) -> Result<ToolOutput> {
        self.calls
            .borrow_mut()
            .push((program.to_string(), args.to_vec()));

        if self.missing.iter().any(|m| *m == program) {
            return Err(Error::Spawn {
                program: program.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
            });
        }

        let Some(target) = args.last().map(PathBuf::from) else {
            return Ok(ToolOutput::ok());
        };
        let name = target.file_name().and_then(|n| n.to_str()).unwrap_or("");
        if self.failing_outputs.iter().any(|f| *f == name) {
            return Ok(ToolOutput::failed(1, "Error: cannot process"));
        }
        if target.parent().is_some_and(Path::is_dir) {
            std::fs::write(&target, b"")?;
        }
        Ok(ToolOutput::ok())
    }
}

fn write_sources(dir: &Path, skip: &[&str]) {
    for config in IMAGE_CONFIGS {
        if !skip.contains(&config.source) {
            std::fs::write(dir.join(config.source), b"jpeg").unwrap();
        }
    }
}

fn config_for(dir: &Path) -> PipelineConfig {
    PipelineConfig {
        source_dir: dir.to_path_buf(),
        output_dir: dir.join("images/optimized"),
        ..PipelineConfig::default()
    }
}

fn files_in(dir: &Path, extension: &str) -> usize {
    std::fs::read_dir(dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|x| x == extension))
        .count()
}

#[test]
fn test_full_run_creates_every_derivative() {
    let dir = tempfile::tempdir().unwrap();
    write_sources(dir.path(), &[]);
    let config = config_for(dir.path());
    let output_dir = config.output_dir.clone();
    let runner = FakeRunner::default();

    let report = Pipeline::new(config, &runner).run(IMAGE_CONFIGS).unwrap();

    let expected = total_derivatives(IMAGE_CONFIGS);
    assert_eq!(report.created_count(), expected);
    assert_eq!(report.webp_count(), expected);
    assert_eq!(report.failed_count(), 0);
    assert!(report.skipped_sources.is_empty());
    assert_eq!(runner.calls_to("sips"), expected + 1);
    assert_eq!(runner.calls_to("cwebp"), expected);
    assert_eq!(files_in(&output_dir, "jpg"), expected);
    assert_eq!(files_in(&output_dir, "webp"), expected);
}

#[test]
fn test_resize_invocation_shape() {
    let dir = tempfile::tempdir().unwrap();
    write_sources(dir.path(), &[]);
    let config = config_for(dir.path());
    let output_dir = config.output_dir.clone();
    let runner = FakeRunner::default();

    Pipeline::new(config, &runner).run(&IMAGE_CONFIGS[..1]).unwrap();

    let calls = runner.calls.borrow();
    assert_eq!(calls[0], ("sips".to_string(), vec![OsString::from("--help")]));

    let (program, args) = &calls[1];
    assert_eq!(program, "sips");
    assert_eq!(args[..6], ["-z", "1080", "1920", "--setProperty", "formatOptions", "85"]);
    assert_eq!(args[6], dir.path().join("hero-image.jpg").into_os_string());
    assert_eq!(args[8], output_dir.join("hero-1920w.jpg").into_os_string());

    let (program, args) = &calls[2];
    assert_eq!(program, "cwebp");
    assert_eq!(args[..2], ["-q", "80"]);
    assert_eq!(args[4], output_dir.join("hero-1920w.webp").into_os_string());
}

#[test]
fn test_missing_source_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    write_sources(dir.path(), &["collection2.jpg"]);
    let runner = FakeRunner::default();

    let report = Pipeline::new(config_for(dir.path()), &runner)
        .run(IMAGE_CONFIGS)
        .unwrap();

    assert_eq!(report.skipped_sources, ["collection2.jpg"]);
    assert_eq!(report.created_for("collection2.jpg"), 0);
    for source in ["hero-image.jpg", "collection1.jpg", "collection3.jpg"] {
        assert!(report.created_for(source) > 0, "{source}");
    }
}

#[test]
fn test_missing_resize_tool_aborts_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    write_sources(dir.path(), &[]);
    let config = config_for(dir.path());
    let output_dir = config.output_dir.clone();
    let runner = FakeRunner {
        missing: vec!["sips"],
        ..FakeRunner::default()
    };

    let err = Pipeline::new(config, &runner).run(IMAGE_CONFIGS).unwrap_err();

    assert!(matches!(err, Error::ToolUnavailable { ref program, .. } if program == "sips"));
    assert!(!output_dir.exists());
    assert_eq!(runner.calls.borrow().len(), 1);
}

#[test]
fn test_failing_version_check_counts_as_unavailable() {
    struct BrokenVersionCheck;

    impl ToolRunner for BrokenVersionCheck {
        fn run(&self, _program: &str, _args: &[OsString]) -> Result<ToolOutput> {
            Ok(ToolOutput::failed(127, "command not found"))
        }
    }

    let dir = tempfile::tempdir().unwrap();
    let pipeline = Pipeline::new(config_for(dir.path()), BrokenVersionCheck);
    assert!(matches!(
        pipeline.check_tools(),
        Err(Error::ToolUnavailable { .. })
    ));
}

#[test]
fn test_missing_webp_tool_is_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    write_sources(dir.path(), &[]);
    let config = config_for(dir.path());
    let output_dir = config.output_dir.clone();
    let runner = FakeRunner {
        missing: vec!["cwebp"],
        ..FakeRunner::default()
    };

    let report = Pipeline::new(config, &runner).run(IMAGE_CONFIGS).unwrap();

    let expected = total_derivatives(IMAGE_CONFIGS);
    assert_eq!(report.created_count(), expected);
    assert_eq!(report.webp_count(), 0);
    assert_eq!(files_in(&output_dir, "jpg"), expected);
    assert_eq!(files_in(&output_dir, "webp"), 0);
}

#[test]
fn test_one_failed_derivative_does_not_stop_the_batch() {
    let dir = tempfile::tempdir().unwrap();
    write_sources(dir.path(), &[]);
    let runner = FakeRunner {
        failing_outputs: vec!["hero-1440w.jpg", "collection3-300w.webp"],
        ..FakeRunner::default()
    };

    let report = Pipeline::new(config_for(dir.path()), &runner)
        .run(IMAGE_CONFIGS)
        .unwrap();

    let expected = total_derivatives(IMAGE_CONFIGS);
    assert_eq!(report.failed_count(), 1);
    assert_eq!(report.created_count(), expected - 1);
    assert_eq!(report.webp_count(), expected - 2);
    // No WebP attempt for the derivative that failed to resize.
    assert_eq!(runner.calls_to("cwebp"), expected - 1);

    let failed = &report.results[1];
    assert_eq!(failed.spec.output_name, "hero-1440w.jpg");
    assert!(matches!(failed.outcome, DerivativeOutcome::Failed(_)));
}

#[test]
fn test_magick_backend_availability_check() {
    let dir = tempfile::tempdir().unwrap();
    let runner = FakeRunner::default();
    let config = PipelineConfig {
        resize_tool: ResizeTool::Magick,
        ..config_for(dir.path())
    };

    Pipeline::new(config, &runner).run(&[]).unwrap();

    assert_eq!(runner.calls.borrow()[0].0, "magick");
    assert_eq!(runner.calls.borrow()[0].1, ["-version"]);
}

#[test]
fn test_invalid_config_aborts_before_any_tool_runs() {
    static SPECS: &[DerivativeSpec] = &[DerivativeSpec::new(300, 400, "bad-300w.jpg")];
    let bad = SourceConfig {
        source: "bad.jpg",
        quality: 150,
        derivatives: SPECS,
    };

    let dir = tempfile::tempdir().unwrap();
    let config = config_for(dir.path());
    let output_dir = config.output_dir.clone();
    let runner = FakeRunner::default();

    let err = Pipeline::new(config, &runner).run(&[bad]).unwrap_err();

    assert!(matches!(
        err,
        Error::Config(lca_core::Error::InvalidQuality { quality: 150, .. })
    ));
    assert!(runner.calls.borrow().is_empty());
    assert!(!output_dir.exists());
}
