//! # Inflator Integration Tests
//!
//! Exercises the inflator against a fake command runner so no real kustomize
//! binary is needed.

mod common;

use common::RepoFixture;
use kustomize_conventions::kustomize::{CommandOutput, CommandRunner};
use kustomize_conventions::{inflate, InflateError, ToolsConfig};
use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Records invocations and replays a canned result
struct FakeRunner {
    result: Box<dyn Fn() -> io::Result<CommandOutput>>,
    calls: RefCell<Vec<(String, Vec<String>, PathBuf)>>,
}

impl FakeRunner {
    fn succeeding(stdout: &str) -> Self {
        let stdout = stdout.as_bytes().to_vec();
        Self::with(move || {
            Ok(CommandOutput {
                status: Some(0),
                stdout: stdout.clone(),
                stderr: Vec::new(),
            })
        })
    }

    fn with(result: impl Fn() -> io::Result<CommandOutput> + 'static) -> Self {
        Self {
            result: Box::new(result),
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl CommandRunner for FakeRunner {
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> io::Result<CommandOutput> {
        self.calls.borrow_mut().push((
            program.to_string(),
            args.iter().map(ToString::to_string).collect(),
            cwd.to_path_buf(),
        ));
        (self.result)()
    }
}

const RENDERED: &str = "apiVersion: v1\nkind: ConfigMap\nmetadata:\n  name: rendered\n";

#[test]
fn test_inflate_writes_debug_file() {
    let repo = RepoFixture::empty();
    let app = repo.dir("app");
    repo.write("app/kustomization.yaml", "resources: []\n");
    let runner = FakeRunner::succeeding(RENDERED);

    let outcome = inflate(&app, &ToolsConfig::default(), &runner).unwrap();

    assert_eq!(outcome.output_path, app.join("debug_full.yaml"));
    assert_eq!(outcome.bytes_written, RENDERED.len());
    assert_eq!(fs::read_to_string(&outcome.output_path).unwrap(), RENDERED);

    let calls = runner.calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "kustomize");
    assert_eq!(calls[0].1, vec!["build", "--enable-helm", "."]);
    assert_eq!(calls[0].2, app);
}

#[test]
fn test_inflate_is_idempotent() {
    let repo = RepoFixture::empty();
    let app = repo.dir("app");
    repo.write("app/kustomization.yaml", "resources: []\n");
    let runner = FakeRunner::succeeding(RENDERED);

    let first = inflate(&app, &ToolsConfig::default(), &runner).unwrap();
    let first_bytes = fs::read(&first.output_path).unwrap();
    let second = inflate(&app, &ToolsConfig::default(), &runner).unwrap();

    assert_eq!(first, second);
    assert_eq!(fs::read(&second.output_path).unwrap(), first_bytes);
}

#[test]
fn test_inflate_resolves_relative_path() {
    let runner = FakeRunner::succeeding(RENDERED);

    // Relative input is made absolute against the current directory
    let relative = Path::new("definitely-not-here-relative-app");
    let err = inflate(relative, &ToolsConfig::default(), &runner).unwrap_err();
    match err {
        InflateError::MissingKustomization(path) => assert!(path.is_absolute()),
        other => panic!("Expected MissingKustomization, got {other:?}"),
    }
    assert!(runner.calls.borrow().is_empty());
}

#[test]
fn test_inflate_requires_kustomization() {
    let repo = RepoFixture::empty();
    let app = repo.dir("app");
    let runner = FakeRunner::succeeding(RENDERED);

    let err = inflate(&app, &ToolsConfig::default(), &runner).unwrap_err();

    assert!(matches!(err, InflateError::MissingKustomization(_)));
    assert!(runner.calls.borrow().is_empty());
    assert!(!app.join("debug_full.yaml").exists());
}

#[test]
fn test_inflate_build_failure_reports_stderr() {
    let repo = RepoFixture::empty();
    let app = repo.dir("app");
    repo.write("app/kustomization.yaml", "resources: [missing.yaml]\n");
    let runner = FakeRunner::with(|| {
        Ok(CommandOutput {
            status: Some(1),
            stdout: Vec::new(),
            stderr: b"Error: accumulating resources: missing.yaml\n".to_vec(),
        })
    });

    let err = inflate(&app, &ToolsConfig::default(), &runner).unwrap_err();

    match err {
        InflateError::BuildFailed { status, stderr } => {
            assert_eq!(status, Some(1));
            assert_eq!(stderr, "Error: accumulating resources: missing.yaml");
        }
        other => panic!("Expected BuildFailed, got {other:?}"),
    }
    assert!(!app.join("debug_full.yaml").exists());
}

#[test]
fn test_inflate_tool_not_found() {
    let repo = RepoFixture::empty();
    let app = repo.dir("app");
    repo.write("app/kustomization.yaml", "resources: []\n");
    let runner = FakeRunner::with(|| Err(io::Error::new(io::ErrorKind::NotFound, "kustomize")));
    let config = ToolsConfig {
        kustomize_bin: "kustomize-v5".to_string(),
        enable_helm: false,
    };

    let err = inflate(&app, &config, &runner).unwrap_err();

    match err {
        InflateError::ToolNotFound(tool) => assert_eq!(tool, "kustomize-v5"),
        other => panic!("Expected ToolNotFound, got {other:?}"),
    }
    assert_eq!(runner.calls.borrow()[0].1, vec!["build", "."]);
}

#[test]
fn test_inflate_other_spawn_errors_are_io() {
    let repo = RepoFixture::empty();
    let app = repo.dir("app");
    repo.write("app/kustomization.yaml", "resources: []\n");
    let runner =
        FakeRunner::with(|| Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied")));

    let err = inflate(&app, &ToolsConfig::default(), &runner).unwrap_err();
    assert!(matches!(err, InflateError::Io { .. }));
}

#[test]
fn test_inflate_accepts_kustomization_yml() {
    let repo = RepoFixture::empty();
    let app = repo.dir("app");
    repo.write("app/kustomization.yml", "resources: []\n");
    let runner = FakeRunner::succeeding(RENDERED);

    assert!(inflate(&app, &ToolsConfig::default(), &runner).is_ok());
}
