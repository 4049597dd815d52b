//! # Command Runner
//!
//! The single seam between the inflator and the operating system.
//!
//! The inflator only needs "run this program with these arguments in this directory
//! and give me the exit status and both output streams"; tests substitute a fake.

use std::io;
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Captured result of a finished command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` when the process was terminated by a signal
    pub status: Option<i32>,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }
}

/// Runs an external program to completion
///
/// A non-zero exit is reported through [`CommandOutput::status`], not as an error.
/// An executable that cannot be found must surface as [`io::ErrorKind::NotFound`].
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> io::Result<CommandOutput>;
}

/// Runs commands with [`std::process::Command`]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandRunner;

impl CommandRunner for SystemCommandRunner {
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> io::Result<CommandOutput> {
        // Check if the binary is available before spawning
        let resolved = which::which(program).map_err(|e| {
            io::Error::new(io::ErrorKind::NotFound, format!("{program}: {e}"))
        })?;

        debug!(
            "Executing {} {} in {}",
            resolved.display(),
            args.join(" "),
            cwd.display()
        );

        let output = Command::new(&resolved)
            .args(args)
            .current_dir(cwd)
            .output()?;

        Ok(CommandOutput {
            status: output.status.code(),
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_output_success() {
        let ok = CommandOutput {
            status: Some(0),
            ..CommandOutput::default()
        };
        let failed = CommandOutput {
            status: Some(2),
            ..CommandOutput::default()
        };
        let signalled = CommandOutput::default();

        assert!(ok.success());
        assert!(!failed.success());
        assert!(!signalled.success());
    }

    #[test]
    fn test_missing_program_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = SystemCommandRunner
            .run("kustomize-conventions-no-such-binary", &[], dir.path())
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[cfg(unix)]
    #[test]
    fn test_captures_streams_and_status() {
        let dir = tempfile::tempdir().unwrap();
        let output = SystemCommandRunner
            .run("sh", &["-c", "pwd; echo oops >&2; exit 3"], dir.path())
            .unwrap();

        assert_eq!(output.status, Some(3));
        assert!(!output.success());
        assert_eq!(String::from_utf8_lossy(&output.stderr).trim(), "oops");
        let reported = std::fs::canonicalize(String::from_utf8_lossy(&output.stdout).trim())
            .unwrap();
        assert_eq!(reported, std::fs::canonicalize(dir.path()).unwrap());
    }
}
