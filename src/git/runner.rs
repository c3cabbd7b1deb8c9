//! Child-process access to the system `git` binary.
//!
//! All operations use `std::process::Command`, inheriting the user's existing
//! git config, hooks, editor and credential store.

use std::ffi::{OsStr, OsString};
use std::path::PathBuf;
use std::process::{Command, ExitStatus};

use tracing::debug;

use crate::error::GitError;

/// Captured result of a git invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GitOutput {
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl GitOutput {
    pub fn success(&self) -> bool {
        self.code == 0
    }
}

/// The two ways nscm talks to git.
#[cfg_attr(test, mockall::automock)]
pub trait Git {
    /// Run git with stdout/stderr captured.
    fn capture(&self, args: &[String]) -> Result<GitOutput, GitError>;

    /// Run git attached to the current terminal and return its exit code.
    ///
    /// Arguments are forwarded as raw OS strings.
    fn run(&self, args: &[OsString]) -> Result<i32, GitError>;
}

/// [`Git`] implementation that spawns a real binary.
#[derive(Debug, Clone)]
pub struct GitCli {
    program: OsString,
    work_dir: Option<PathBuf>,
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new()
    }
}

impl GitCli {
    pub fn new() -> Self {
        Self::with_program("git")
    }

    /// Use a different executable in place of `git`.
    pub fn with_program(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            work_dir: None,
        }
    }

    /// Run every invocation from `dir` instead of the current directory.
    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.work_dir = Some(dir.into());
        self
    }

    fn command<S: AsRef<OsStr>>(&self, args: &[S]) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(args);
        if let Some(dir) = &self.work_dir {
            cmd.current_dir(dir);
        }
        cmd
    }

    fn spawn_error(&self, source: std::io::Error) -> GitError {
        GitError::SpawnFailed {
            program: self.program.to_string_lossy().into_owned(),
            source,
        }
    }
}

impl Git for GitCli {
    fn capture(&self, args: &[String]) -> Result<GitOutput, GitError> {
        debug!(?args, "git (captured)");
        let output = self
            .command(args)
            .output()
            .map_err(|e| self.spawn_error(e))?;

        Ok(GitOutput {
            code: exit_code(output.status),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }

    fn run(&self, args: &[OsString]) -> Result<i32, GitError> {
        debug!(?args, "git");
        let status = self
            .command(args)
            .status()
            .map_err(|e| self.spawn_error(e))?;

        Ok(exit_code(status))
    }
}

/// Map a child's exit status to the code this process should exit with.
///
/// A child killed by a signal maps to `128 + signal`, as shells report it.
fn exit_code(status: ExitStatus) -> i32 {
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    status.code().unwrap_or(1)
}
