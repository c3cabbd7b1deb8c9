//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::Write;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use git2::{Repository, Signature};
use tempfile::TempDir;

use nscm::GitCli;

/// Separator the fake git writes between recorded arguments.
const ARG_SEPARATOR: char = '\u{1f}';

/// Convert string literals to an owned argument vector.
pub fn argv(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// Like [`argv`], as the raw OS strings the wrapper accepts.
pub fn os_argv(list: &[&str]) -> Vec<OsString> {
    list.iter().map(OsString::from).collect()
}

/// A shell script standing in for `git`.
///
/// Every invocation is appended to a log. `diff` prints a canned staged diff;
/// every other subcommand exits with a fixed code.
pub struct FakeGit {
    pub dir: TempDir,
    pub script: PathBuf,
    log: PathBuf,
}

impl FakeGit {
    /// Fake git whose `diff` prints `diff` and whose other commands exit with `exit_code`.
    pub fn new(diff: &str, exit_code: i32) -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let diff_path = dir.path().join("staged.diff");
        fs::write(&diff_path, diff).expect("Failed to write diff fixture");

        let diff_branch = format!("cat '{}'\n  exit 0", diff_path.display());
        Self::with_diff_branch(dir, &diff_branch, exit_code)
    }

    /// Fake git whose `diff` fails the way git does outside a repository.
    pub fn broken_diff() -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        Self::with_diff_branch(
            dir,
            "echo 'fatal: not a git repository' >&2\n  exit 128",
            0,
        )
    }

    fn with_diff_branch(dir: TempDir, diff_branch: &str, exit_code: i32) -> Self {
        let log = dir.path().join("invocations.log");
        let script = dir.path().join("git");

        let content = format!(
            r#"#!/bin/sh
{{ for arg in "$@"; do printf '%s\037' "$arg"; done; printf '\n'; }} >> '{log}'
if [ "$1" = "diff" ]; then
  {diff_branch}
fi
exit {exit_code}
"#,
            log = log.display(),
        );
        write_executable(&script, &content);

        Self { dir, script, log }
    }

    /// A [`GitCli`] that runs this script.
    pub fn cli(&self) -> GitCli {
        GitCli::with_program(&self.script)
    }

    /// Every recorded invocation, in order.
    pub fn invocations(&self) -> Vec<Vec<String>> {
        let Ok(content) = fs::read_to_string(&self.log) else {
            return Vec::new();
        };
        content
            .lines()
            .map(|line| {
                let mut args: Vec<String> =
                    line.split(ARG_SEPARATOR).map(|s| s.to_string()).collect();
                // Every argument is followed by a separator, leaving one empty tail.
                args.pop();
                args
            })
            .collect()
    }
}

fn write_executable(path: &Path, content: &str) {
    {
        let mut file = File::create(path).expect("Failed to create script");
        file.write_all(content.as_bytes())
            .expect("Failed to write script");
    }

    let mut perms = fs::metadata(path)
        .expect("Failed to get metadata")
        .permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).expect("Failed to set permissions");
}

/// A real git repository for integration tests.
pub struct TestRepo {
    pub dir: TempDir,
    pub repo: Repository,
}

impl TestRepo {
    /// Create a new repository with an identity configured and one empty
    /// initial commit.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let repo = Repository::init(dir.path()).expect("Failed to init git repo");

        {
            let mut config = repo.config().expect("Failed to open repo config");
            config
                .set_str("user.name", "Test User")
                .expect("Failed to set user.name");
            config
                .set_str("user.email", "test@example.com")
                .expect("Failed to set user.email");
            config
                .set_bool("commit.gpgsign", false)
                .expect("Failed to disable signing");
        }

        {
            let sig = Signature::now("Test User", "test@example.com")
                .expect("Failed to create signature");
            let tree_id = repo
                .index()
                .expect("Failed to get index")
                .write_tree()
                .expect("Failed to write tree");
            let tree = repo.find_tree(tree_id).expect("Failed to find tree");
            repo.commit(Some("HEAD"), &sig, &sig, "init", &tree, &[])
                .expect("Failed to create initial commit");
        }

        Self { dir, repo }
    }

    /// Write a file into the working tree and stage it.
    pub fn stage(&self, name: &str, content: &str) {
        fs::write(self.dir.path().join(name), content).expect("Failed to write file");
        let mut index = self.repo.index().expect("Failed to get index");
        index
            .add_path(Path::new(name))
            .expect("Failed to add file");
        index.write().expect("Failed to write index");
    }

    /// Write a file into the working tree without staging it.
    pub fn write_unstaged(&self, name: &str, content: &str) {
        fs::write(self.dir.path().join(name), content).expect("Failed to write file");
    }

    /// A [`GitCli`] running the system git inside this repository.
    pub fn cli(&self) -> GitCli {
        GitCli::new().current_dir(self.dir.path())
    }

    /// Summary line of the HEAD commit.
    pub fn head_summary(&self) -> String {
        let head = self
            .repo
            .head()
            .and_then(|h| h.peel_to_commit())
            .expect("Failed to resolve HEAD");
        head.summary().unwrap_or_default().to_string()
    }
}
