//! Staged diff collection.

use tracing::debug;

use crate::error::GitError;
use crate::git::runner::Git;

/// Most diff lines forwarded to a provider.
pub const MAX_DIFF_LINES: usize = 500;

/// Line appended when the diff is cut short.
pub const TRUNCATION_MARKER: &str = "... (truncated) ...";

/// Staged changes as text, bounded in size.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StagedDiff {
    pub text: String,
    pub truncated: bool,
    /// Line count before truncation.
    pub total_lines: usize,
}

impl StagedDiff {
    /// True when nothing is staged.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Collect `git diff --cached`, keeping at most `max_lines` lines.
///
/// A non-zero exit from git becomes [`GitError::DiffUnavailable`] carrying
/// git's own error text. Empty output is returned as an empty diff; deciding
/// that nothing is staged is up to the caller.
pub fn collect_staged_diff(git: &dyn Git, max_lines: usize) -> Result<StagedDiff, GitError> {
    let args: Vec<String> = ["diff", "--cached", "--no-color"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let output = git.capture(&args)?;

    if !output.success() {
        let stderr = output.stderr.trim();
        let message = if stderr.is_empty() {
            "failed to get staged diff".to_string()
        } else {
            stderr.to_string()
        };
        return Err(GitError::DiffUnavailable(message));
    }

    if output.stdout.trim().is_empty() {
        return Ok(StagedDiff::default());
    }

    let diff = truncate_lines(&output.stdout, max_lines);
    debug!(
        "Staged diff: {} lines, truncated={}",
        diff.total_lines, diff.truncated
    );
    Ok(diff)
}

/// Keep the first `max_lines` lines of `text`, appending
/// [`TRUNCATION_MARKER`] as one extra line when anything was dropped.
pub fn truncate_lines(text: &str, max_lines: usize) -> StagedDiff {
    let lines: Vec<&str> = text.lines().collect();
    let total_lines = lines.len();

    if total_lines <= max_lines {
        return StagedDiff {
            text: lines.join("\n"),
            truncated: false,
            total_lines,
        };
    }

    let mut kept = lines[..max_lines].to_vec();
    kept.push(TRUNCATION_MARKER);

    StagedDiff {
        text: kept.join("\n"),
        truncated: true,
        total_lines,
    }
}
