//! Git operations via the system `git` binary.

pub mod diff;
pub mod runner;

pub use diff::{MAX_DIFF_LINES, StagedDiff, TRUNCATION_MARKER, collect_staged_diff, truncate_lines};
pub use runner::{Git, GitCli, GitOutput};
