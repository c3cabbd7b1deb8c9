//! Final `git commit` with the generated subject.

use std::ffi::OsString;

use crate::error::GitError;
use crate::git::Git;

/// Append `-m <subject>` to the cleaned commit arguments.
pub fn build_commit_args(mut args: Vec<OsString>, subject: &str) -> Vec<OsString> {
    args.push("-m".into());
    args.push(subject.into());
    args
}

/// Run the commit attached to the terminal and return git's exit code.
///
/// A failing commit (hook rejection, nothing to commit) is not retried; its
/// exit code is simply relayed.
pub fn execute_commit(
    git: &dyn Git,
    args: Vec<OsString>,
    subject: &str,
) -> Result<i32, GitError> {
    let commit_args = build_commit_args(args, subject);
    git.run(&commit_args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::runner::MockGit;

    fn args(list: &[&str]) -> Vec<OsString> {
        list.iter().map(OsString::from).collect()
    }

    #[test]
    fn test_build_commit_args_appends_message() {
        let built = build_commit_args(args(&["commit", "-a"]), "fix: typo");
        assert_eq!(built, args(&["commit", "-a", "-m", "fix: typo"]));
    }

    #[test]
    fn test_execute_commit_relays_failure_code() {
        let mut git = MockGit::new();
        git.expect_run()
            .withf(|a| a == args(&["commit", "-m", "feat: x"]).as_slice())
            .times(1)
            .returning(|_| Ok(1));

        let code = execute_commit(&git, args(&["commit"]), "feat: x").unwrap();
        assert_eq!(code, 1);
    }
}
