//! Integration tests for commit argument classification.

use std::ffi::OsString;

use nscm::{Invocation, classify};

fn argv(list: &[&str]) -> Vec<OsString> {
    list.iter().map(OsString::from).collect()
}

#[test]
fn test_real_messages_never_trigger_generation() {
    let messages = vec![
        "fix: handle empty input",
        "a",
        " ",
        "\"\"",
        "''",
        "-",
        "feat(api): add retry logic",
    ];

    for message in messages {
        for flag in ["-m", "--message"] {
            let args = argv(&["commit", "-a", flag, message]);
            let result = classify(&args);
            assert_eq!(
                result,
                Invocation::Passthrough(args.clone()),
                "Failed for {} {:?}",
                flag,
                message
            );
        }
    }
}

#[test]
fn test_blank_messages_trigger_generation_and_are_removed() {
    for message in ["", "\"", "'"] {
        for flag in ["-m", "--message"] {
            let result = classify(&argv(&["commit", "-v", flag, message, "--signoff"]));
            assert!(result.should_generate(), "Failed for {} {:?}", flag, message);
            assert_eq!(
                result.args(),
                argv(&["commit", "-v", "--signoff"]).as_slice(),
                "Failed for {} {:?}",
                flag,
                message
            );
        }
    }
}

#[test]
fn test_trailing_message_flag_triggers_generation() {
    for flag in ["-m", "--message"] {
        let result = classify(&argv(&["commit", flag]));
        assert!(result.should_generate(), "Failed for {}", flag);
        assert_eq!(result.args(), argv(&["commit"]).as_slice());
    }
}

#[test]
fn test_non_commit_commands_are_untouched() {
    let commands = vec![
        argv(&["status"]),
        argv(&["tag", "-a", "v1", "-m", ""]),
        argv(&["merge", "--message", "", "feature"]),
        argv(&["stash", "push", "-m", "'"]),
        argv(&["Commit", "-m", ""]),
        argv(&[""]),
    ];

    for args in commands {
        let result = classify(&args);
        assert!(!result.should_generate(), "Failed for {:?}", args);
        assert_eq!(result.into_args(), args);
    }
}

#[test]
fn test_pathspecs_after_separator_are_never_flags() {
    let pathspecs: [&[&str]; 3] = [&["-m", ""], &["--message", "'"], &["--message="]];
    for pathspec in pathspecs {
        let mut args = argv(&["commit", "-a", "--"]);
        args.extend(argv(pathspec));

        let result = classify(&args);
        assert_eq!(
            result,
            Invocation::Passthrough(args.clone()),
            "Failed for {:?}",
            pathspec
        );
    }
}
