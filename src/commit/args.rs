//! Detection of `git commit -m ""`.
//!
//! Arguments are handled as raw [`OsString`]s so that non-UTF-8 paths reach
//! git byte for byte.

use std::ffi::{OsStr, OsString};

/// The git subcommand that can trigger generation.
const COMMIT_SUBCOMMAND: &str = "commit";

const SHORT_MESSAGE_FLAG: &str = "-m";
const LONG_MESSAGE_FLAG: &str = "--message";
const LONG_MESSAGE_PREFIX: &[u8] = b"--message=";

/// Everything after this token is a pathspec.
const END_OF_OPTIONS: &str = "--";

/// What to do with the arguments nscm was invoked with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Hand the arguments to git untouched.
    Passthrough(Vec<OsString>),
    /// Generate a subject, then commit with these arguments plus `-m <subject>`.
    /// The empty message flag has already been removed.
    Generate(Vec<OsString>),
}

impl Invocation {
    pub fn should_generate(&self) -> bool {
        matches!(self, Invocation::Generate(_))
    }

    pub fn args(&self) -> &[OsString] {
        match self {
            Invocation::Passthrough(args) | Invocation::Generate(args) => args,
        }
    }

    pub fn into_args(self) -> Vec<OsString> {
        match self {
            Invocation::Passthrough(args) | Invocation::Generate(args) => args,
        }
    }
}

/// A value that counts as "no message": empty, or a lone quote character
/// left over from shell quoting.
fn is_blank_message(value: &[u8]) -> bool {
    matches!(value, b"" | b"\"" | b"'")
}

/// Classify the arguments that follow the program name.
///
/// Only the first message flag decides the outcome. A real message anywhere
/// before an empty one means the user already wrote their subject, so the
/// original arguments are passed through. A message flag with nothing after
/// it is taken as a request to generate. Tokens after `--` are pathspecs and
/// are never read as flags.
pub fn classify(argv: &[OsString]) -> Invocation {
    let Some((first, rest)) = argv.split_first() else {
        return Invocation::Passthrough(argv.to_vec());
    };
    if first != COMMIT_SUBCOMMAND {
        return Invocation::Passthrough(argv.to_vec());
    }

    let mut cleaned = vec![first.clone()];
    let mut should_generate = false;
    let mut i = 0;

    while i < rest.len() {
        let arg: &OsStr = &rest[i];

        if arg == END_OF_OPTIONS {
            cleaned.extend_from_slice(&rest[i..]);
            break;
        }

        if arg == SHORT_MESSAGE_FLAG || arg == LONG_MESSAGE_FLAG {
            match rest.get(i + 1) {
                Some(value) if is_blank_message(value.as_encoded_bytes()) => {
                    should_generate = true;
                    i += 2;
                }
                Some(_) => return Invocation::Passthrough(argv.to_vec()),
                None => {
                    // Dangling flag: arguably a usage error, treated as a
                    // request to generate.
                    should_generate = true;
                    i += 1;
                }
            }
            continue;
        }

        if let Some(value) = arg.as_encoded_bytes().strip_prefix(LONG_MESSAGE_PREFIX) {
            if !is_blank_message(value) {
                return Invocation::Passthrough(argv.to_vec());
            }
            should_generate = true;
            i += 1;
            continue;
        }

        cleaned.push(rest[i].clone());
        i += 1;
    }

    if should_generate {
        Invocation::Generate(cleaned)
    } else {
        Invocation::Passthrough(argv.to_vec())
    }
}
