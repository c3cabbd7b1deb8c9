//! Commit interception: argument classification, subject generation, and the
//! final commit.

pub mod args;
pub mod executor;
pub mod message;
pub mod prompt;

pub use args::{Invocation, classify};
pub use executor::{build_commit_args, execute_commit};
pub use message::{MAX_SUBJECT_CHARS, clean_subject, generate_commit_message};
pub use prompt::{SubjectPrompt, build_subject_prompt, sanitize_diff};
