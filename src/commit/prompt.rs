//! Instructions sent to the model for a commit subject.

use std::sync::LazyLock;

use regex_lite::Regex;

/// CSI and OSC escape sequences, e.g. colour codes from `color.ui=always`.
static ANSI_ESCAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\x1b(?:\[[0-?]*[ -/]*[@-~]|\][^\x07\x1b]*(?:\x07|\x1b\\))").expect("Invalid regex")
});

/// The two messages of a subject request, provider agnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectPrompt {
    /// Style directive.
    pub system: String,
    /// Diff plus the summarization request.
    pub user: String,
}

/// Build the prompt for a single-line commit subject.
///
/// A style hint starting with "conventional" (any case) adds the
/// `type(scope?): subject` requirement.
pub fn build_subject_prompt(diff: &str, style: &str) -> SubjectPrompt {
    let mut system = String::from(
        "Write a short, clear git commit message. \
         Single-line subject only, at most 72 characters, present tense, no trailing period.",
    );
    if style.to_lowercase().starts_with("conventional") {
        system.push_str(" Use the Conventional Commits format: type(scope?): subject.");
    }

    let user = format!(
        "Summarize the staged diff below as a single-line commit subject. \
         Describe the intent and impact of the change, not the code mechanics.\n\n\
         DIFF:\n{}",
        sanitize_diff(diff)
    );

    SubjectPrompt { system, user }
}

/// Strip terminal escape sequences and control characters other than
/// newline and tab.
pub fn sanitize_diff(text: &str) -> String {
    ANSI_ESCAPE
        .replace_all(text, "")
        .chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect()
}
