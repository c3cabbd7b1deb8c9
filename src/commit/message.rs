//! Commit subject generation.

use std::time::Instant;

use tracing::debug;

use crate::config::Config;
use crate::error::LlmError;
use crate::git::StagedDiff;
use crate::llm::ProviderRegistry;

/// Hard cap on the subject length, whatever the model was asked for.
pub const MAX_SUBJECT_CHARS: usize = 120;

/// Ask the configured provider for a subject and reduce it to one line.
///
/// An empty result is returned as-is; the caller decides how to report it.
pub fn generate_commit_message(
    diff: &StagedDiff,
    config: &Config,
    providers: &ProviderRegistry,
) -> Result<String, LlmError> {
    let provider = providers.get(&config.provider)?;

    debug!(
        "Generating subject with {} ({}), style '{}', {} diff chars",
        provider.id(),
        config.model,
        config.style,
        diff.text.len()
    );

    let start = Instant::now();
    let raw = provider.generate_subject(&diff.text, &config.model, &config.style)?;
    debug!("Generation took {}ms", start.elapsed().as_millis());

    Ok(clean_subject(&raw))
}

/// First line of `raw`, trimmed and capped at [`MAX_SUBJECT_CHARS`] characters.
pub fn clean_subject(raw: &str) -> String {
    let first_line = raw.trim().lines().next().unwrap_or("").trim();

    match first_line.char_indices().nth(MAX_SUBJECT_CHARS) {
        Some((cut, _)) => first_line[..cut].trim_end().to_string(),
        None => first_line.to_string(),
    }
}
