//! Error types for nscm modules using thiserror.

use thiserror::Error;

/// Boxed cause carried by transport failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors from invoking the underlying git binary.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Failed to run {program}: {source}")]
    SpawnFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    DiffUnavailable(String),
}

/// Errors from commit subject generation.
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("Unsupported provider: {0}")]
    UnsupportedProvider(String),

    #[error("Missing {0}")]
    MissingCredential(&'static str),

    #[error("Request failed ({transport}): {source}")]
    Transport {
        transport: &'static str,
        #[source]
        source: BoxError,
    },

    /// The response body is deliberately not kept: it may echo the diff.
    #[error("API error: HTTP {status}")]
    ProviderHttp { status: u16 },

    #[error("Unexpected response format: {0}")]
    MalformedResponse(String),
}

/// Errors surfaced by the commit wrapper flow.
///
/// Every variant is reported by the binary as a single line and exit code 1.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Failed to read staged diff: {0}")]
    Diff(#[source] GitError),

    #[error(transparent)]
    Git(#[from] GitError),

    #[error("No staged changes.")]
    NoStagedChanges,

    #[error("Generation failed: {0}")]
    Generation(#[from] LlmError),

    #[error("Model returned empty message.")]
    EmptyGeneration,
}
