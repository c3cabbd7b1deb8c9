//! nscm - a git wrapper that writes your commit subject.
//!
//! # Overview
//!
//! `nscm` is meant to be aliased to `git`. Every invocation is handed to the
//! real git unchanged, except `git commit -m ""`: for that one nscm reads the
//! staged diff, asks a chat-completion model for a single-line subject, and
//! commits with it.

pub mod app;
pub mod commit;
pub mod config;
pub mod error;
pub mod git;
pub mod llm;

// Re-export commonly used types
pub use app::{GenerationContext, run};
pub use commit::{Invocation, classify};
pub use config::Config;
pub use error::{AppError, GitError, LlmError};
pub use git::{Git, GitCli, StagedDiff};
pub use llm::{HttpTransport, ProviderRegistry, SubjectProvider};
