//! The wrapper flow: classify, then either pass through to git or
//! collect → generate → commit.

use std::ffi::OsString;

use tracing::debug;

use crate::commit::{Invocation, classify, execute_commit, generate_commit_message};
use crate::config::Config;
use crate::error::AppError;
use crate::git::{Git, MAX_DIFF_LINES, collect_staged_diff};
use crate::llm::{ProviderRegistry, select_transport};

/// Everything the generation path needs, built once when a commit triggers it.
pub struct GenerationContext {
    pub config: Config,
    pub providers: ProviderRegistry,
}

impl GenerationContext {
    /// Resolve configuration and build the provider registry.
    pub fn from_env() -> Result<Self, AppError> {
        let config = Config::load();
        let transport = select_transport(&config)?;
        let providers = ProviderRegistry::standard(&config, transport);
        Ok(Self { config, providers })
    }
}

/// Run nscm for `argv` (the arguments after the program name).
///
/// Returns the exit code of the last git invocation. `context` is only
/// called once a commit with an empty message has staged changes to
/// describe, so every other invocation runs without reading configuration
/// or touching the network.
pub fn run<F>(argv: &[OsString], git: &dyn Git, context: F) -> Result<i32, AppError>
where
    F: FnOnce() -> Result<GenerationContext, AppError>,
{
    match classify(argv) {
        Invocation::Passthrough(args) => {
            debug!("Passing through to git");
            Ok(git.run(&args)?)
        }
        Invocation::Generate(args) => {
            debug!("Empty commit message, generating one");
            generate_and_commit(args, git, context)
        }
    }
}

fn generate_and_commit<F>(
    args: Vec<OsString>,
    git: &dyn Git,
    context: F,
) -> Result<i32, AppError>
where
    F: FnOnce() -> Result<GenerationContext, AppError>,
{
    let diff = collect_staged_diff(git, MAX_DIFF_LINES).map_err(AppError::Diff)?;
    if diff.is_empty() {
        return Err(AppError::NoStagedChanges);
    }

    let context = context()?;

    println!("🧠 Generating commit message…");
    let subject = generate_commit_message(&diff, &context.config, &context.providers)?;
    if subject.is_empty() {
        return Err(AppError::EmptyGeneration);
    }
    println!("💬 {subject}");

    Ok(execute_commit(git, args, &subject)?)
}
