//! nscm - CLI entry point.

use std::ffi::OsString;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use nscm::{GenerationContext, GitCli};

/// Environment variable holding the tracing filter.
const LOG_ENV_VAR: &str = "NSCM_LOG";

/// Drop-in git wrapper that writes the subject for `git commit -m ""`.
///
/// Help and version flags are not handled here so that `nscm --help` reaches
/// git like any other argument.
#[derive(Parser, Debug)]
#[command(name = "nscm")]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Arguments forwarded to git
    #[arg(
        trailing_var_arg = true,
        allow_hyphen_values = true,
        num_args = 0..,
        value_parser = clap::value_parser!(OsString)
    )]
    git_args: Vec<OsString>,
}

/// Parse raw process arguments (program name first) into git arguments.
///
/// A `--` is placed before the user's arguments so clap consumes that one
/// and hands everything after it over verbatim, including a leading `--`.
fn parse_git_args<I>(raw: I) -> Result<Vec<OsString>, clap::Error>
where
    I: IntoIterator<Item = OsString>,
{
    let mut raw = raw.into_iter();
    let program = raw.next().unwrap_or_else(|| OsString::from("nscm"));
    let argv = std::iter::once(program)
        .chain(std::iter::once(OsString::from("--")))
        .chain(raw);
    Ok(Cli::try_parse_from(argv)?.git_args)
}

fn main() -> ExitCode {
    init_tracing();
    let git_args = match parse_git_args(std::env::args_os()) {
        Ok(args) => args,
        Err(e) => e.exit(),
    };

    let git = GitCli::new();
    match nscm::run(&git_args, &git, GenerationContext::from_env) {
        Ok(code) => ExitCode::from(u8::try_from(code).unwrap_or(1)),
        Err(e) => {
            eprintln!("❌ {e}");
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr so nothing mixes into git's stdout.
fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
