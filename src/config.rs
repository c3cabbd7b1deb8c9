//! Configuration resolution.
//!
//! Each recognized key is resolved from, in order:
//! 1. its `NSCM_*` environment variable
//! 2. `~/.nscmrc` (`key: value` lines)
//! 3. a built-in default
//!
//! The result is computed once per triggering invocation and passed by
//! reference to whatever needs it.

use std::collections::BTreeMap;
use std::env;
use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::{debug, warn};

pub const PROVIDER_ENV_VAR: &str = "NSCM_PROVIDER";
pub const MODEL_ENV_VAR: &str = "NSCM_MODEL";
pub const STYLE_ENV_VAR: &str = "NSCM_STYLE";
pub const TIMEOUT_ENV_VAR: &str = "NSCM_TIMEOUT";
pub const API_BASE_ENV_VAR: &str = "NSCM_API_BASE";
pub const API_KEY_ENV_VAR: &str = "OPENAI_API_KEY";

/// File name of the rc file in the user's home directory.
pub const RC_FILE_NAME: &str = ".nscmrc";

pub const DEFAULT_PROVIDER: &str = "openai";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_STYLE: &str = "conventional";
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 20;

/// Resolved, immutable configuration for one run.
#[derive(Clone)]
pub struct Config {
    pub provider: String,
    pub model: String,
    pub style: String,
    pub api_key: Option<String>,
    pub api_base: String,
    pub timeout: Duration,
    /// Unrecognized rc keys, kept but unused.
    pub extra: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            provider: DEFAULT_PROVIDER.to_string(),
            model: DEFAULT_MODEL.to_string(),
            style: DEFAULT_STYLE.to_string(),
            api_key: None,
            api_base: DEFAULT_API_BASE.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            extra: BTreeMap::new(),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("provider", &self.provider)
            .field("model", &self.model)
            .field("style", &self.style)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_base", &self.api_base)
            .field("timeout", &self.timeout)
            .field("extra", &self.extra)
            .finish()
    }
}

impl Config {
    /// Load configuration from the process environment and `~/.nscmrc`.
    pub fn load() -> Self {
        let rc = match rc_path() {
            Some(path) => read_rc(&path),
            None => BTreeMap::new(),
        };
        let config = Self::resolve(|key| env::var(key).ok(), rc);
        debug!(?config, "Resolved configuration");
        config
    }

    /// Resolve configuration from an env lookup and a parsed rc map.
    ///
    /// Empty environment values count as unset.
    pub fn resolve<F>(lookup: F, mut rc: BTreeMap<String, String>) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let env_value = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let mut pick = |var: &str, key: &str, default: &str| {
            let from_rc = rc.remove(key);
            env_value(var)
                .or(from_rc)
                .unwrap_or_else(|| default.to_string())
        };

        let provider = pick(PROVIDER_ENV_VAR, "provider", DEFAULT_PROVIDER);
        let model = pick(MODEL_ENV_VAR, "model", DEFAULT_MODEL);
        let style = pick(STYLE_ENV_VAR, "style", DEFAULT_STYLE);

        let timeout = match env_value(TIMEOUT_ENV_VAR) {
            Some(v) => match v.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    warn!(
                        "Invalid {} value '{}', using default {}s",
                        TIMEOUT_ENV_VAR, v, DEFAULT_TIMEOUT_SECS
                    );
                    Duration::from_secs(DEFAULT_TIMEOUT_SECS)
                }
            },
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        let api_base = env_value(API_BASE_ENV_VAR)
            .map(|v| v.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        Self {
            provider,
            model,
            style,
            api_key: env_value(API_KEY_ENV_VAR),
            api_base,
            timeout,
            extra: rc,
        }
    }
}

/// Location of the rc file, if a home directory can be determined.
pub fn rc_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(RC_FILE_NAME))
}

/// Read and parse an rc file.
///
/// A missing file is not an error. Any other read failure is logged and the
/// file is treated as empty.
pub fn read_rc(path: &Path) -> BTreeMap<String, String> {
    match std::fs::read_to_string(path) {
        Ok(content) => parse_rc(&content),
        Err(e) if e.kind() == ErrorKind::NotFound => BTreeMap::new(),
        Err(e) => {
            warn!("Failed to read {}: {}", path.display(), e);
            BTreeMap::new()
        }
    }
}

/// Parse `key: value` lines.
///
/// Blank lines, `#` comments and lines without a colon are skipped. The value
/// is everything after the first colon, so URLs survive intact.
pub fn parse_rc(content: &str) -> BTreeMap<String, String> {
    let mut map = BTreeMap::new();

    for raw_line in content.lines() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        map.insert(key.to_string(), value.trim().to_string());
    }

    map
}
