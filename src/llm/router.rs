//! Provider lookup by identifier.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::debug;

use crate::config::Config;
use crate::error::LlmError;
use crate::llm::openai::OpenAiProvider;
use crate::llm::transport::HttpTransport;

/// Something that can turn a staged diff into a commit subject.
///
/// Implementations return the model's raw text; trimming to a single line is
/// done by the caller.
#[cfg_attr(test, mockall::automock)]
pub trait SubjectProvider {
    /// Identifier the provider is registered under.
    fn id(&self) -> &str;

    fn generate_subject(&self, diff: &str, model: &str, style: &str) -> Result<String, LlmError>;
}

/// Providers keyed by identifier.
#[derive(Default)]
pub struct ProviderRegistry {
    providers: BTreeMap<String, Box<dyn SubjectProvider>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in provider, sharing one transport.
    pub fn standard(config: &Config, transport: Arc<dyn HttpTransport>) -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(OpenAiProvider::new(config, transport)));
        registry
    }

    /// Add a provider, replacing any existing one with the same id.
    pub fn register(&mut self, provider: Box<dyn SubjectProvider>) {
        self.providers.insert(provider.id().to_string(), provider);
    }

    pub fn get(&self, id: &str) -> Result<&dyn SubjectProvider, LlmError> {
        debug!("Looking up provider '{}'", id);
        self.providers
            .get(id)
            .map(|p| p.as_ref())
            .ok_or_else(|| LlmError::UnsupportedProvider(id.to_string()))
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.providers.keys().map(String::as_str)
    }
}
