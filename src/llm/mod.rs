//! Remote text generation.

pub mod openai;
pub mod router;
pub mod transport;

pub use openai::OpenAiProvider;
pub use router::{ProviderRegistry, SubjectProvider};
pub use transport::{HttpResponse, HttpTransport, ReqwestTransport, select_transport};
