use async_trait::async_trait;
use serde_json::Value;

use crate::domain::{DomainError, GroundedReply};

/// An interface for issuing generation requests to an external AI service.
///
/// Implementors encapsulate transport, serialization, credential handling,
/// and vendor-specific API details. Use cases receive a client by injection,
/// so the pipeline stays testable against a fake and free of hidden global
/// state.
#[async_trait]
pub trait GenerativeClient: Send + Sync {
    /// Free-text generation with the service's web-search tool enabled.
    ///
    /// Returns the model's reply text together with any citation metadata
    /// the service attached to it.
    async fn generate_grounded(&self, prompt: &str) -> Result<GroundedReply, DomainError>;

    /// Structured generation constrained by a declared output schema.
    ///
    /// The returned body is expected to be directly parseable as the
    /// schema's target type, with no fence stripping.
    async fn generate_structured(&self, prompt: &str, schema: &Value)
        -> Result<String, DomainError>;
}
