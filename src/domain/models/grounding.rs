use serde::{Deserialize, Serialize};

/// A citation as the external service reports it: either field may be absent
/// or empty. Raw citations are supplementary metadata and never fail the
/// pipeline; records without both fields are dropped during deduplication.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCitation {
    uri: Option<String>,
    title: Option<String>,
}

impl RawCitation {
    pub fn new(uri: Option<String>, title: Option<String>) -> Self {
        Self { uri, title }
    }

    pub fn uri(&self) -> Option<&str> {
        self.uri.as_deref()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

/// A grounding source surfaced to the caller: one entry per unique locator,
/// first-seen title retained.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroundingSource {
    uri: String,
    title: String,
}

impl GroundingSource {
    pub fn new(uri: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            title: title.into(),
        }
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

/// The raw outcome of one grounded generation call: the model's free-text
/// reply plus whatever citation metadata accompanied it.
#[derive(Debug, Clone)]
pub struct GroundedReply {
    text: String,
    citations: Vec<RawCitation>,
}

impl GroundedReply {
    pub fn new(text: impl Into<String>, citations: Vec<RawCitation>) -> Self {
        Self {
            text: text.into(),
            citations,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn citations(&self) -> &[RawCitation] {
        &self.citations
    }
}
