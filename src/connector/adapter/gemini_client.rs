use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::application::GenerativeClient;
use crate::domain::{DomainError, GroundedReply, RawCitation};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const API_PATH_PREFIX: &str = "/v1beta/models";

/// Generative Language API request payload.
#[derive(serde::Serialize)]
struct ApiRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tools: Option<Vec<Tool>>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig<'a>>,
}

#[derive(serde::Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(serde::Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(serde::Serialize)]
struct Tool {
    #[serde(rename = "googleSearch")]
    google_search: Value,
}

#[derive(serde::Serialize)]
struct GenerationConfig<'a> {
    #[serde(rename = "responseMimeType")]
    response_mime_type: &'a str,
    #[serde(rename = "responseSchema")]
    response_schema: &'a Value,
}

/// Minimal subset of the Generative Language API response we care about.
#[derive(Deserialize)]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
    #[serde(rename = "groundingMetadata")]
    grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}

#[derive(Deserialize)]
struct GroundingMetadata {
    #[serde(rename = "groundingChunks", default)]
    grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Deserialize)]
struct GroundingChunk {
    web: Option<WebSource>,
}

#[derive(Deserialize)]
struct WebSource {
    uri: Option<String>,
    title: Option<String>,
}

/// Map a failed request to the domain taxonomy.
///
/// Anything that prevented the call from completing is a service problem;
/// retry policy, if any, belongs to the caller.
fn classify_request_error(e: &reqwest::Error) -> DomainError {
    if e.is_connect() {
        DomainError::unavailable(format!("connection failed: {e}"))
    } else if e.is_timeout() {
        DomainError::unavailable(format!("request timed out: {e}"))
    } else {
        DomainError::unavailable(format!("request failed: {e}"))
    }
}

/// Map a non-success HTTP status to the domain taxonomy.
///
/// A rejected credential is a configuration problem the user can act on;
/// every other status (quota, server errors, bad gateway) reads as the
/// service being unavailable.
fn classify_status(status: StatusCode) -> DomainError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            DomainError::configuration(format!("API rejected the credential ({status})"))
        }
        _ => DomainError::unavailable(format!("API returned {status}")),
    }
}

/// HTTP client for Google's Generative Language API (Gemini).
///
/// Implements [`GenerativeClient`] so the use cases stay decoupled from
/// transport and vendor details. The client owns the single configured
/// credential; its absence surfaces as a configuration error at the top of
/// every operation, before any network traffic.
///
/// Configuration via environment variables:
///
/// ```text
/// GEMINI_API_KEY=...                                        (credential)
/// GEMINI_BASE_URL=https://generativelanguage.googleapis.com (default)
/// GEMINI_MODEL=gemini-2.5-flash                             (default)
/// ```
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    /// Full endpoint URL (base + model path + `:generateContent`).
    url: String,
}

impl GeminiClient {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        let base: String = base_url.into();
        let model: String = model.into();
        let url = format!(
            "{}{API_PATH_PREFIX}/{model}:generateContent",
            base.trim_end_matches('/')
        );
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            model,
            url,
        }
    }

    /// Construct from environment variables, with an optional explicit key
    /// taking precedence over `GEMINI_API_KEY`.
    pub fn from_env(api_key: Option<String>) -> Self {
        let key = api_key
            .or_else(|| std::env::var("GEMINI_API_KEY").ok())
            .unwrap_or_default();
        let base =
            std::env::var("GEMINI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let model = std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Self::new(key, model, base)
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Credential check, run before any request is issued.
    fn require_credential(&self) -> Result<(), DomainError> {
        if self.api_key.trim().is_empty() {
            return Err(DomainError::configuration(
                "no API key configured; set GEMINI_API_KEY",
            ));
        }
        Ok(())
    }

    async fn send(&self, request: &ApiRequest<'_>) -> Result<ApiResponse, DomainError> {
        self.require_credential()?;

        let response = self
            .client
            .post(&self.url)
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| classify_request_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("GeminiClient: API returned {status}: {body}");
            return Err(classify_status(status));
        }

        response
            .json()
            .await
            .map_err(|e| DomainError::malformed(format!("failed to decode API response: {e}")))
    }
}

impl ApiResponse {
    /// Concatenated text of the first candidate's parts.
    fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .map(|p| p.text.as_str())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }

    /// Citation metadata of the first candidate, raw and unfiltered.
    fn citations(&self) -> Vec<RawCitation> {
        self.candidates
            .first()
            .and_then(|c| c.grounding_metadata.as_ref())
            .map(|metadata| {
                metadata
                    .grounding_chunks
                    .iter()
                    .filter_map(|chunk| chunk.web.as_ref())
                    .map(|web| RawCitation::new(web.uri.clone(), web.title.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[async_trait]
impl GenerativeClient for GeminiClient {
    async fn generate_grounded(&self, prompt: &str) -> Result<GroundedReply, DomainError> {
        let request = ApiRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            tools: Some(vec![Tool {
                google_search: Value::Object(Default::default()),
            }]),
            generation_config: None,
        };

        let response = self.send(&request).await?;
        let text = response.text();
        debug!("GeminiClient grounded reply: {text}");

        Ok(GroundedReply::new(text, response.citations()))
    }

    async fn generate_structured(
        &self,
        prompt: &str,
        schema: &Value,
    ) -> Result<String, DomainError> {
        let request = ApiRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            tools: None,
            generation_config: Some(GenerationConfig {
                response_mime_type: "application/json",
                response_schema: schema,
            }),
        };

        let response = self.send(&request).await?;
        Ok(response.text())
    }
}
