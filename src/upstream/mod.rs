//! Upstream generative-model invocation.
//!
//! Defines the conversation wire types shared by the whole pipeline, the
//! [`GenerativeModel`] trait that the pipeline talks to, and the production
//! [`GeminiClient`] implementation for the `generateContent` endpoint.
//!
//! The trait seam exists so end-to-end tests can run the full pipeline
//! against an in-process mock instead of the live API.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub mod cache;

// ---------------------------------------------------------------------------
// Conversation types
// ---------------------------------------------------------------------------

/// Conversation participant role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Human user turn (also used for injected context and instructions —
    /// the v1beta API has no dedicated system role).
    User,
    /// Model answer turn.
    Model,
}

/// An inline image attached to a turn part, base64-encoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineImage {
    /// MIME type of the image payload.
    #[serde(rename = "mimeType")]
    pub mime_type: String,
    /// Base64-encoded image bytes.
    pub data: String,
}

/// One part of a conversation turn. At least one of `text`/`inline_image`
/// is present; part order preserves submission order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnPart {
    /// Plain text content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Inline image content.
    #[serde(rename = "inlineData", skip_serializing_if = "Option::is_none")]
    pub inline_image: Option<InlineImage>,
}

/// A single turn of the conversation history.
///
/// Deserialization drops any extra client-side fields (message ids and the
/// like), so the outbound history is always clean.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    /// Who produced this turn.
    pub role: Role,
    /// Ordered content parts.
    pub parts: Vec<TurnPart>,
}

impl ConversationTurn {
    /// Build a plain-text user turn.
    pub fn user_text(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            parts: vec![TurnPart {
                text: Some(text.into()),
                inline_image: None,
            }],
        }
    }

    /// Build a plain-text model turn.
    pub fn model_text(text: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            parts: vec![TurnPart {
                text: Some(text.into()),
                inline_image: None,
            }],
        }
    }

    /// Concatenated text of all text parts.
    pub fn text(&self) -> String {
        self.parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect()
    }

    /// Whether any part carries a non-empty text payload.
    pub fn has_text(&self) -> bool {
        self.parts
            .iter()
            .any(|p| p.text.as_deref().is_some_and(|t| !t.is_empty()))
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors returned by the upstream model collaborator.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// HTTP transport failure, including bounded-timeout expiry.
    #[error("upstream request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// Upstream responded with a non-success status.
    #[error("upstream returned non-success status {status}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Raw response body, for logs only — never shown to the client.
        body: String,
    },
    /// Response body did not match the expected schema.
    #[error("upstream response parse error: {0}")]
    Parse(String),
    /// The collaborator refused the request on safety/policy grounds.
    #[error("upstream blocked the request: {reason}")]
    Blocked {
        /// Block reason reported by the collaborator.
        reason: String,
    },
}

// ---------------------------------------------------------------------------
// Trait seam
// ---------------------------------------------------------------------------

/// An opaque generative-model completion collaborator.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    /// Produce a completion for the given conversation history.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError`] on transport failure, non-success status,
    /// malformed response body, or a policy block.
    async fn generate(
        &self,
        history: &[ConversationTurn],
        model_id: &str,
    ) -> Result<String, UpstreamError>;
}

// ---------------------------------------------------------------------------
// Wire types (pub for integration testing)
// ---------------------------------------------------------------------------

/// `generateContent` response body.
#[doc(hidden)]
#[derive(Debug, Deserialize)]
pub struct GenerateResponse {
    /// Answer candidates.
    #[serde(default)]
    pub candidates: Vec<WireCandidate>,
    /// Prompt-level safety feedback.
    #[serde(rename = "promptFeedback")]
    pub prompt_feedback: Option<PromptFeedback>,
}

/// A single answer candidate.
#[doc(hidden)]
#[derive(Debug, Deserialize)]
pub struct WireCandidate {
    /// Candidate content.
    pub content: Option<WireContent>,
    /// Why generation stopped.
    #[serde(rename = "finishReason")]
    pub finish_reason: Option<String>,
}

/// Candidate content parts.
#[doc(hidden)]
#[derive(Debug, Deserialize)]
pub struct WireContent {
    /// Ordered text parts.
    #[serde(default)]
    pub parts: Vec<WirePart>,
}

/// A single candidate text part.
#[doc(hidden)]
#[derive(Debug, Deserialize)]
pub struct WirePart {
    /// Text payload.
    pub text: Option<String>,
}

/// Prompt-level safety feedback.
#[doc(hidden)]
#[derive(Debug, Deserialize)]
pub struct PromptFeedback {
    /// Block reason, present when the prompt was refused.
    #[serde(rename = "blockReason")]
    pub block_reason: Option<String>,
}

/// Parse a `generateContent` response body into the candidate answer text.
///
/// # Errors
///
/// Returns [`UpstreamError::Blocked`] when the collaborator reports a policy
/// block (prompt-level or a `SAFETY` finish), and [`UpstreamError::Parse`]
/// when the body is malformed or carries no answer text.
#[doc(hidden)]
pub fn parse_response(body: &str) -> Result<String, UpstreamError> {
    let resp: GenerateResponse =
        serde_json::from_str(body).map_err(|e| UpstreamError::Parse(e.to_string()))?;

    if let Some(reason) = resp
        .prompt_feedback
        .and_then(|f| f.block_reason)
        .filter(|r| !r.is_empty())
    {
        return Err(UpstreamError::Blocked { reason });
    }

    let candidate = resp
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| UpstreamError::Parse("missing candidates[0]".to_owned()))?;

    if candidate.finish_reason.as_deref() == Some("SAFETY") {
        return Err(UpstreamError::Blocked {
            reason: "SAFETY".to_owned(),
        });
    }

    let text: String = candidate
        .content
        .map(|c| {
            c.parts
                .into_iter()
                .filter_map(|p| p.text)
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();

    if text.is_empty() {
        return Err(UpstreamError::Parse(
            "candidate carries no answer text".to_owned(),
        ));
    }

    Ok(text)
}

// ---------------------------------------------------------------------------
// Production client
// ---------------------------------------------------------------------------

/// Production client for the Gemini-style `generateContent` endpoint.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl GeminiClient {
    /// Create a client with a bounded per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: std::time::Duration,
    ) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            client,
        })
    }
}

#[async_trait]
impl GenerativeModel for GeminiClient {
    async fn generate(
        &self,
        history: &[ConversationTurn],
        model_id: &str,
    ) -> Result<String, UpstreamError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url.trim_end_matches('/'),
            model_id,
            self.api_key
        );

        let response = self
            .client
            .post(&url)
            .header("content-type", "application/json")
            .json(&serde_json::json!({ "contents": history }))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(UpstreamError::Http {
                status: status.as_u16(),
                body,
            });
        }

        parse_response(&body)
    }
}
