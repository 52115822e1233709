//! Inbound/outbound wire types for the chat API.
//!
//! The success shape is identical for shield-produced and model-produced
//! answers, so the client cannot tell which path served it.

use serde::{Deserialize, Serialize};

use crate::upstream::ConversationTurn;

/// Inbound chat request body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    /// Explicit session identifier; absent means degraded peer-keyed mode.
    #[serde(default)]
    pub session_id: Option<String>,
    /// Conversation history, last turn being the user's message.
    #[serde(default)]
    pub contents: Vec<ConversationTurn>,
    /// Upstream model identifier override.
    #[serde(default)]
    pub model: Option<String>,
    /// Attached image for OCR-assisted prompting.
    #[serde(default)]
    pub image: Option<ImagePayload>,
    /// Voice-persona flag; false selects assistant-identity mode.
    #[serde(default)]
    pub is_conversation_mode: bool,
    /// Client-side memory snapshot merged into the session.
    #[serde(default)]
    pub memory_context: Option<MemoryContext>,
}

/// Base64-encoded image attachment.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagePayload {
    /// MIME type of the image.
    pub mime_type: String,
    /// Base64-encoded image bytes.
    pub base64_data: String,
}

/// Client-supplied conversation memory.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryContext {
    /// Mood and topic hints.
    #[serde(default)]
    pub conversation_context: Option<ConversationContext>,
    /// Facts the client has accumulated.
    #[serde(default)]
    pub important_facts: Vec<FactEntry>,
}

/// Mood/topic hints from the client.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationContext {
    /// User mood hint.
    #[serde(default)]
    pub mood: Option<String>,
    /// Current topic hint.
    #[serde(default)]
    pub current_topic: Option<String>,
}

/// One client-supplied fact.
#[derive(Debug, Clone, Deserialize)]
pub struct FactEntry {
    /// Exact fact text.
    pub fact: String,
}

/// Outbound success body — always the candidates shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Answer candidates (always exactly one).
    pub candidates: Vec<Candidate>,
}

/// A single answer candidate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    /// Candidate content.
    pub content: CandidateContent,
}

/// Candidate content parts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateContent {
    /// Ordered text parts.
    pub parts: Vec<CandidatePart>,
    /// Always "model".
    pub role: String,
}

/// One text part of a candidate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidatePart {
    /// Answer text.
    pub text: String,
}

impl ChatResponse {
    /// Wrap answer text in the standard candidates shape.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            candidates: vec![Candidate {
                content: CandidateContent {
                    parts: vec![CandidatePart { text: text.into() }],
                    role: "model".to_owned(),
                },
            }],
        }
    }

    /// Text of the first candidate, for tests and logging.
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.as_str())
    }
}

/// Inbound feedback body — out-of-band logging only.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedbackRequest {
    /// The question the user disliked the answer to.
    #[serde(default)]
    pub question: String,
    /// The answer that was given.
    #[serde(default)]
    pub answer: String,
}

/// Feedback acknowledgment body.
#[derive(Debug, Clone, Serialize)]
pub struct FeedbackAck {
    /// Always "ok".
    pub status: String,
    /// Human-readable acknowledgment.
    pub message: String,
}

/// Failure body carrying one user-safe message.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    /// User-safe error message.
    pub error: String,
}
