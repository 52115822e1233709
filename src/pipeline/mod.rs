//! Request-processing pipeline.
//!
//! One inbound message flows: validate → session resolve → OCR merge →
//! shield classify (may short-circuit) → topic/fact write-back → search
//! decision + augmentation → persona instruction → cache-checked upstream
//! invocation → armor filter → formatting. Session memory is written on
//! every turn, short-circuit or not.

use std::sync::Arc;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use tracing::{debug, info, warn};

use crate::armor;
use crate::armor::format;
use crate::ocr::{self, TextExtractor};
use crate::persona::{self, PersonaMode};
use crate::search::{decision, splice_search_context, SearchProvider};
use crate::server::wire::{ChatRequest, ChatResponse};
use crate::session::{topics, SessionKey, SessionStore};
use crate::shield::{RuleMatch, Shield};
use crate::upstream::cache::{cache_key, ResponseCache};
use crate::upstream::{GenerativeModel, Role, UpstreamError};

/// Generic user-safe failure message for upstream trouble.
pub const GENERIC_ERROR_MESSAGE: &str =
    "Şu anda bir sorun yaşıyorum. Lütfen biraz sonra tekrar dener misin?";

/// User-safe message for malformed requests.
pub const VALIDATION_ERROR_MESSAGE: &str =
    "Söylediklerini tam olarak anlayamadım. Mesaj geçmişi eksik veya boş görünüyor.";

/// Errors that terminate a request. Everything else in the pipeline is
/// absorbed locally and degrades to a valid (if less enriched) path.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    /// Malformed or missing conversation history — fatal to the request.
    #[error("invalid request: {0}")]
    Validation(String),
    /// Upstream model failure (transport, status, or parse).
    #[error("upstream failure")]
    Upstream(#[source] UpstreamError),
    /// The collaborator refused on policy grounds; the reason is user-visible.
    #[error("content blocked: {reason}")]
    Blocked {
        /// Block reason from the collaborator.
        reason: String,
    },
}

impl ChatError {
    /// HTTP status this error maps to.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::Upstream(_) | Self::Blocked { .. } => 502,
        }
    }

    /// The user-safe message. Raw collaborator bodies never pass through
    /// here — only fixed messages plus the block reason.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(_) => VALIDATION_ERROR_MESSAGE.to_owned(),
            Self::Upstream(_) => GENERIC_ERROR_MESSAGE.to_owned(),
            Self::Blocked { reason } => format!(
                "Bu isteği güvenlik filtreleri nedeniyle yanıtlayamıyorum ({reason})."
            ),
        }
    }
}

impl From<UpstreamError> for ChatError {
    fn from(e: UpstreamError) -> Self {
        match e {
            UpstreamError::Blocked { reason } => Self::Blocked { reason },
            other => Self::Upstream(other),
        }
    }
}

/// The assembled pipeline with all collaborators behind trait seams.
pub struct ChatPipeline {
    shield: Shield,
    sessions: Arc<SessionStore>,
    search: Arc<dyn SearchProvider>,
    model: Arc<dyn GenerativeModel>,
    ocr: Option<Arc<dyn TextExtractor>>,
    cache: ResponseCache,
    default_model: String,
    search_result_count: u8,
    ocr_language: String,
}

impl ChatPipeline {
    /// Assemble the pipeline.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        sessions: Arc<SessionStore>,
        search: Arc<dyn SearchProvider>,
        model: Arc<dyn GenerativeModel>,
        ocr: Option<Arc<dyn TextExtractor>>,
        cache: ResponseCache,
        default_model: String,
        search_result_count: u8,
        ocr_language: String,
    ) -> Self {
        Self {
            shield: Shield::new(Arc::clone(&search)),
            sessions,
            search,
            model,
            ocr,
            cache,
            default_model,
            search_result_count,
            ocr_language,
        }
    }

    /// Session store handle, for the server's periodic sweeper.
    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    /// Response cache handle, for the server's periodic sweeper.
    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    /// Process one chat request end to end.
    ///
    /// # Errors
    ///
    /// Returns [`ChatError`] only for validation failures, upstream
    /// failures, and policy blocks; tool and search trouble is absorbed.
    pub async fn handle(
        &self,
        request: ChatRequest,
        peer_addr: Option<String>,
    ) -> Result<ChatResponse, ChatError> {
        let mut history = request.contents;
        validate_history(&history, request.image.is_some())?;

        let persona = PersonaMode::from_conversation_flag(request.is_conversation_mode);
        let key = SessionKey::resolve(request.session_id.as_deref(), peer_addr.as_deref());
        if key.is_degraded() {
            debug!("no session id supplied, using degraded peer-keyed session");
        }
        let mut session = self.sessions.get_or_create(&key);

        // Client memory merge: facts always (exact-text dedup); mood/topic
        // hints only drive the voice persona.
        if let Some(memory) = request.memory_context {
            session.merge_client_facts(memory.important_facts.into_iter().map(|f| f.fact));
            if persona == PersonaMode::Voice {
                if let Some(ctx) = memory.conversation_context {
                    if let Some(mood) = ctx.mood.filter(|m| !m.is_empty()) {
                        session.user_mood = mood;
                    }
                    if let Some(topic) = ctx.current_topic.filter(|t| !t.is_empty()) {
                        session.current_topic = topic;
                    }
                }
            }
        }

        // OCR merge: extracted image text is prepended to the user prompt.
        let has_image = request.image.is_some();
        if let Some(image) = request.image {
            self.merge_image_text(&mut history, &image.base64_data, &image.mime_type)
                .await;
        }

        let prompt = history.last().map(|turn| turn.text()).unwrap_or_default();
        info!(persona = ?persona, chars = prompt.chars().count(), "processing message");

        // Shield classification. Fact extraction happens inside as a
        // side effect; topics are recomputed on every path.
        let verdict = self.shield.classify(&prompt, persona, &mut session).await;
        session.recent_topics = topics::extract_recent_topics(&history);
        self.sessions.save(&key, session.clone());

        match verdict {
            RuleMatch::Canned(text) | RuleMatch::Tool(text) => {
                debug!("shield short-circuited the request");
                return Ok(ChatResponse::from_text(text));
            }
            RuleMatch::NoMatch => {}
        }

        // Search augmentation. Images bypass search; failures degrade
        // silently to an unaugmented request.
        if !has_image
            && decision::should_search(&prompt, persona, Shield::would_match(&prompt, persona))
        {
            match self.search.search(&prompt, self.search_result_count).await {
                Ok(snippets) if !snippets.is_empty() => {
                    splice_search_context(&mut history, &snippets);
                }
                Ok(_) => debug!("search returned no snippets, continuing unaugmented"),
                Err(e) => debug!(error = %e, "search failed, continuing unaugmented"),
            }
        }

        // Persona instruction is always turn 0 of the outbound history.
        let instruction = persona::build_instruction(persona, &session);
        persona::prepend_instruction(&mut history, instruction);

        // Cache-checked upstream invocation.
        let model_id = request
            .model
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| self.default_model.clone());
        let request_key = cache_key(&history, &model_id);
        let raw_answer = match self.cache.get(&request_key) {
            Some(hit) => {
                debug!("upstream cache hit");
                hit
            }
            None => {
                let answer = self.model.generate(&history, &model_id).await?;
                self.cache.insert(request_key, answer.clone());
                answer
            }
        };

        // Armor, then presentation formatting.
        let filtered = armor::filter_output(&raw_answer);
        let formatted = format::format_response(&filtered, persona);

        Ok(ChatResponse::from_text(formatted))
    }

    async fn merge_image_text(
        &self,
        history: &mut [crate::upstream::ConversationTurn],
        base64_data: &str,
        mime_type: &str,
    ) {
        let Some(extractor) = &self.ocr else {
            warn!("image attached but no OCR collaborator configured, ignoring");
            return;
        };
        let bytes = match STANDARD.decode(base64_data) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(error = %e, "image payload is not valid base64, ignoring");
                return;
            }
        };

        let image_text = extractor
            .extract(&bytes, mime_type, &self.ocr_language)
            .await;

        if let Some(part) = history
            .last_mut()
            .and_then(|turn| turn.parts.first_mut())
        {
            let merged = ocr::merge_into_prompt(&image_text, part.text.as_deref().unwrap_or(""));
            part.text = Some(merged);
        }
    }
}

/// Validate the conversation history shape.
///
/// The history must be non-empty, every turn must carry at least one
/// non-empty part, and the final turn must be a user turn with text (or an
/// attached image standing in for it).
fn validate_history(
    history: &[crate::upstream::ConversationTurn],
    has_image: bool,
) -> Result<(), ChatError> {
    if history.is_empty() {
        return Err(ChatError::Validation("empty conversation history".into()));
    }
    for turn in history {
        let has_content = turn
            .parts
            .iter()
            .any(|p| p.text.as_deref().is_some_and(|t| !t.is_empty()) || p.inline_image.is_some());
        if !has_content {
            return Err(ChatError::Validation("turn without content parts".into()));
        }
    }
    let last = history.last().ok_or_else(|| {
        ChatError::Validation("empty conversation history".into())
    })?;
    if last.role != Role::User {
        return Err(ChatError::Validation("final turn is not a user turn".into()));
    }
    if !last.has_text() && !has_image {
        return Err(ChatError::Validation("final user turn has no text".into()));
    }
    Ok(())
}
