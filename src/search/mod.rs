//! Web-search collaborator and augmentation.
//!
//! The [`SearchProvider`] trait is the seam for live search; the production
//! [`GoogleSearchClient`] talks to the Custom Search JSON API. Search is
//! strictly best-effort: every failure degrades to "no augmentation" and is
//! never surfaced to the user.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::upstream::ConversationTurn;

pub mod decision;

/// How many snippets a search requests.
pub const DEFAULT_RESULT_COUNT: u8 = 3;

/// Errors from the search collaborator. Always absorbed by the caller.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// HTTP transport failure, including bounded-timeout expiry.
    #[error("search request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// Non-success status from the search API.
    #[error("search returned non-success status {0}")]
    Http(u16),
    /// Response body did not match the expected schema.
    #[error("search response parse error: {0}")]
    Parse(String),
}

/// An opaque web-search collaborator returning short text snippets.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Run one query and return up to `count` result snippets.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] on transport, status, or schema failures.
    /// An empty snippet list is a valid, non-error outcome.
    async fn search(&self, query: &str, count: u8) -> Result<Vec<String>, SearchError>;
}

/// Splice search snippets into the history as a synthetic context turn.
///
/// The context turn is inserted immediately before the final user turn, so
/// the model reads it as background for the question that follows. With no
/// snippets the history is left untouched.
pub fn splice_search_context(history: &mut Vec<ConversationTurn>, snippets: &[String]) {
    if snippets.is_empty() || history.is_empty() {
        return;
    }
    let context = ConversationTurn::user_text(format!(
        "Aşağıdaki soruyu cevaplamak için bu internet arama sonuçlarını (context) kullan: \"{}\"",
        snippets.join(" | ")
    ));
    let insert_at = history.len().saturating_sub(1);
    history.insert(insert_at, context);
    debug!(snippets = snippets.len(), "search context spliced into history");
}

// ---------------------------------------------------------------------------
// Production client
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct CseResponse {
    #[serde(default)]
    items: Vec<CseItem>,
}

#[derive(Debug, Deserialize)]
struct CseItem {
    snippet: Option<String>,
}

/// Production client for the Google Custom Search JSON API.
#[derive(Debug, Clone)]
pub struct GoogleSearchClient {
    base_url: String,
    api_key: String,
    cse_id: String,
    client: reqwest::Client,
}

impl GoogleSearchClient {
    /// Create a client with a bounded per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        cse_id: impl Into<String>,
        timeout: std::time::Duration,
    ) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            cse_id: cse_id.into(),
            client,
        })
    }
}

#[async_trait]
impl SearchProvider for GoogleSearchClient {
    async fn search(&self, query: &str, count: u8) -> Result<Vec<String>, SearchError> {
        let num = count.to_string();
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("cx", self.cse_id.as_str()),
                ("q", query),
                ("num", num.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Http(status.as_u16()));
        }

        let body: CseResponse = response
            .json()
            .await
            .map_err(|e| SearchError::Parse(e.to_string()))?;

        Ok(body
            .items
            .into_iter()
            .filter_map(|item| item.snippet)
            .filter(|s| !s.is_empty())
            .collect())
    }
}
