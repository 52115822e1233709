//! Tests for `src/tools/briefing.rs` — multi-source composition and
//! partial-failure behavior.

use async_trait::async_trait;

use bilio::search::{SearchError, SearchProvider};
use bilio::tools::briefing::{morning_briefing, BRIEFING_FALLBACK, SECTION_PLACEHOLDER};

/// Fails only for queries containing a marker word; answers the rest.
struct SelectiveSearch {
    fail_on: &'static str,
}

#[async_trait]
impl SearchProvider for SelectiveSearch {
    async fn search(&self, query: &str, _count: u8) -> Result<Vec<String>, SearchError> {
        if query.contains(self.fail_on) {
            return Err(SearchError::Http(503));
        }
        Ok(vec![format!("sonuç: {query}")])
    }
}

struct DeadSearch;

#[async_trait]
impl SearchProvider for DeadSearch {
    async fn search(&self, _query: &str, _count: u8) -> Result<Vec<String>, SearchError> {
        Err(SearchError::Http(500))
    }
}

#[tokio::test]
async fn composes_all_three_sections() {
    let search = SelectiveSearch { fail_on: "\u{0}" };
    let briefing = morning_briefing(&search).await;

    assert!(briefing.starts_with("Günün özeti:"), "briefing: {briefing}");
    assert!(briefing.contains("Hava durumu:"));
    assert!(briefing.contains("Piyasalar:"));
    assert!(briefing.contains("Gündem:"));
    assert!(!briefing.contains(SECTION_PLACEHOLDER));
}

#[tokio::test]
async fn one_failed_source_gets_a_placeholder_line() {
    let search = SelectiveSearch { fail_on: "hava" };
    let briefing = morning_briefing(&search).await;

    assert!(briefing.starts_with("Günün özeti:"), "briefing: {briefing}");
    assert!(briefing.contains(&format!("Hava durumu: {SECTION_PLACEHOLDER}")));
    assert!(briefing.contains("Piyasalar: sonuç:"));
}

#[tokio::test]
async fn all_sources_down_yields_the_fallback() {
    assert_eq!(morning_briefing(&DeadSearch).await, BRIEFING_FALLBACK);
}
