//! Multi-source morning briefing tool.
//!
//! Issues three independent searches — weather, markets, headlines —
//! concurrently and composes one multi-section summary. Each sub-query may
//! fail on its own without cancelling the others; a failed section gets a
//! placeholder line. Only when every source comes back empty does the tool
//! fall back to the apology string.

use tracing::debug;

use crate::search::{SearchError, SearchProvider};

/// Soft-failure answer when no briefing could be assembled at all.
pub const BRIEFING_FALLBACK: &str =
    "Üzgünüm, şu anda günün özetini hazırlayamıyorum. Biraz sonra tekrar dener misin?";

/// Placeholder line for a section whose source failed or returned nothing.
pub const SECTION_PLACEHOLDER: &str = "Bu bölüm için şu anda bilgi alınamadı.";

/// Snippets requested per section.
const SECTION_RESULT_COUNT: u8 = 2;

/// Assemble the multi-section briefing.
///
/// Never fails hard: the worst outcome is the fallback apology string.
pub async fn morning_briefing(search: &dyn SearchProvider) -> String {
    let (weather, finance, news) = tokio::join!(
        search.search("bugün hava durumu", SECTION_RESULT_COUNT),
        search.search("dolar euro altın güncel kur", SECTION_RESULT_COUNT),
        search.search("son dakika haberleri", SECTION_RESULT_COUNT),
    );

    let weather = section_text(weather);
    let finance = section_text(finance);
    let news = section_text(news);

    if weather.is_none() && finance.is_none() && news.is_none() {
        debug!("all briefing sources failed, returning fallback");
        return BRIEFING_FALLBACK.to_owned();
    }

    format!(
        "Günün özeti:\n\nHava durumu: {}\n\nPiyasalar: {}\n\nGündem: {}",
        weather.as_deref().unwrap_or(SECTION_PLACEHOLDER),
        finance.as_deref().unwrap_or(SECTION_PLACEHOLDER),
        news.as_deref().unwrap_or(SECTION_PLACEHOLDER),
    )
}

/// Collapse one sub-query outcome into section text, absorbing its failure.
fn section_text(outcome: Result<Vec<String>, SearchError>) -> Option<String> {
    match outcome {
        Ok(snippets) if !snippets.is_empty() => Some(snippets.join(" ")),
        Ok(_) => None,
        Err(e) => {
            debug!(error = %e, "briefing section failed");
            None
        }
    }
}
