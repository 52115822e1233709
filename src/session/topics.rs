//! Recent-topic extraction from the conversation tail.
//!
//! Tokenizes the last few turns, drops stop words and short tokens, ranks the
//! remainder by frequency, and joins the top tokens into the volatile
//! `recent_topics` summary. Tie-break is deterministic: among equal
//! frequencies, first-seen order wins.

use crate::text::normalize;
use crate::upstream::ConversationTurn;

/// How many trailing turns feed the summary.
const TOPIC_WINDOW: usize = 3;

/// How many ranked tokens make it into the summary.
const TOPIC_COUNT: usize = 5;

/// Tokens shorter than this are discarded as noise.
const MIN_TOKEN_LEN: usize = 4;

/// Function words and chat filler excluded from topic ranking.
const STOP_WORDS: &[&str] = &[
    "ama", "ancak", "bana", "bence", "benim", "biraz", "bunu", "bunun", "buna", "daha", "degil",
    "gibi", "hangi", "hayir", "icin", "kadar", "lutfen", "merhaba", "misin", "musun", "nasil",
    "neden", "nedir", "olan", "olarak", "selam", "seni", "senin", "sana", "tamam",
    "tesekkur", "veya", "yani", "zaten",
];

/// Derive the recent-topic summary for a conversation.
///
/// Looks at the text of the last [`TOPIC_WINDOW`] turns, normalizes it, and
/// returns the top [`TOPIC_COUNT`] tokens comma-joined. Empty history yields
/// an empty summary.
pub fn extract_recent_topics(history: &[ConversationTurn]) -> String {
    let window_start = history.len().saturating_sub(TOPIC_WINDOW);
    let mut ranked: Vec<(String, usize)> = Vec::new();

    for turn in &history[window_start..] {
        for token in normalize(&turn.text())
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| t.chars().count() >= MIN_TOKEN_LEN)
            .filter(|t| !STOP_WORDS.contains(t))
        {
            match ranked.iter_mut().find(|(seen, _)| seen == token) {
                Some((_, count)) => *count = count.saturating_add(1),
                None => ranked.push((token.to_owned(), 1)),
            }
        }
    }

    // Stable sort keeps first-seen order among equal frequencies.
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    ranked
        .into_iter()
        .take(TOPIC_COUNT)
        .map(|(token, _)| token)
        .collect::<Vec<_>>()
        .join(", ")
}
