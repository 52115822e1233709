//! Search decision policy.
//!
//! Decides whether a message warrants a live web search before the upstream
//! call. The checks run in a fixed order; the first one that fires settles
//! the decision.

use std::sync::LazyLock;

use regex::Regex;

use crate::persona::PersonaMode;
use crate::text::normalize;

/// Below this word count a message is "short" and courtesy phrases win.
const MIN_SEARCH_WORDS: usize = 3;

/// Generative, non-factual request shapes — search adds nothing to these.
static CREATIVE_TASK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(kod yaz|siir yaz|hikaye yaz|sarki yaz|makale yaz|cevir|cevirir misin|ozetle|ozet cikar|tablo yap|tablo olustur|liste yap)\b",
    )
    .expect("valid creative-task pattern")
});

/// Greeting/courtesy phrases that never need augmentation on their own.
const COURTESY_PHRASES: &[&str] = &[
    "merhaba",
    "selam",
    "gunaydin",
    "iyi aksamlar",
    "iyi geceler",
    "nasilsin",
    "naber",
    "tesekkur",
    "tesekkurler",
    "sagol",
    "rica ederim",
    "gorusuruz",
];

/// Factual triggers: temporal, pricing, definitional, and entity-lookup terms.
const FACTUAL_TRIGGERS: &[&str] = &[
    "kacta",
    "nedir",
    "kimdir",
    "bugun",
    "yarin",
    "son dakika",
    "fiyati",
    "ne kadar",
    "kac tl",
    "dolar",
    "euro",
    "hava durumu",
    "ne zaman",
    "nerede",
];

/// Decide whether a message should be augmented with live search context.
///
/// `shield_matched` reports whether the rule engine would answer this text
/// locally; a shielded message is never searched, to avoid redundant or
/// contradictory augmentation. Voice mode never searches — the persona is
/// terse and unaugmented.
pub fn should_search(text: &str, persona: PersonaMode, shield_matched: bool) -> bool {
    if shield_matched || persona == PersonaMode::Voice {
        return false;
    }

    let folded = normalize(text);
    if folded.trim().is_empty() {
        return false;
    }

    if CREATIVE_TASK.is_match(&folded) {
        return false;
    }

    let word_count = folded.split_whitespace().count();
    let has_question_mark = folded.contains('?');
    if word_count < MIN_SEARCH_WORDS
        && !has_question_mark
        && COURTESY_PHRASES.iter().any(|p| folded.contains(p))
    {
        return false;
    }

    FACTUAL_TRIGGERS.iter().any(|t| folded.contains(t)) || has_question_mark
}
