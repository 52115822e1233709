//! Presentation formatting for outbound answers.
//!
//! Code blocks and inline code spans are extracted to placeholders before
//! any transformation and reinserted unchanged at the end, so formatting can
//! never corrupt code. Voice answers are truncated hard — the persona is
//! terse by contract.

use std::sync::LazyLock;

use regex::Regex;

use crate::persona::PersonaMode;

/// Character budget used for voice answers when sentence segmentation finds
/// no terminator at all.
const VOICE_CHAR_BUDGET: usize = 160;

/// How many sentences a voice answer keeps.
const VOICE_SENTENCE_LIMIT: usize = 2;

static FENCED_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```.*?```").expect("valid fenced-code pattern"));
static INLINE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`[^`\n]+`").expect("valid inline-code pattern"));
static BARE_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://[^\s<>()\[\]]+").expect("valid url pattern"));
static LIST_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]+([-*] |\d+\. )").expect("valid list pattern"));

/// Format an answer for delivery.
///
/// Protects code, auto-links bare URLs, flattens list indentation, and in
/// voice mode truncates to the first sentences.
pub fn format_response(text: &str, persona: PersonaMode) -> String {
    let (mut working, stash) = stash_code(text);

    working = autolink_urls(&working);
    working = LIST_ITEM.replace_all(&working, "$1").into_owned();

    if persona == PersonaMode::Voice {
        working = truncate_for_voice(&working);
    }

    unstash_code(&working, &stash)
}

/// Replace code blocks and inline spans with private-use placeholders.
fn stash_code(text: &str) -> (String, Vec<String>) {
    let mut stash: Vec<String> = Vec::new();
    let mut working = text.to_owned();

    for pattern in [&*FENCED_CODE, &*INLINE_CODE] {
        loop {
            let Some((range, code)) = pattern
                .find(&working)
                .map(|found| (found.range(), found.as_str().to_owned()))
            else {
                break;
            };
            let token = format!("\u{e000}{}\u{e000}", stash.len());
            stash.push(code);
            working.replace_range(range, &token);
        }
    }

    (working, stash)
}

/// Reinsert stashed code verbatim.
fn unstash_code(text: &str, stash: &[String]) -> String {
    let mut restored = text.to_owned();
    for (index, code) in stash.iter().enumerate() {
        let token = format!("\u{e000}{index}\u{e000}");
        restored = restored.replace(&token, code);
    }
    restored
}

/// Wrap bare URLs in markdown link syntax, leaving existing links alone.
fn autolink_urls(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last_end = 0;

    for found in BARE_URL.find_iter(text) {
        let before = &text[..found.start()];
        out.push_str(&text[last_end..found.start()]);
        // Already inside markdown link syntax: `](url)` or `[url]`.
        if before.ends_with("](") || before.ends_with('[') {
            out.push_str(found.as_str());
        } else {
            let url = found.as_str();
            out.push_str(&format!("[{url}]({url})"));
        }
        last_end = found.end();
    }
    out.push_str(&text[last_end..]);
    out
}

/// Keep only the first two sentences, or a fixed character budget when no
/// sentence terminator exists, appending an ellipsis marker if trimmed.
///
/// A terminator only counts when followed by whitespace or end of text, so
/// dots inside URLs or version strings do not end a sentence. The budget cut
/// never lands inside a `\u{e000}N\u{e000}` code placeholder.
fn truncate_for_voice(text: &str) -> String {
    let trimmed = text.trim();

    let mut sentence_ends: Vec<usize> = Vec::new();
    for (index, c) in trimmed.char_indices() {
        if matches!(c, '.' | '!' | '?') {
            let after = index.saturating_add(c.len_utf8());
            let ends_token = trimmed[after..]
                .chars()
                .next()
                .is_none_or(char::is_whitespace);
            if ends_token {
                sentence_ends.push(after);
                if sentence_ends.len() == VOICE_SENTENCE_LIMIT {
                    break;
                }
            }
        }
    }

    if let Some(&cut) = sentence_ends.last() {
        let kept = trimmed[..cut].trim_end();
        if cut < trimmed.trim_end().len() {
            return format!("{kept} ...");
        }
        return kept.to_owned();
    }

    let Some((budget_end, _)) = trimmed.char_indices().nth(VOICE_CHAR_BUDGET) else {
        return trimmed.to_owned();
    };
    let mut kept = &trimmed[..budget_end];
    // An odd placeholder-marker count means the cut split a stashed code
    // token; back up to its opening marker and drop the fragment.
    if kept.matches('\u{e000}').count() % 2 == 1 {
        if let Some(open) = kept.rfind('\u{e000}') {
            kept = &kept[..open];
        }
    }
    format!("{}...", kept.trim_end())
}
