//! Self-disclosure fact extraction.
//!
//! Scans user text for phrases like "benim adım Ali" and turns them into
//! structured fact strings for the session. Each pattern carries exactly one
//! capture group — no fallback chains across groups — so the extracted value
//! is unambiguous per pattern.

use std::sync::LazyLock;

use regex::Regex;

/// Letters that may appear in a captured value (Turkish alphabet included).
const WORD: &str = "[A-Za-zÇĞİÖŞÜçğıöşü]+";

struct FactPattern {
    regex: Regex,
    /// Fact template; `{}` is replaced by the single captured value.
    template: &'static str,
}

static FACT_PATTERNS: LazyLock<Vec<FactPattern>> = LazyLock::new(|| {
    let specs: Vec<(String, &'static str)> = vec![
        (format!(r"(?i)\bad[ıi]m ({WORD})"), "Kullanıcının adı {}."),
        (
            r"(?i)\b(\d{1,3}) yaş[ıi]nday[ıi]m\b".to_owned(),
            "Kullanıcı {} yaşında.",
        ),
        (
            format!(r"(?i)\ben sevdiğim şey ({WORD})"),
            "Kullanıcının en sevdiği şey: {}.",
        ),
        (
            format!(r"(?i)\b({WORD})'?[dt][ae] (?:yaşıyorum|oturuyorum)\b"),
            "Kullanıcı {} şehrinde yaşıyor.",
        ),
        (
            format!(r"(?i)\bmesleğim ({WORD})"),
            "Kullanıcının mesleği {}.",
        ),
    ];
    specs
        .into_iter()
        .map(|(pattern, template)| FactPattern {
            regex: Regex::new(&pattern).expect("valid fact pattern"),
            template,
        })
        .collect()
});

/// Extract structured facts from one user message.
///
/// Returns at most one fact per pattern, in fixed pattern order. The caller
/// merges them into the session, where exact-text deduplication makes
/// repeated disclosures idempotent.
pub fn extract_facts(text: &str) -> Vec<String> {
    let mut facts = Vec::new();
    for pattern in FACT_PATTERNS.iter() {
        if let Some(value) = pattern
            .regex
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim())
            .filter(|v| !v.is_empty())
        {
            facts.push(pattern.template.replacen("{}", value, 1));
        }
    }
    facts
}
