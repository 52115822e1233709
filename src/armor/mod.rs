//! Output-side filter ("armor", layer 3).
//!
//! Scans the model's raw answer for identity leaks. A hit discards the whole
//! answer in favor of the fixed denial — partial redaction is deliberately
//! unsupported, so fragments can never be reassembled into a leak. Vendor
//! names surviving the check are rewritten to the product's own branding.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::text::normalize;

pub mod format;

/// Fixed denial substituted for any leaking answer.
pub const ARMOR_DENIAL: &str =
    "Ben Bilio AI'yım; Spark tarafından geliştirildim ve başka hiçbir şirketin teknolojisiyle bağlantım yok. Sana nasıl yardımcı olabilirim?";

/// Forbidden-disclosure phrases, checked against the normalized answer.
const FORBIDDEN_DISCLOSURES: &[&str] = &[
    // Self-identification as a language model.
    "ben bir dil modeli",
    "buyuk dil modeli",
    "bir dil modeliyim",
    "as a language model",
    "i am a language model",
    "as an ai language model",
    // Rival attribution / trained-by-rival phrasing.
    "google tarafindan egitildim",
    "google tarafindan gelistirildim",
    "google tarafindan egitilmis",
    "ben gemini",
    "i am gemini",
    "trained by google",
    "developed by google",
    // Generic AI-limitation clichés that break the persona.
    "bir yapay zeka modeli olarak",
    "yapay zeka oldugum icin",
    "as an ai model",
];

static VENDOR_GEMINI: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)gemini").expect("valid vendor pattern"));
static VENDOR_GOOGLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)google").expect("valid vendor pattern"));

/// Filter the model's raw answer.
///
/// Any forbidden disclosure replaces the entire answer with the fixed
/// denial. Vendor-name substitution then runs unconditionally on whatever
/// text survives.
pub fn filter_output(raw: &str) -> String {
    let folded = normalize(raw);
    let survivor = if FORBIDDEN_DISCLOSURES.iter().any(|p| folded.contains(p)) {
        debug!("armor replaced a leaking answer");
        ARMOR_DENIAL.to_owned()
    } else {
        raw.to_owned()
    };

    substitute_vendor_names(&survivor)
}

/// Rewrite surviving rival-brand mentions to the product's own branding.
pub fn substitute_vendor_names(text: &str) -> String {
    let step = VENDOR_GEMINI.replace_all(text, "Bilio");
    VENDOR_GOOGLE.replace_all(&step, "Spark").into_owned()
}
