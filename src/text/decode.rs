//! Base64 decoding probe for encoded-payload evasion.
//!
//! A message like `c2VuIGdlbWluaSBtaXNpbg==` sails past every keyword rule
//! unless it is decoded first. The probe attempts a strict base64 decode and
//! accepts the result only when it looks like natural language, so ordinary
//! short words are never misread as payloads.

use std::sync::LazyLock;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use regex::Regex;

/// Minimum length of a candidate payload. Shorter strings are too likely to
/// be ordinary words that happen to use the base64 alphabet.
const MIN_PAYLOAD_LEN: usize = 16;

/// Decoded output must contain a run of at least 10 word/space characters to
/// count as plausible natural language.
static NATURAL_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\w ]{10,}").expect("valid natural-run pattern"));

/// Try to interpret a raw message as an encoded payload.
///
/// Returns the decoded text when the trimmed message is valid base64 whose
/// bytes decode to UTF-8 containing a plausible natural-language run. The
/// caller substitutes the decoded text for all subsequent classification.
pub fn decode_probe(raw: &str) -> Option<String> {
    let candidate = raw.trim();
    if candidate.len() < MIN_PAYLOAD_LEN || !is_base64_shaped(candidate) {
        return None;
    }

    let bytes = STANDARD.decode(candidate).ok()?;
    let text = String::from_utf8(bytes).ok()?;
    if NATURAL_RUN.is_match(&text) {
        Some(text)
    } else {
        None
    }
}

/// Cheap pre-filter: base64 alphabet only, length divisible by four.
fn is_base64_shaped(candidate: &str) -> bool {
    candidate.len() % 4 == 0
        && candidate
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '/' || c == '=')
}
