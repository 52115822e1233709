//! Tests for `src/armor/format.rs` — presentation formatting.

use bilio::armor::format::format_response;
use bilio::persona::PersonaMode;

#[test]
fn bare_urls_become_markdown_links() {
    assert_eq!(
        format_response("Bak: https://example.com adresine.", PersonaMode::Assistant),
        "Bak: [https://example.com](https://example.com) adresine."
    );
}

#[test]
fn existing_markdown_links_are_left_alone() {
    let text = "Detaylar [burada](https://example.com) yazıyor.";
    assert_eq!(format_response(text, PersonaMode::Assistant), text);
}

#[test]
fn indented_list_items_are_flattened() {
    let text = "Alışveriş listesi:\n  - ekmek\n  - süt\n   1. yumurta";
    assert_eq!(
        format_response(text, PersonaMode::Assistant),
        "Alışveriş listesi:\n- ekmek\n- süt\n1. yumurta"
    );
}

#[test]
fn fenced_code_is_never_touched() {
    let text = "Örnek:\n```python\n  - not a list\nurl = \"https://example.com\"\n```\nBitti.";
    let formatted = format_response(text, PersonaMode::Assistant);
    assert!(formatted.contains("  - not a list"), "formatted: {formatted}");
    assert!(
        formatted.contains("url = \"https://example.com\""),
        "formatted: {formatted}"
    );
    assert!(!formatted.contains("[https://example.com]("));
}

#[test]
fn inline_code_is_never_touched() {
    let text = "Komut: `curl https://example.com` yeterli.";
    assert_eq!(format_response(text, PersonaMode::Assistant), text);
}

#[test]
fn voice_answers_keep_only_two_sentences() {
    let text = "Bugün hava güneşli. Sıcaklık 24 derece. Yarın yağmur bekleniyor.";
    assert_eq!(
        format_response(text, PersonaMode::Voice),
        "Bugün hava güneşli. Sıcaklık 24 derece. ..."
    );
}

#[test]
fn short_voice_answers_are_untouched() {
    let text = "Hava güneşli. Sıcaklık 24 derece.";
    assert_eq!(format_response(text, PersonaMode::Voice), text);
}

#[test]
fn voice_truncation_ignores_dots_inside_urls() {
    let text = "Kaynak https://www.ornek.com.tr/sayfa adresinde. Oradan bakabilirsin.";
    assert_eq!(
        format_response(text, PersonaMode::Voice),
        "Kaynak [https://www.ornek.com.tr/sayfa](https://www.ornek.com.tr/sayfa) \
         adresinde. Oradan bakabilirsin."
    );
}

#[test]
fn voice_budget_cut_never_leaves_a_dangling_code_marker() {
    let text = format!("{} `kod parçası` {}", "a".repeat(158), "b".repeat(100));
    let formatted = format_response(&text, PersonaMode::Voice);
    assert!(!formatted.contains('\u{e000}'), "formatted: {formatted}");
    assert!(!formatted.contains("kod parçası"), "formatted: {formatted}");
    assert!(formatted.ends_with("..."), "formatted: {formatted}");
}

#[test]
fn voice_truncation_falls_back_to_a_character_budget() {
    let text = "a".repeat(300);
    let formatted = format_response(&text, PersonaMode::Voice);
    assert!(formatted.ends_with("..."), "formatted: {formatted}");
    assert!(formatted.chars().count() < 300);
}

#[test]
fn assistant_answers_are_never_truncated() {
    let text = "Bir. İki. Üç. Dört. Beş.";
    assert_eq!(format_response(text, PersonaMode::Assistant), text);
}
