//! Tests for `src/search/decision.rs` — augmentation policy order.

use bilio::persona::PersonaMode;
use bilio::search::decision::should_search;

#[test]
fn factual_trigger_wants_search() {
    assert!(should_search("dolar kuru ne kadar", PersonaMode::Assistant, false));
    assert!(should_search("bugün hava durumu nasıl", PersonaMode::Assistant, false));
}

#[test]
fn question_mark_alone_wants_search() {
    assert!(should_search(
        "Mars kolonisi kuruldu mu?",
        PersonaMode::Assistant,
        false
    ));
}

#[test]
fn shielded_messages_are_never_searched() {
    assert!(!should_search("dolar kuru ne kadar", PersonaMode::Assistant, true));
}

#[test]
fn voice_mode_never_searches() {
    assert!(!should_search("dolar kuru ne kadar", PersonaMode::Voice, false));
}

#[test]
fn creative_tasks_suppress_search_even_with_triggers() {
    // "bugün" alone would trigger, but the creative shape wins.
    assert!(!should_search(
        "bana bir hikaye yaz bugün",
        PersonaMode::Assistant,
        false
    ));
    assert!(!should_search("şu metni özetle", PersonaMode::Assistant, false));
}

#[test]
fn short_courtesy_phrases_stay_local() {
    assert!(!should_search("merhaba", PersonaMode::Assistant, false));
    assert!(!should_search("çok teşekkürler", PersonaMode::Assistant, false));
}

#[test]
fn a_courtesy_word_with_a_question_mark_still_searches() {
    assert!(should_search("nasılsın?", PersonaMode::Assistant, false));
}

#[test]
fn empty_and_plain_statements_stay_local() {
    assert!(!should_search("", PersonaMode::Assistant, false));
    assert!(!should_search("uyumaya gidiyorum iyi geceler", PersonaMode::Assistant, false));
}
