//! Tests for the upstream response cache.

use std::time::Duration;

use bilio::upstream::cache::{cache_key, ResponseCache};
use bilio::upstream::ConversationTurn;

fn history() -> Vec<ConversationTurn> {
    vec![
        ConversationTurn::user_text("merhaba"),
        ConversationTurn::model_text("Merhaba!"),
        ConversationTurn::user_text("dolar kuru ne kadar"),
    ]
}

#[test]
fn identical_requests_share_a_key() {
    assert_eq!(
        cache_key(&history(), "gemini-1.5-flash"),
        cache_key(&history(), "gemini-1.5-flash")
    );
}

#[test]
fn the_model_id_is_part_of_the_key() {
    assert_ne!(
        cache_key(&history(), "gemini-1.5-flash"),
        cache_key(&history(), "gemini-1.5-pro")
    );
}

#[test]
fn any_history_change_changes_the_key() {
    let mut changed = history();
    changed.push(ConversationTurn::user_text("ek soru"));
    assert_ne!(
        cache_key(&history(), "gemini-1.5-flash"),
        cache_key(&changed, "gemini-1.5-flash")
    );
}

#[test]
fn hit_returns_an_owned_copy() {
    let cache = ResponseCache::new(Duration::from_secs(60));
    cache.insert("k1", "cevap");

    let mut first = cache.get("k1").expect("hit");
    first.push_str(" bozuldu");
    assert_eq!(cache.get("k1").as_deref(), Some("cevap"));
}

#[test]
fn miss_returns_none() {
    let cache = ResponseCache::new(Duration::from_secs(60));
    assert_eq!(cache.get("yok"), None);
    assert!(cache.is_empty());
}

#[test]
fn entries_expire_after_the_ttl() {
    let cache = ResponseCache::new(Duration::from_millis(10));
    cache.insert("k1", "cevap");

    std::thread::sleep(Duration::from_millis(30));
    assert_eq!(cache.get("k1"), None);
    assert!(cache.is_empty());
}

#[test]
fn sweep_counts_evicted_entries() {
    let cache = ResponseCache::new(Duration::from_millis(10));
    cache.insert("k1", "bir");
    cache.insert("k2", "iki");

    std::thread::sleep(Duration::from_millis(30));
    assert_eq!(cache.sweep_expired(), 2);
    assert_eq!(cache.len(), 0);
}
