//! Tests for the session store and key resolution.

use std::time::Duration;

use bilio::session::{Session, SessionKey, SessionStore};

#[test]
fn explicit_id_wins_over_peer_address() {
    let key = SessionKey::resolve(Some("abc123"), Some("10.0.0.1"));
    assert_eq!(key, SessionKey::Explicit("abc123".to_owned()));
    assert!(!key.is_degraded());
}

#[test]
fn blank_id_falls_back_to_peer_address() {
    let key = SessionKey::resolve(Some("   "), Some("10.0.0.1"));
    assert_eq!(key, SessionKey::PeerFallback("10.0.0.1".to_owned()));
    assert!(key.is_degraded());
}

#[test]
fn fallback_storage_key_is_namespaced() {
    let explicit = SessionKey::Explicit("10.0.0.1".to_owned());
    let fallback = SessionKey::PeerFallback("10.0.0.1".to_owned());
    assert_ne!(explicit.storage_key(), fallback.storage_key());
    assert_eq!(fallback.storage_key(), "peer:10.0.0.1");
}

#[test]
fn get_or_create_starts_with_defaults() {
    let store = SessionStore::new(Duration::from_secs(60));
    let session = store.get_or_create(&SessionKey::Explicit("s1".to_owned()));
    assert!(session.important_facts.is_empty());
    assert!(session.recent_topics.is_empty());
    assert!(store.is_empty());
}

#[test]
fn save_then_get_round_trips_session_state() {
    let store = SessionStore::new(Duration::from_secs(60));
    let key = SessionKey::Explicit("s1".to_owned());

    let mut session = Session::default();
    session.add_fact("Kullanıcının adı Ali.");
    session.recent_topics = "futbol".to_owned();
    store.save(&key, session);

    let loaded = store.get_or_create(&key);
    assert_eq!(loaded.important_facts, vec!["Kullanıcının adı Ali.".to_owned()]);
    assert_eq!(loaded.recent_topics, "futbol");
    assert_eq!(store.len(), 1);
}

#[test]
fn sessions_are_isolated_per_key() {
    let store = SessionStore::new(Duration::from_secs(60));
    let first = SessionKey::Explicit("s1".to_owned());
    let second = SessionKey::Explicit("s2".to_owned());

    let mut session = Session::default();
    session.add_fact("Kullanıcının adı Ali.");
    store.save(&first, session);

    assert!(store.get_or_create(&second).important_facts.is_empty());
}

#[test]
fn expired_session_is_replaced_by_a_fresh_one() {
    let store = SessionStore::new(Duration::from_millis(10));
    let key = SessionKey::Explicit("s1".to_owned());

    let mut session = Session::default();
    session.add_fact("Kullanıcının adı Ali.");
    store.save(&key, session);

    std::thread::sleep(Duration::from_millis(30));
    assert!(store.get_or_create(&key).important_facts.is_empty());
}

#[test]
fn sweep_counts_evicted_sessions() {
    let store = SessionStore::new(Duration::from_millis(10));
    store.save(&SessionKey::Explicit("s1".to_owned()), Session::default());
    store.save(&SessionKey::Explicit("s2".to_owned()), Session::default());

    std::thread::sleep(Duration::from_millis(30));
    assert_eq!(store.sweep_expired(), 2);
    assert!(store.is_empty());
}
