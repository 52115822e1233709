//! Tests for `src/session/facts.rs` — self-disclosure extraction.

use bilio::session::facts::extract_facts;
use bilio::session::Session;

#[test]
fn extracts_name_disclosure() {
    let facts = extract_facts("merhaba, benim adım Ali");
    assert_eq!(facts, vec!["Kullanıcının adı Ali.".to_owned()]);
}

#[test]
fn extracts_age_disclosure() {
    let facts = extract_facts("ben 25 yaşındayım");
    assert_eq!(facts, vec!["Kullanıcı 25 yaşında.".to_owned()]);
}

#[test]
fn extracts_city_disclosure() {
    let facts = extract_facts("Ankara'da yaşıyorum");
    assert_eq!(facts, vec!["Kullanıcı Ankara şehrinde yaşıyor.".to_owned()]);
}

#[test]
fn extracts_profession_disclosure() {
    let facts = extract_facts("mesleğim öğretmen");
    assert_eq!(facts, vec!["Kullanıcının mesleği öğretmen.".to_owned()]);
}

#[test]
fn extracts_multiple_disclosures_in_pattern_order() {
    let facts = extract_facts("adım Ayşe ve 30 yaşındayım");
    assert_eq!(
        facts,
        vec![
            "Kullanıcının adı Ayşe.".to_owned(),
            "Kullanıcı 30 yaşında.".to_owned(),
        ]
    );
}

#[test]
fn plain_chat_yields_no_facts() {
    assert!(extract_facts("bugün hava çok güzel").is_empty());
    assert!(extract_facts("").is_empty());
}

#[test]
fn repeated_disclosure_is_idempotent_through_session_dedup() {
    let mut session = Session::default();
    for _ in 0..3 {
        for fact in extract_facts("benim adım Ali") {
            session.add_fact(fact);
        }
    }
    assert_eq!(session.important_facts, vec!["Kullanıcının adı Ali.".to_owned()]);
}

#[test]
fn add_fact_reports_whether_the_fact_was_new() {
    let mut session = Session::default();
    assert!(session.add_fact("Kullanıcının adı Ali."));
    assert!(!session.add_fact("Kullanıcının adı Ali."));
    assert!(!session.add_fact(""));
}

#[test]
fn merge_client_facts_preserves_insertion_order() {
    let mut session = Session::default();
    session.add_fact("Kullanıcının adı Ali.");
    session.merge_client_facts(["Kullanıcı 25 yaşında.", "Kullanıcının adı Ali."]);
    assert_eq!(
        session.important_facts,
        vec![
            "Kullanıcının adı Ali.".to_owned(),
            "Kullanıcı 25 yaşında.".to_owned(),
        ]
    );
}
