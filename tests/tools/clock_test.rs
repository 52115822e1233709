//! Tests for `src/tools/clock.rs` — pinned-timestamp formatting.

use chrono::{DateTime, Local, TimeZone};

use bilio::tools::clock::{try_answer, try_answer_at};

/// Saturday, 15 March 2025, 14:05 local time.
fn pinned() -> DateTime<Local> {
    Local
        .with_ymd_and_hms(2025, 3, 15, 14, 5, 0)
        .single()
        .expect("unambiguous local timestamp")
}

#[test]
fn answers_the_time() {
    assert_eq!(
        try_answer_at("saat kac", pinned()).as_deref(),
        Some("Şu an saat 14:05.")
    );
}

#[test]
fn answers_the_weekday() {
    assert_eq!(
        try_answer_at("bugun gunlerden ne", pinned()).as_deref(),
        Some("Bugün günlerden Cumartesi.")
    );
    assert_eq!(
        try_answer_at("bugun hangi gun", pinned()).as_deref(),
        Some("Bugün günlerden Cumartesi.")
    );
}

#[test]
fn answers_the_full_date() {
    assert_eq!(
        try_answer_at("bugunun tarihi ne", pinned()).as_deref(),
        Some("Bugünün tarihi 15 Mart 2025.")
    );
}

#[test]
fn answers_month_and_year() {
    assert_eq!(
        try_answer_at("hangi aydayiz", pinned()).as_deref(),
        Some("Şu an Mart ayındayız.")
    );
    assert_eq!(
        try_answer_at("hangi yildayiz", pinned()).as_deref(),
        Some("2025 yılındayız.")
    );
}

#[test]
fn unrelated_text_falls_through() {
    assert_eq!(try_answer_at("saatin markasi ne", pinned()), None);
    assert_eq!(try_answer("bana bir film öner"), None);
}
