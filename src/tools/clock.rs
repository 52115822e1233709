//! Wall-clock tool: time, date, weekday, month, year.
//!
//! The matched sub-phrase picks the format. Formatting is split from the
//! clock read so tests can pin a timestamp.

use chrono::{DateTime, Datelike, Local, Timelike};

const WEEKDAYS: [&str; 7] = [
    "Pazartesi",
    "Salı",
    "Çarşamba",
    "Perşembe",
    "Cuma",
    "Cumartesi",
    "Pazar",
];

const MONTHS: [&str; 12] = [
    "Ocak", "Şubat", "Mart", "Nisan", "Mayıs", "Haziran", "Temmuz", "Ağustos", "Eylül", "Ekim",
    "Kasım", "Aralık",
];

/// Answer a time/date question against the current wall clock.
///
/// `folded` is the spaced-normalized message.
pub fn try_answer(folded: &str) -> Option<String> {
    try_answer_at(folded, Local::now())
}

/// Answer a time/date question against a fixed timestamp.
pub fn try_answer_at(folded: &str, now: DateTime<Local>) -> Option<String> {
    if folded.contains("saat kac") {
        return Some(format!(
            "Şu an saat {:02}:{:02}.",
            now.hour(),
            now.minute()
        ));
    }
    if folded.contains("gunlerden ne") || folded.contains("hangi gun") {
        return Some(format!("Bugün günlerden {}.", weekday_name(&now)));
    }
    if folded.contains("bugunun tarihi") || folded.contains("tarih ne") {
        return Some(format!(
            "Bugünün tarihi {} {} {}.",
            now.day(),
            month_name(&now),
            now.year()
        ));
    }
    if folded.contains("hangi ayday") || folded.contains("hangi ay") {
        return Some(format!("Şu an {} ayındayız.", month_name(&now)));
    }
    if folded.contains("hangi yilday") || folded.contains("hangi yil") {
        return Some(format!("{} yılındayız.", now.year()));
    }
    None
}

fn weekday_name(now: &DateTime<Local>) -> &'static str {
    let index = usize::try_from(now.weekday().num_days_from_monday()).unwrap_or(0);
    WEEKDAYS.get(index).unwrap_or(&"?")
}

fn month_name(now: &DateTime<Local>) -> &'static str {
    let index = usize::try_from(now.month0()).unwrap_or(0);
    MONTHS.get(index).unwrap_or(&"?")
}
