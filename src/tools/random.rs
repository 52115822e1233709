//! Randomness tool: coin flip, die roll, bounded random integer.
//!
//! Uses the thread-local generator — uniform, not cryptographic, which is
//! all a parlor trick needs.

use rand::Rng;

/// Upper bound (inclusive) for the default random-number trigger.
const RANDOM_CEILING: u32 = 100;

/// Answer a randomness trigger against the spaced-normalized message.
pub fn try_answer(folded: &str) -> Option<String> {
    if folded.contains("yazi tura") || folded.contains("para at") {
        return Some(coin_flip());
    }
    if folded.contains("zar at") {
        return Some(die_roll());
    }
    if folded.contains("rastgele sayi") || folded.contains("sans sayisi") {
        return Some(random_number());
    }
    None
}

/// Uniform two-way coin flip.
pub fn coin_flip() -> String {
    if rand::thread_rng().gen_bool(0.5) {
        "Yazı!".to_owned()
    } else {
        "Tura!".to_owned()
    }
}

/// Uniform six-sided die roll.
pub fn die_roll() -> String {
    let face: u32 = rand::thread_rng().gen_range(1..=6);
    format!("Zar attım: {face}")
}

/// Uniform random integer in `1..=100`.
pub fn random_number() -> String {
    let value: u32 = rand::thread_rng().gen_range(1..=RANDOM_CEILING);
    format!("1 ile {RANDOM_CEILING} arasında rastgele sayın: {value}")
}
