//! Case and diacritic folding for rule matching.
//!
//! Turkish input needs more than `str::to_lowercase`: the dotted/dotless I
//! pair (`İ`/`ı`) lowercases into non-ASCII forms, and accented Latin
//! letters must collapse onto their base letter so that "İSTANBUL",
//! "istanbul" and "İstanbul" all produce the same match key.

/// Fold case and strip diacritics, preserving word boundaries and spacing.
///
/// The output is lowercase with Turkish and common Latin accented letters
/// mapped to their ASCII base letter and combining marks dropped. Characters
/// outside the fold table (digits, punctuation, other scripts) pass through
/// unchanged, which keeps the function total and idempotent.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            // Turkish dotted capital I lowercases to "i\u{307}" in Unicode;
            // fold both members of the Turkish I pair straight to plain 'i'.
            'İ' | 'I' => out.push('i'),
            _ => {
                for lower in c.to_lowercase() {
                    if let Some(folded) = fold_char(lower) {
                        out.push(folded);
                    }
                }
            }
        }
    }
    out
}

/// Fold to the spaceless matching surface.
///
/// Applies [`normalize`] and then removes everything that is not a letter —
/// punctuation, symbols, whitespace, and digits — leaving one contiguous
/// letter stream. "g.e.m.i.n.i" and "g e m i n i" both become "gemini".
pub fn super_normalize(text: &str) -> String {
    normalize(text).chars().filter(|c| c.is_alphabetic()).collect()
}

/// Map a single lowercased character to its folded form.
///
/// Returns `None` for combining marks, which are dropped entirely.
fn fold_char(c: char) -> Option<char> {
    let folded = match c {
        'ı' => 'i',
        'ş' => 's',
        'ç' => 'c',
        'ğ' => 'g',
        'ü' => 'u',
        'ö' => 'o',
        'à'..='å' => 'a',
        'è'..='ë' => 'e',
        'ì'..='ï' => 'i',
        'ò'..='õ' => 'o',
        'ù'..='û' => 'u',
        'ý' | 'ÿ' => 'y',
        'ñ' => 'n',
        // Combining diacritical marks (e.g. the dot left over from
        // lowercasing 'İ' through the standard Unicode path).
        '\u{0300}'..='\u{036f}' => return None,
        other => other,
    };
    Some(folded)
}
