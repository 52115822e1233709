//! Tests for `src/text/normalize.rs` — case and diacritic folding.

use bilio::text::{normalize, super_normalize};

#[test]
fn folds_turkish_letters_to_ascii() {
    assert_eq!(normalize("ÇĞÜŞÖİI"), "cgusoii");
    assert_eq!(normalize("ışık"), "isik");
}

#[test]
fn dotted_and_dotless_i_collapse_to_plain_i() {
    assert_eq!(normalize("İstanbul"), "istanbul");
    assert_eq!(normalize("ISPARTA"), "isparta");
    assert_eq!(normalize("İSTANBUL"), normalize("istanbul"));
}

#[test]
fn preserves_spacing_and_punctuation() {
    assert_eq!(normalize("Merhaba, nasılsın?"), "merhaba, nasilsin?");
}

#[test]
fn accented_latin_letters_fold_to_base() {
    assert_eq!(normalize("café naïve"), "cafe naive");
}

#[test]
fn is_idempotent() {
    for input in ["İSTANBUL'da YAŞIYORUM!", "g.e.m.i.n.i", "plain ascii 42"] {
        let once = normalize(input);
        assert_eq!(normalize(&once), once);
    }
}

#[test]
fn super_normalize_strips_separators_and_digits() {
    assert_eq!(super_normalize("g.e.m.i.n.i"), "gemini");
    assert_eq!(super_normalize("g e m i n i"), "gemini");
    assert_eq!(super_normalize("c-h-a-t-g-p-t 4!"), "chatgpt");
}

#[test]
fn super_normalize_of_empty_and_symbol_input_is_empty() {
    assert_eq!(super_normalize(""), "");
    assert_eq!(super_normalize("123 !?."), "");
}
