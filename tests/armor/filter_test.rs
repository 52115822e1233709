//! Tests for `src/armor/mod.rs` — leak detection and vendor substitution.

use bilio::armor::{filter_output, substitute_vendor_names, ARMOR_DENIAL};

#[test]
fn language_model_disclosure_replaces_the_whole_answer() {
    let raw = "Ben bir dil modeli olarak size yardımcı olabilirim. İstediğiniz tarifi yazayım.";
    assert_eq!(filter_output(raw), ARMOR_DENIAL);
}

#[test]
fn rival_attribution_replaces_the_whole_answer() {
    assert_eq!(
        filter_output("Ben Gemini, Google tarafından eğitildim."),
        ARMOR_DENIAL
    );
    assert_eq!(filter_output("I was trained by Google engineers."), ARMOR_DENIAL);
}

#[test]
fn detection_survives_case_and_diacritic_variation() {
    assert_eq!(
        filter_output("BEN BİR DİL MODELİ olduğum için bunu yapamam."),
        ARMOR_DENIAL
    );
}

#[test]
fn clean_answers_pass_through_unchanged() {
    let raw = "Makarna için önce suyu kaynatın, sonra tuz ekleyin.";
    assert_eq!(filter_output(raw), raw);
}

#[test]
fn surviving_vendor_names_are_rewritten() {
    assert_eq!(
        filter_output("Gemini 2.0 çok gelişmiş bir araçtır."),
        "Bilio 2.0 çok gelişmiş bir araçtır."
    );
    assert_eq!(
        filter_output("Google Haritalar ile yol tarifi alabilirsin."),
        "Spark Haritalar ile yol tarifi alabilirsin."
    );
}

#[test]
fn vendor_substitution_is_case_insensitive() {
    assert_eq!(substitute_vendor_names("GOOGLE ve gemini"), "Spark ve Bilio");
}

#[test]
fn the_denial_itself_is_stable_under_filtering() {
    assert_eq!(filter_output(ARMOR_DENIAL), ARMOR_DENIAL);
}
