//! Tests for `src/tools/arithmetic.rs` — strict two-operand evaluation.

use bilio::tools::arithmetic::{try_evaluate, DIVISION_BY_ZERO};

#[test]
fn whole_results_print_without_a_fraction() {
    assert_eq!(try_evaluate("5+3").as_deref(), Some("İşlemin sonucu: 8"));
    assert_eq!(try_evaluate("3*7").as_deref(), Some("İşlemin sonucu: 21"));
}

#[test]
fn fractional_results_keep_their_decimals() {
    assert_eq!(try_evaluate("7/2").as_deref(), Some("İşlemin sonucu: 3.5"));
}

#[test]
fn results_are_rounded_to_two_decimals() {
    assert_eq!(try_evaluate("10/3").as_deref(), Some("İşlemin sonucu: 3.33"));
}

#[test]
fn comma_decimal_separator_is_accepted() {
    assert_eq!(try_evaluate("10,5+2").as_deref(), Some("İşlemin sonucu: 12.5"));
}

#[test]
fn whitespace_around_operands_is_tolerated() {
    assert_eq!(try_evaluate("  4 * 2 ").as_deref(), Some("İşlemin sonucu: 8"));
}

#[test]
fn negative_operands_work() {
    assert_eq!(try_evaluate("-5+3").as_deref(), Some("İşlemin sonucu: -2"));
}

#[test]
fn division_by_zero_returns_the_defined_answer() {
    assert_eq!(try_evaluate("5/0").as_deref(), Some(DIVISION_BY_ZERO));
}

#[test]
fn anything_but_one_strict_expression_falls_through() {
    assert_eq!(try_evaluate("2+3+4"), None);
    assert_eq!(try_evaluate("5 artı 3"), None);
    assert_eq!(try_evaluate("kaç eder 5+3"), None);
    assert_eq!(try_evaluate("(2+3)"), None);
    assert_eq!(try_evaluate(""), None);
}
