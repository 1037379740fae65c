//! Word matching tests.
//!
//! Tests for the bag-of-words containment between queries and names.

use cartpick_strategy::word_match::{QueryWords, matches, name_words};

#[test]
fn match_ignores_case_punctuation_and_order() {
    assert!(matches("Milk 3.2% 1L", "milk 1l"));
    assert!(matches("Milk 3.2% 1L", "1l milk"));
}

#[test]
fn match_requires_every_query_word() {
    assert!(!matches("Milk 1L", "milk 1l cream"));
}

#[test]
fn empty_query_matches_anything() {
    assert!(matches("Anything", ""));
    assert!(QueryWords::new("").is_empty());
}

#[test]
fn extra_name_words_are_fine() {
    assert!(matches("Milk 1L, lactose free", "milk"));
}

#[test]
fn commas_separate_words_like_periods() {
    assert!(matches("Red shoes, kids", "kids red shoes"));
    assert_eq!(name_words("Red shoes, kids"), vec!["red", "shoes", "kids"]);
}

#[test]
fn no_stemming() {
    assert!(!matches("Red shoe", "shoes"));
    assert!(!matches("Shoe polish red", "red shoes"));
}

#[test]
fn query_words_are_reusable() {
    let words = QueryWords::new("coffee maker");
    assert!(words.matches("Drip coffee maker"));
    assert!(words.matches("Coffee maker, deluxe"));
    assert!(!words.matches("Coffee filters"));
}
