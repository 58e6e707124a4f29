//! Ordering properties of the Esperanto collator.

use std::cmp::Ordering;

use proptest::prelude::*;
use vortaro::collate::{compare, sort_key, sort_words};

/// Strings mixing alphabet letters, capitals and characters outside the
/// alphabet.
fn word() -> impl Strategy<Value = String> {
    "[ a-zA-Z\\-ĉĝĥĵŝŭĈĜĤĴŜŬ0-9'.äß]{0,8}"
}

proptest! {
    #[test]
    fn compare_is_reflexive(a in word()) {
        prop_assert_eq!(compare(&a, &a), Ordering::Equal);
    }

    #[test]
    fn compare_is_antisymmetric(a in word(), b in word()) {
        prop_assert_eq!(compare(&a, &b), compare(&b, &a).reverse());
    }

    #[test]
    fn compare_is_transitive(a in word(), b in word(), c in word()) {
        let mut words = [a, b, c];
        words.sort_by(|x, y| compare(x, y));
        prop_assert_ne!(compare(&words[0], &words[1]), Ordering::Greater);
        prop_assert_ne!(compare(&words[1], &words[2]), Ordering::Greater);
        prop_assert_ne!(compare(&words[0], &words[2]), Ordering::Greater);
    }

    #[test]
    fn compare_matches_sort_key(a in word(), b in word()) {
        prop_assert_eq!(compare(&a, &b), sort_key(&a).cmp(&sort_key(&b)));
    }

    #[test]
    fn compare_ignores_case_and_padding(a in "[a-zĉĝĥĵŝŭ]{1,8}") {
        let padded = format!("  {}\t", a.to_uppercase());
        prop_assert_eq!(compare(&a, &padded), Ordering::Equal);
    }
}

#[test]
fn test_alphabet_order() {
    assert_eq!(compare("adiaŭ", "ĉielo"), Ordering::Less);
    assert_eq!(compare("cxu", "ĉu"), Ordering::Less);
    assert_eq!(compare("ĉu", "du"), Ordering::Less);
    assert_eq!(compare("a b", "ab"), Ordering::Less);
    assert_eq!(compare("-foo", "afoo"), Ordering::Less);
    assert_eq!(compare("sal", "saluto"), Ordering::Less);
    assert_eq!(compare("", "a"), Ordering::Less);
}

#[test]
fn test_outside_alphabet_sorts_last() {
    assert_eq!(compare("a1", "ab"), Ordering::Greater);
    assert_eq!(compare("1", "z"), Ordering::Greater);
    assert_eq!(compare("x1b", "x2a"), Ordering::Less);
}

#[test]
fn test_sort_words() {
    let mut words = vec!["ŝipo", "zebro", "sako", "-ad-", "Ĉapelo", "ĥoro", "hundo"];
    sort_words(&mut words);
    assert_eq!(
        words,
        ["-ad-", "Ĉapelo", "hundo", "ĥoro", "sako", "ŝipo", "zebro"]
    );
}
