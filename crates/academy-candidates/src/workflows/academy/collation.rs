//! Name ordering close to the root-locale collation used by `localeCompare`.
//!
//! Primary strength: characters compare by class (spaces, then punctuation and
//! symbols, then digits, then letters) and then by base letter, with
//! diacritics removed through canonical decomposition and case folded.
//! Remaining ties: unaccented before accented, lowercase before uppercase,
//! then raw text.

use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

pub fn compare(left: &str, right: &str) -> Ordering {
    primary(left)
        .cmp(primary(right))
        .then_with(|| secondary(left).cmp(secondary(right)))
        .then_with(|| tertiary(left).cmp(tertiary(right)))
        .then_with(|| left.cmp(right))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum CharClass {
    Space,
    Symbol,
    Digit,
    Letter,
}

impl CharClass {
    fn of(ch: char) -> Self {
        if ch.is_whitespace() {
            Self::Space
        } else if ch.is_numeric() {
            Self::Digit
        } else if ch.is_alphabetic() {
            Self::Letter
        } else {
            Self::Symbol
        }
    }
}

/// Base letter and whether diacritics were dropped to reach it.
fn fold(ch: char) -> (char, bool) {
    let mut base = None;
    let mut marked = false;
    for part in std::iter::once(ch).nfd() {
        if is_combining_mark(part) {
            marked = true;
        } else if base.is_none() {
            base = Some(part);
        }
    }

    let base = base.unwrap_or(ch);
    match stroked_base(base) {
        Some(plain) => (plain, true),
        None => (base, marked),
    }
}

/// Letters with a stroke or bar have no canonical decomposition.
fn stroked_base(ch: char) -> Option<char> {
    match ch {
        'đ' => Some('d'),
        'ħ' => Some('h'),
        'ł' => Some('l'),
        'ø' => Some('o'),
        'ŧ' => Some('t'),
        'ƀ' => Some('b'),
        'ƶ' => Some('z'),
        _ => None,
    }
}

fn lowered(value: &str) -> impl Iterator<Item = char> + '_ {
    value.chars().flat_map(char::to_lowercase)
}

fn primary(value: &str) -> impl Iterator<Item = (CharClass, char)> + '_ {
    lowered(value).map(|ch| {
        let (base, _) = fold(ch);
        (CharClass::of(base), base)
    })
}

fn secondary(value: &str) -> impl Iterator<Item = bool> + '_ {
    lowered(value).map(|ch| fold(ch).1)
}

fn tertiary(value: &str) -> impl Iterator<Item = bool> + '_ {
    value.chars().map(char::is_uppercase)
}
