//! Matching of pantry ingredients against a recipe's free-text ingredient list.
//!
//! A recipe description is a comma-separated list such as
//! `"당근 2개, 밥 2공기, 계란 2개"`. Each token and each pantry name is reduced
//! to its Hangul core (quantities and units dropped) and compared for equality.
//!
//! Deciding what matches ([`find_matches`], [`highlight`]) is kept apart from
//! turning the result into markup (see [`render`]).

mod render;

pub use render::{highlight_marked, render_escaped, render_raw, MARK_CLOSE, MARK_OPEN};

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

/// Korean counting units and measures that may follow a number, with or
/// without a space. Longer units come first so `봉지` wins over `봉`.
const KOREAN_UNITS: &str = "큰술|작은술|숟가락|티스푼|스푼|컵|공기|봉지|봉|캔|개|알|모|장|쪽|줌|꼬집|조각|팩|마리|토막|줄기|뿌리|송이|포기|단|톨|인분|병";

/// A number, then either a Korean unit ending at a word boundary or attached
/// Latin unit letters (`g`, `ml`, `%`), then an optional parenthetical.
/// A plain Hangul word after the number is never taken as its unit, so
/// `2 당근` keeps `당근` and `3분카레` keeps `분카레`.
static QUANTITY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        r"\d+(?:[./]\d+)?(?:\s*(?:{KOREAN_UNITS})\b|[A-Za-z%]*)(?:\s*\([^)]*\))?"
    );
    Regex::new(&pattern).expect("quantity pattern should be valid")
});

/// One description token paired with a pantry ingredient it refers to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    /// Token text as it appears in the description, trimmed
    pub ingredient: String,
    /// Pantry name as supplied by the caller
    pub pantry_item: String,
}

/// One token of a description with its match flag
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub text: String,
    pub is_match: bool,
}

impl fmt::Display for Segment {
    /// Plain-text form for terminals: matched tokens are bracketed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_match {
            write!(f, "[{}]", self.text)
        } else {
            f.write_str(&self.text)
        }
    }
}

fn is_hangul(c: char) -> bool {
    matches!(c,
        '\u{AC00}'..='\u{D7A3}' // syllables
        | '\u{1100}'..='\u{11FF}' // jamo
        | '\u{3131}'..='\u{318E}' // compatibility jamo
    )
}

/// Reduce `text` to the Hangul characters that name the ingredient.
///
/// Quantity expressions are removed first so that `"당근 2개"` and `"당근2개"`
/// both become `"당근"`; then every non-Hangul character is dropped.
/// Input without Hangul normalizes to the empty string.
pub fn normalize(text: &str) -> String {
    let without_quantities = QUANTITY_REGEX.replace_all(text, " ");
    without_quantities
        .chars()
        .filter(|c| is_hangul(*c))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Split a description into trimmed comma-separated tokens.
pub fn tokens(description: &str) -> impl Iterator<Item = &str> {
    description.split(',').map(str::trim)
}

fn normalized_names<S: AsRef<str>>(pantry_names: &[S]) -> Vec<String> {
    pantry_names.iter().map(|n| normalize(n.as_ref())).collect()
}

/// Every (token, pantry name) pair whose normalized forms are equal and non-empty.
///
/// Results are ordered by token, then by pantry name. Duplicates are kept:
/// the count is shown to users as "N pantry ingredients used".
pub fn find_matches<S: AsRef<str>>(description: &str, pantry_names: &[S]) -> Vec<Match> {
    let normalized_pantry = normalized_names(pantry_names);
    let mut matches = Vec::new();

    for token in tokens(description) {
        let key = normalize(token);
        if key.is_empty() {
            continue;
        }
        for (name, normalized) in pantry_names.iter().zip(&normalized_pantry) {
            if *normalized == key {
                matches.push(Match {
                    ingredient: token.to_string(),
                    pantry_item: name.as_ref().to_string(),
                });
            }
        }
    }

    matches
}

/// Split `description` into segments flagged by whether any pantry name matches.
pub fn highlight<S: AsRef<str>>(description: &str, pantry_names: &[S]) -> Vec<Segment> {
    let normalized_pantry = normalized_names(pantry_names);

    tokens(description)
        .map(|token| {
            let key = normalize(token);
            let is_match = !key.is_empty() && normalized_pantry.iter().any(|n| *n == key);
            Segment {
                text: token.to_string(),
                is_match,
            }
        })
        .collect()
}
