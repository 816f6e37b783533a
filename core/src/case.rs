//! Conversion between identifier-style names (`blue500`, `fontSize`) and the
//! hyphenated names used for CSS custom properties (`blue-500`, `font-size`).
//!
//! Both directions are only defined for the input class produced by the design
//! tool: ASCII identifiers starting lowercase, without acronym runs. `HTTPServer`
//! hyphenates to `httpserver` and does not round-trip.

use convert_case::{Boundary, Case, Casing};
use itertools::Itertools;

const WORD_BOUNDARIES: [Boundary; 3] = [
    Boundary::LowerUpper,
    Boundary::LowerDigit,
    Boundary::UpperDigit,
];

/// `colorPrimary` -> `color-primary`, `blue500` -> `blue-500`.
///
/// Existing hyphens are kept exactly, including leading, doubled and trailing
/// ones (`-1` stays `-1`), so hyphenated input comes back unchanged.
pub fn to_hyphenated(s: &str) -> String {
    s.split('-')
        .map(|piece| piece.with_boundaries(&WORD_BOUNDARIES).to_case(Case::Kebab))
        .join("-")
}

/// `color-primary` -> `colorPrimary`, `blue-500` -> `blue500`.
///
/// Only a hyphen followed by an alphanumeric character is consumed; any other
/// hyphen is kept (`a-` stays `a-`, `a--b` becomes `a-B`).
pub fn to_identifier_style(s: &str) -> String {
    let mut identifier = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        match chars.peek() {
            Some(&next) if c == '-' && next.is_alphanumeric() => {
                identifier.extend(next.to_uppercase());
                chars.next();
            }
            _ => identifier.push(c),
        }
    }
    identifier
}
