//! Value normalization applied before albums are persisted or used as filters.

/// Rounds a price to 2 decimals, half away from zero.
///
/// Idempotent: `normalize_price(normalize_price(x)) == normalize_price(x)`.
pub fn normalize_price(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Lowercases the input, then capitalizes the first letter of every word.
///
/// A word starts after any character that is not a letter, digit or `_`.
pub fn title_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if at_word_start {
            result.extend(c.to_uppercase());
        } else {
            result.extend(c.to_lowercase());
        }
        at_word_start = !(c.is_alphanumeric() || c == '_');
    }
    result
}
