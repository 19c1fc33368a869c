//! Parsing of human-readable odds strings such as "1 in 1,000,000".

use super::types::OddsSpec;

/// Characters stripped from the digit group before numeric parsing.
const DIGIT_DELIMITERS: [char; 3] = [',', '_', ' '];

/// Parses an odds string into base odds.
///
/// Accepted forms (case-insensitive):
/// - `1 in 1,000` / `1 in 2.5m` / `1in50`
/// - a bare denominator: `5000`, `10k`
///
/// Anything containing a `?` or the word "unknown", empty text, text that
/// doesn't match, or a non-positive denominator yields `OddsSpec::Unknown`.
pub fn parse(text: &str) -> OddsSpec {
    let lower = text.trim().to_lowercase();
    if lower.is_empty() || lower.contains('?') || lower.contains("unknown") {
        return OddsSpec::Unknown;
    }

    let number = strip_one_in(&lower).unwrap_or(&lower);
    match parse_number(number) {
        Some(n) => OddsSpec::denominator(n),
        None => OddsSpec::Unknown,
    }
}

/// Returns the text after a leading "1 in", if present.
fn strip_one_in(text: &str) -> Option<&str> {
    let rest = text.strip_prefix('1')?.trim_start();
    let rest = rest.strip_prefix("in")?;
    Some(rest.trim_start())
}

/// Parses a denominator, allowing thousands delimiters and a k/m/b suffix.
fn parse_number(text: &str) -> Option<f64> {
    let cleaned: String = text
        .chars()
        .filter(|c| !DIGIT_DELIMITERS.contains(c))
        .collect();

    let (digits, scale) = match cleaned.chars().last()? {
        'k' => (&cleaned[..cleaned.len() - 1], 1e3),
        'm' => (&cleaned[..cleaned.len() - 1], 1e6),
        'b' => (&cleaned[..cleaned.len() - 1], 1e9),
        _ => (cleaned.as_str(), 1.0),
    };

    // f64::from_str also takes "inf"/"nan"; only plain decimals are odds.
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return None;
    }

    digits.parse::<f64>().ok().map(|n| n * scale)
}
