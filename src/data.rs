//! Total parsing helpers for catalog fields. Malformed input degrades to
//! `None` here; load-time policy (drop the record, keep it with an absent
//! field) lives in the catalog module.

/// Extract an eruption year from free-form last-eruption text.
///
/// The catalog writes values like `"1991 CE"`, `"Unknown"`, or `"-50000"`.
/// The year is the prefix of up to four characters, accepted only when it is
/// non-empty and every character is an ASCII decimal digit. A leading hyphen
/// (BCE notation) therefore yields `None`.
pub fn parse_year_prefix(raw: &str) -> Option<i32> {
    let prefix: String = raw.chars().take(4).collect();
    if prefix.is_empty() || !prefix.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    prefix.parse().ok()
}

/// Parse a numeric field, treating blanks and malformed text as absent.
pub fn parse_optional_f64(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}
