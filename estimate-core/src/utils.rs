//! Normalization of the form's numeric text inputs.

use rust_decimal::Decimal;

/// Strips whitespace and comma thousands separators.
fn normalize(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses a numeric form field into a [`Decimal`].
///
/// Accepts comma thousands separators (`"1,234.56"`). Empty, whitespace-only
/// or unparseable input becomes zero — the form's arithmetic never sees a
/// parse failure. Garbage input is logged at warn.
pub fn parse_amount(s: &str) -> Decimal {
    let normalized = normalize(s);
    if normalized.is_empty() {
        return Decimal::ZERO;
    }
    normalized.parse().unwrap_or_else(|e| {
        tracing::warn!(input = %s, "unparseable amount treated as zero: {}", e);
        Decimal::ZERO
    })
}

/// Parses an optional numeric form field, such as the tax rate.
///
/// Empty input means "not set". Unparseable input is also rejected as
/// `None` (logged at warn) rather than becoming a spurious zero.
pub fn parse_optional_amount(s: &str) -> Option<Decimal> {
    let normalized = normalize(s);
    if normalized.is_empty() {
        return None;
    }
    normalized.parse().map_or_else(
        |e| {
            tracing::warn!(input = %s, "unparseable optional amount ignored: {}", e);
            None
        },
        Some,
    )
}
