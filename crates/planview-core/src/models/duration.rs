//! Day counts embedded in free-text duration strings.

/// Extract the leading integer of a duration string such as `"30 days"`.
///
/// Leading whitespace is skipped and an optional sign is accepted, followed
/// by the longest run of ASCII digits. Anything after the digits is ignored.
/// Returns `None` when no digits follow. Values beyond `i64` saturate.
///
/// ```rust
/// use planview_core::models::leading_days;
///
/// assert_eq!(leading_days("30 days"), Some(30));
/// assert_eq!(leading_days("  7"), Some(7));
/// assert_eq!(leading_days("about a week"), None);
/// ```
pub fn leading_days(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    // Only overflow can fail here: the run is all ASCII digits.
    let value = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}
