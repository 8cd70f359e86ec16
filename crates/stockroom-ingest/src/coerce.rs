//! Field coercion for uploaded stock figures.

/// Maximum stock used when a row gives no usable capacity.
pub const DEFAULT_MAX_STOCK: u32 = 1000;

/// Parses the leading integer of a cell.
///
/// Leading whitespace and a `+` sign are accepted and anything after the
/// digits is ignored, so `"12 units"` is 12 and `"3.7"` is 3. Values past
/// `u32::MAX` saturate to it. Negative and non-numeric values yield `None`.
pub fn parse_stock(value: Option<&str>) -> Option<u32> {
    let value = value?.trim_start();
    if value.starts_with('-') {
        return None;
    }
    let unsigned = value.strip_prefix('+').unwrap_or(value);
    let end = unsigned
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = &unsigned[..end];
    if digits.is_empty() {
        return None;
    }
    // Only ASCII digits remain, so a failed parse is an overflow.
    Some(digits.parse().unwrap_or(u32::MAX))
}

/// Current or minimum stock: unusable values become 0.
pub fn stock_or_zero(value: Option<&str>) -> u32 {
    parse_stock(value).unwrap_or(0)
}

/// Maximum stock: unusable values, and 0, become [`DEFAULT_MAX_STOCK`].
pub fn max_stock_or_default(value: Option<&str>) -> u32 {
    parse_stock(value)
        .filter(|max| *max > 0)
        .unwrap_or(DEFAULT_MAX_STOCK)
}

/// floor(capacity × 0.2), computed exactly.
pub fn minimum_stock_for_capacity(capacity: u32) -> u32 {
    capacity / 5
}
