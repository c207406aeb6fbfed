//! Fixed-width field formatting.
//!
//! NACHA records are 94-character lines built by concatenating fields of
//! exact widths. These helpers guarantee the length postcondition: the
//! output is always exactly `width` characters, padding short values and
//! truncating long ones rather than erroring.

/// Alignment for blank-padded text fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    /// Value first, trailing spaces (text fields).
    Left,
    /// Leading spaces, value last (e.g. immediate destination routing).
    Right,
}

/// Pads `value` with spaces to exactly `width` characters.
///
/// Values longer than `width` are truncated from the right. Truncation is
/// silent; callers that want an error on over-long input must check length
/// before formatting.
pub fn pad_to_width(value: &str, width: usize, align: Align) -> String {
    let len = value.chars().count();
    if len > width {
        return value.chars().take(width).collect();
    }

    match align {
        Align::Left => format!("{:<width$}", value),
        Align::Right => format!("{:>width$}", value),
    }
}

/// Right-justifies `value` with leading zeros to exactly `width` characters.
///
/// Values longer than `width` are truncated from the left, keeping the
/// low-order digits. The NACHA entry hash relies on this: sums wider than
/// the 10-digit field wrap to their last 10 digits.
pub fn zero_pad(value: &str, width: usize) -> String {
    let len = value.chars().count();
    if len > width {
        return value.chars().skip(len - width).collect();
    }

    format!("{:0>width$}", value)
}

/// Renders an unsigned number as a zero-padded decimal string of `width`.
pub fn zero_pad_num(value: u64, width: usize) -> String {
    zero_pad(&value.to_string(), width)
}
