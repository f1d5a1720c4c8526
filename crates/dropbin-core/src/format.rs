//! Human-readable size formatting.

/// Bytes per megabyte as used in every user-facing size (MiB).
pub const BYTES_PER_MB: u64 = 1024 * 1024;

/// Format `bytes` as megabytes with `decimals` fractional digits.
///
/// No unit suffix; callers add `" MB"` where the message needs it.
#[must_use]
#[allow(clippy::cast_precision_loss)] // sizes far below 2^52 bytes
pub fn megabytes(bytes: u64, decimals: usize) -> String {
    let mb = bytes as f64 / BYTES_PER_MB as f64;
    format!("{mb:.decimals$}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_decimal_for_limits() {
        assert_eq!(megabytes(BYTES_PER_MB, 1), "1.0");
        assert_eq!(megabytes(4 * BYTES_PER_MB + BYTES_PER_MB / 2, 1), "4.5");
        assert_eq!(megabytes(0, 1), "0.0");
    }

    #[test]
    fn two_decimals_for_tooltips() {
        assert_eq!(megabytes(500 * 1024, 2), "0.49");
        assert_eq!(megabytes(2 * BYTES_PER_MB, 2), "2.00");
        assert_eq!(megabytes(1536 * 1024, 2), "1.50");
    }
}
