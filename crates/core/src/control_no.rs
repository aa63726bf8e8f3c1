//! Control-number sequencing and formatting.
//!
//! Register entries are identified by a per-month sequential control number
//! of the form `YYYY-MM-NNN`. The sequence component is zero-padded to three
//! digits; padding only pads up, so a four-digit sequence keeps all of its
//! digits (`2024-05-1000`).

/// Minimum width of the sequence component.
const SEQUENCE_WIDTH: usize = 3;

/// Parse the numeric sequence suffix of a control number.
///
/// The suffix is the text after the LAST hyphen, parsed as an unsigned
/// integer. Returns `None` for values without a parseable suffix.
pub fn sequence_suffix(control_no: &str) -> Option<u64> {
    control_no.rsplit('-').next()?.parse().ok()
}

/// Next sequence for a month, given the maximum already assigned there.
///
/// An empty month (no existing records) starts at 1.
pub fn next_sequence(max_existing: Option<u64>) -> u64 {
    max_existing.map_or(1, |max| max + 1)
}

/// Format a control number from its year-month prefix and sequence.
pub fn format_control_no(year_month: &str, sequence: u64) -> String {
    format!("{year_month}-{sequence:0width$}", width = SEQUENCE_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    // -----------------------------------------------------------------------
    // Suffix parsing
    // -----------------------------------------------------------------------

    #[test]
    fn suffix_after_last_hyphen() {
        assert_eq!(sequence_suffix("2024-05-007"), Some(7));
        assert_eq!(sequence_suffix("2024-05-010"), Some(10));
    }

    #[test]
    fn suffix_with_four_digits() {
        assert_eq!(sequence_suffix("2024-05-1000"), Some(1000));
    }

    #[test]
    fn suffix_without_hyphen_is_the_whole_value() {
        assert_eq!(sequence_suffix("42"), Some(42));
    }

    #[test]
    fn non_numeric_suffix_is_none() {
        assert_eq!(sequence_suffix("2024-05-abc"), None);
        assert_eq!(sequence_suffix("2024-05-"), None);
        assert_eq!(sequence_suffix(""), None);
    }

    // -----------------------------------------------------------------------
    // Sequencing
    // -----------------------------------------------------------------------

    #[test]
    fn empty_month_starts_at_one() {
        assert_eq!(next_sequence(None), 1);
    }

    #[test]
    fn next_is_max_plus_one() {
        assert_eq!(next_sequence(Some(10)), 11);
    }

    // -----------------------------------------------------------------------
    // Formatting
    // -----------------------------------------------------------------------

    #[test]
    fn pads_to_three_digits() {
        assert_eq!(format_control_no("2024-05", 1), "2024-05-001");
        assert_eq!(format_control_no("2024-05", 7), "2024-05-007");
        assert_eq!(format_control_no("2024-05", 86), "2024-05-086");
    }

    #[test]
    fn never_truncates_long_sequences() {
        assert_eq!(format_control_no("2024-05", 1000), "2024-05-1000");
    }

    #[test]
    fn format_then_parse_roundtrips() {
        let no = format_control_no("2025-01", 11);
        assert_eq!(sequence_suffix(&no), Some(11));
    }
}
