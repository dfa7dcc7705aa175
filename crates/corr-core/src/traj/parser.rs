use crate::domain::{TrajField, TrajFormat};

/// Legacy NAMD `.traj` byte layout: field n starts at `FIXED_FIELD_OFFSETS[n-1]`
/// and spans exactly `FIXED_FIELD_WIDTH` bytes.
pub(super) const FIXED_FIELD_OFFSETS: [usize; 3] = [15, 37, 61];
pub(super) const FIXED_FIELD_WIDTH: usize = 23;

pub(super) const COMMENT_BYTE: u8 = b'#';

/// A record is skipped when it has no data byte at all or starts with `#`.
pub(super) fn is_skipped_record(line: &str) -> bool {
    match line.as_bytes().first() {
        None => true,
        Some(&first) => first == COMMENT_BYTE,
    }
}

/// Raw substring for the requested field, or `None` when the record cannot
/// supply it (short line, missing token, split mid-character).
pub(super) fn field_substring(line: &str, field: TrajField, format: TrajFormat) -> Option<&str> {
    match format {
        TrajFormat::FixedWidth => {
            let begin = FIXED_FIELD_OFFSETS[(field.as_number() - 1) as usize];
            line.get(begin..begin + FIXED_FIELD_WIDTH)
        }
        TrajFormat::Tokenized => line.split_whitespace().nth(field.as_number() as usize),
    }
}

/// Strict numeric conversion of one extracted field.
///
/// The legacy `atof` accepted trailing garbage and turned unparseable text
/// into 0.0 without a trace; here anything that is not a complete finite
/// float is a parse failure, and the caller decides what to substitute.
pub(super) fn parse_field_value(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::{field_substring, is_skipped_record, parse_field_value};
    use crate::domain::{TrajField, TrajFormat};

    // 84-byte record shaped like NAMD z-constraint output: timestep in bytes
    // 0..15, values right-aligned so the legacy windows [15,38), [37,60) and
    // [61,84) each cover one numeric field plus surrounding padding.
    fn fixed_width_record() -> String {
        let mut line = format!("{:>15}", "1000");
        line.push_str(&format!("{:>22}", "12.3456789012345"));
        line.push_str(&format!("{:>23}", "-0.4567890123456"));
        line.push(' ');
        line.push_str(&format!("{:>23}", "7.8901234567890"));
        line
    }

    #[test]
    fn skips_comments_and_empty_records() {
        assert!(is_skipped_record("#TITLE z coordinate"));
        assert!(is_skipped_record(""));
        assert!(!is_skipped_record("  100 1.0 2.0 3.0"));
    }

    #[test]
    fn fixed_width_fields_use_legacy_offsets() {
        let line = fixed_width_record();
        let first = field_substring(&line, TrajField::Field1, TrajFormat::FixedWidth)
            .expect("field 1 substring");
        assert_eq!(first.len(), 23);
        assert_eq!(parse_field_value(first), Some(12.3456789012345));

        let second = field_substring(&line, TrajField::Field2, TrajFormat::FixedWidth)
            .expect("field 2 substring");
        assert_eq!(parse_field_value(second), Some(-0.4567890123456));

        let third = field_substring(&line, TrajField::Field3, TrajFormat::FixedWidth)
            .expect("field 3 substring");
        assert_eq!(parse_field_value(third), Some(7.8901234567890));
    }

    #[test]
    fn short_fixed_width_record_yields_no_substring() {
        assert_eq!(
            field_substring("  100 1.25", TrajField::Field1, TrajFormat::FixedWidth),
            None
        );
    }

    #[test]
    fn tokenized_fields_skip_the_timestep_column() {
        let line = "  100   1.25   -2.5   9.75";
        let value = |field| {
            field_substring(line, field, TrajFormat::Tokenized).and_then(parse_field_value)
        };
        assert_eq!(value(TrajField::Field1), Some(1.25));
        assert_eq!(value(TrajField::Field2), Some(-2.5));
        assert_eq!(value(TrajField::Field3), Some(9.75));
    }

    #[test]
    fn strict_parse_rejects_legacy_atof_leniency() {
        assert_eq!(parse_field_value(" 1.5 "), Some(1.5));
        assert_eq!(parse_field_value("1.5abc"), None);
        assert_eq!(parse_field_value("abc"), None);
        assert_eq!(parse_field_value("nan"), None);
        assert_eq!(parse_field_value("inf"), None);
        assert_eq!(parse_field_value("-3.25e-2"), Some(-0.0325));
    }
}
