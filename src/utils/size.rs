//! Human-readable byte magnitudes.
//!
//! This module converts signed byte counts into strings such as `"1.5 KiB"` or
//! `"-2.0 MiB"`, using binary (1024-based) units from bytes up to exbibytes.

/// Unit suffixes indexed by the number of divisions by 1024.
const UNITS: [&str; 7] = ["B", "KiB", "MiB", "GiB", "TiB", "PiB", "EiB"];

/// Returned when a value needs more divisions than [`UNITS`] can name.
pub const MAGNITUDE_UNAVAILABLE: &str = "N/A";

/// Convert a signed byte count into a human-readable magnitude string.
///
/// The absolute value is divided by 1024 while it is strictly greater than
/// 1024, and the number of divisions selects the unit. The scaled value keeps
/// its sign and is printed with one fractional digit.
///
/// Values that would need more than six divisions (anything above 1024^7
/// bytes) yield [`MAGNITUDE_UNAVAILABLE`] instead of a number.
///
/// # Arguments
///
/// * `bytes` - The byte count to format; negative values are size growth
///
/// # Returns
///
/// The formatted magnitude, e.g. `"1000.0 B"`, `"1.5 KiB"`, `"-2.0 MiB"`.
///
/// # Examples
///
/// ```
/// # use dir_compare::utils::convert_magnitude;
/// assert_eq!(convert_magnitude(0), "0.0 B");
/// assert_eq!(convert_magnitude(1536), "1.5 KiB");
/// assert_eq!(convert_magnitude(-2_097_152), "-2.0 MiB");
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn convert_magnitude(bytes: i128) -> String {
    let mut representation = bytes as f64;
    let mut divisions = 0usize;

    while representation.abs() > 1024.0 {
        representation /= 1024.0;
        divisions += 1;
    }

    UNITS.get(divisions).map_or_else(
        || MAGNITUDE_UNAVAILABLE.to_string(),
        |unit| format!("{representation:.1} {unit}"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const KIB: i128 = 1024;

    #[test]
    fn test_convert_magnitude_zero() {
        assert_eq!(convert_magnitude(0), "0.0 B");
    }

    #[test]
    fn test_convert_magnitude_plain_bytes() {
        assert_eq!(convert_magnitude(1), "1.0 B");
        assert_eq!(convert_magnitude(500), "500.0 B");
        assert_eq!(convert_magnitude(1000), "1000.0 B");
    }

    #[test]
    fn test_convert_magnitude_exactly_1024_stays_in_bytes() {
        // Division only happens while the value is strictly above 1024
        assert_eq!(convert_magnitude(1024), "1024.0 B");
        assert_eq!(convert_magnitude(1025), "1.0 KiB");
    }

    #[test]
    fn test_convert_magnitude_binary_units() {
        assert_eq!(convert_magnitude(1536), "1.5 KiB");
        assert_eq!(convert_magnitude(2000), "2.0 KiB");
        assert_eq!(convert_magnitude(3 * KIB * KIB), "3.0 MiB");
        assert_eq!(convert_magnitude(5 * KIB.pow(3)), "5.0 GiB");
        assert_eq!(convert_magnitude(7 * KIB.pow(4)), "7.0 TiB");
        assert_eq!(convert_magnitude(2 * KIB.pow(5)), "2.0 PiB");
        assert_eq!(convert_magnitude(4 * KIB.pow(6)), "4.0 EiB");
    }

    #[test]
    fn test_convert_magnitude_negative_values_keep_sign() {
        assert_eq!(convert_magnitude(-2_097_152), "-2.0 MiB");
        assert_eq!(convert_magnitude(-500), "-500.0 B");
        assert_eq!(convert_magnitude(-1536), "-1.5 KiB");
    }

    #[test]
    fn test_convert_magnitude_rounds_to_one_digit() {
        assert_eq!(convert_magnitude(3000), "2.9 KiB");
        assert_eq!(convert_magnitude(1500), "1.5 KiB");
    }

    #[test]
    fn test_convert_magnitude_largest_i64() {
        assert_eq!(convert_magnitude(i128::from(i64::MAX)), "8.0 EiB");
        assert_eq!(convert_magnitude(i128::from(u64::MAX)), "16.0 EiB");
    }

    #[test]
    fn test_convert_magnitude_cap_returns_sentinel() {
        assert_eq!(convert_magnitude(KIB.pow(7)), "1024.0 EiB");
        assert_eq!(convert_magnitude(2 * KIB.pow(7)), MAGNITUDE_UNAVAILABLE);
        assert_eq!(convert_magnitude(-(KIB.pow(8))), MAGNITUDE_UNAVAILABLE);
    }

    use proptest::prelude::*;

    fn unit_of(formatted: &str) -> Option<usize> {
        let suffix = formatted.rsplit(' ').next()?;
        UNITS.iter().position(|unit| *unit == suffix)
    }

    proptest! {
        /// Property: scaling by 1024 moves exactly one unit up
        #[test]
        fn prop_scaling_by_1024_shifts_one_unit(bytes in 1025i128..(1i128 << 60)) {
            let base = unit_of(&convert_magnitude(bytes));
            let scaled = unit_of(&convert_magnitude(bytes * 1024));

            prop_assert!(base.is_some());
            match (base, scaled) {
                (Some(b), Some(s)) => prop_assert_eq!(s, b + 1),
                (Some(b), None) => prop_assert_eq!(b, UNITS.len() - 1),
                _ => {}
            }
        }

        /// Property: the sign of the input is the sign of the output
        #[test]
        fn prop_negation_mirrors_output(bytes in 1i128..(1i128 << 62)) {
            let positive = convert_magnitude(bytes);
            let negative = convert_magnitude(-bytes);
            prop_assert_eq!(negative, format!("-{positive}"));
        }
    }
}
