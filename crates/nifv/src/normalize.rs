//! Input normalization shared by every validator

/// Characters accepted as group separators in identifier input.
pub const SEPARATORS: [char; 4] = [' ', '-', '.', '/'];

/// Remove separator characters and surrounding whitespace.
///
/// Case is left untouched, which is what the numeric identifiers want.
pub fn strip_separators(input: &str) -> String {
    input
        .chars()
        .filter(|c| !SEPARATORS.contains(c))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Remove separators and upper-case the result (alphanumeric identifiers).
///
/// # Examples
/// ```
/// use nifv::normalize;
/// assert_eq!(normalize(" abcp-m0.001/n "), "ABCPM0001N");
/// ```
pub fn normalize(input: &str) -> String {
    strip_separators(input).to_uppercase()
}

/// Convert an all-ASCII-digit string into its digit values.
///
/// Returns `None` if any character is not `0`-`9`.
pub fn digits(input: &str) -> Option<Vec<u32>> {
    input
        .chars()
        .map(|c| if c.is_ascii_digit() { c.to_digit(10) } else { None })
        .collect()
}

/// Numeric identifiers with all digits zero are rejected by the Brazilian checks.
pub(crate) fn is_all_zero(digits: &[u32]) -> bool {
    digits.iter().all(|&d| d == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_separators() {
        assert_eq!(strip_separators("390.533.447-05"), "39053344705");
        assert_eq!(strip_separators("16.727.230/0001-97"), "16727230000197");
        assert_eq!(strip_separators("  8284 0242-15  50 "), "828402421550");
    }

    #[test]
    fn test_strip_keeps_case() {
        assert_eq!(strip_separators("ab 12"), "ab12");
    }

    #[test]
    fn test_strip_trims_other_whitespace() {
        assert_eq!(strip_separators("\t123\n"), "123");
    }

    #[test]
    fn test_only_separators() {
        assert_eq!(normalize(" - . / "), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize("abcp m0 00    1n");
        assert_eq!(once, "ABCPM0001N");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn test_digits() {
        assert_eq!(digits("0907"), Some(vec![0, 9, 0, 7]));
        assert_eq!(digits("12a4"), None);
        assert_eq!(digits("１２"), None); // fullwidth digits are not ASCII
        assert_eq!(digits(""), Some(vec![]));
    }

    #[test]
    fn test_is_all_zero() {
        assert!(is_all_zero(&[0, 0, 0]));
        assert!(!is_all_zero(&[0, 1, 0]));
    }
}
