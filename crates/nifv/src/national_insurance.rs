//! UK National Insurance number (NINO)

use tracing::debug;

use crate::normalize::strip_separators;

/// Prefixes never allocated as the first two letters.
const UNALLOCATED_PREFIXES: [&str; 7] = ["BG", "GB", "NK", "KN", "TN", "NT", "ZZ"];
const INVALID_FIRST_LETTERS: [char; 6] = ['D', 'F', 'I', 'Q', 'U', 'V'];
const INVALID_SECOND_LETTERS: [char; 7] = ['D', 'F', 'I', 'O', 'Q', 'U', 'V'];
const SUFFIX_LETTERS: [char; 4] = ['A', 'B', 'C', 'D'];

/// Validate a UK National Insurance number.
///
/// Expects upper-case input; case is not folded. The five characters at
/// positions 3 to 7 must be digits, and a nine-character number must end
/// in a suffix letter `A`-`D`. The eight-character form (suffix omitted)
/// is accepted. Returns the number with separators removed.
///
/// # Examples
/// ```
/// use nifv::validate_national_insurance_number;
///
/// assert_eq!(
///     validate_national_insurance_number("AA 11 22 33 D"),
///     Some("AA112233D".to_string())
/// );
/// assert_eq!(validate_national_insurance_number("GB 11 22 33 A"), None);
/// ```
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn validate_national_insurance_number(nino: &str) -> Option<String> {
    let nino = strip_separators(nino);
    let chars: Vec<char> = nino.chars().collect();

    let rejection = if chars.len() < 8 {
        Some("too short")
    } else if UNALLOCATED_PREFIXES
        .iter()
        .any(|prefix| prefix.chars().eq(chars[..2].iter().copied()))
    {
        Some("unallocated prefix")
    } else if INVALID_FIRST_LETTERS.contains(&chars[0]) {
        Some("invalid first letter")
    } else if INVALID_SECOND_LETTERS.contains(&chars[1]) {
        Some("invalid second letter")
    } else if !chars[3..8].iter().all(|c| c.is_ascii_digit()) {
        Some("non-digit in number block")
    } else if chars.len() == 9 && !SUFFIX_LETTERS.contains(&chars[8]) {
        Some("invalid suffix letter")
    } else {
        None
    };

    match rejection {
        Some(reason) => {
            debug!("National Insurance number rejected: {}", reason);
            None
        }
        None => Some(nino),
    }
}
