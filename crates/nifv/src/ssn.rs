//! US Social Security Number

use tracing::debug;

use crate::normalize::{digits, strip_separators};

/// Validate an SSN and return it as `AAA-GG-SSSS`.
///
/// The area number may not be 000, 666 or start with 9; the group may not
/// be 00 and the serial may not be 0000.
///
/// # Examples
/// ```
/// use nifv::validate_ssn;
///
/// assert_eq!(validate_ssn("625 47 3316"), Some("625-47-3316".to_string()));
/// assert_eq!(validate_ssn("666-12-3456"), None);
/// ```
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn validate_ssn(ssn: &str) -> Option<String> {
    let ssn = strip_separators(ssn);
    let d = digits(&ssn).filter(|d| d.len() == 9)?;

    let area = &ssn[0..3];
    let valid = area != "000"
        && area != "666"
        && d[0] <= 8
        && &ssn[3..5] != "00"
        && &ssn[5..9] != "0000";

    if !valid {
        debug!("SSN rejected: reserved area, group or serial");
        return None;
    }
    Some(format!("{}-{}-{}", area, &ssn[3..5], &ssn[5..9]))
}
