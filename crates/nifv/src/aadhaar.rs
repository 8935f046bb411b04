//! India Aadhaar number (UIDAI)

use tracing::debug;

use crate::checksum::verhoeff_is_valid;
use crate::normalize::{digits, strip_separators};

pub const AADHAAR_LENGTH: usize = 12;

/// Validate an Aadhaar number and return it grouped as `XXXX XXXX XXXX`.
///
/// The number is twelve digits, never starts with 0 or 1, and ends in a
/// Verhoeff check digit.
///
/// # Examples
/// ```
/// use nifv::validate_aadhaar;
///
/// assert_eq!(
///     validate_aadhaar("8284 0242-15  50"),
///     Some("8284 0242 1550".to_string())
/// );
/// ```
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn validate_aadhaar(aadhaar: &str) -> Option<String> {
    let aadhaar = strip_separators(aadhaar);
    let d = digits(&aadhaar).filter(|d| d.len() == AADHAAR_LENGTH)?;

    if d[0] < 2 {
        debug!("Aadhaar rejected: leading digit {}", d[0]);
        return None;
    }
    if !verhoeff_is_valid(&d) {
        debug!("Aadhaar rejected: Verhoeff checksum mismatch");
        return None;
    }

    Some(format!(
        "{} {} {}",
        &aadhaar[0..4],
        &aadhaar[4..8],
        &aadhaar[8..12]
    ))
}
