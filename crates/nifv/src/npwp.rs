//! Indonesia NPWP (Nomor Pokok Wajib Pajak)

use tracing::debug;

use crate::checksum::luhn_is_valid;
use crate::normalize::{digits, strip_separators};

pub const NPWP_LENGTH: usize = 15;

/// Validate an NPWP and return it as `XX.XXX.XXX.X-XXX.XX`.
///
/// The first nine digits (taxpayer serial plus check digit) must pass the
/// Luhn check; the remaining six encode the tax office and branch.
///
/// # Examples
/// ```
/// use nifv::validate_npwp;
///
/// assert_eq!(
///     validate_npwp("013000666091000"),
///     Some("01.300.066.6-091.000".to_string())
/// );
/// ```
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn validate_npwp(npwp: &str) -> Option<String> {
    let npwp = strip_separators(npwp);
    let d = digits(&npwp).filter(|d| d.len() == NPWP_LENGTH)?;

    if !luhn_is_valid(&d[..9]) {
        debug!("NPWP rejected: Luhn checksum mismatch");
        return None;
    }

    Some(format!(
        "{}.{}.{}.{}-{}.{}",
        &npwp[0..2],
        &npwp[2..5],
        &npwp[5..8],
        &npwp[8..9],
        &npwp[9..12],
        &npwp[12..15]
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_npwp() {
        assert_eq!(
            validate_npwp("01.300.066.6-091.000"),
            Some("01.300.066.6-091.000".to_string())
        );
    }

    #[test]
    fn test_office_digits_not_checksummed() {
        assert_eq!(
            validate_npwp("013000666999999"),
            Some("01.300.066.6-999.999".to_string())
        );
    }

    #[test]
    fn test_bad_checksum() {
        assert_eq!(validate_npwp("013000667091000"), None);
    }

    #[test]
    fn test_wrong_length() {
        assert_eq!(validate_npwp("01300066609100"), None);
        assert_eq!(validate_npwp("0130006660910000"), None);
        assert_eq!(validate_npwp("./-"), None);
    }
}
