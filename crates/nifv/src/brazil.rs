//! Brazil CPF (individuals) and CNPJ (legal entities)
//!
//! Both carry two trailing mod-11 check digits. A remainder giving 10 or 11
//! collapses to 0.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::normalize::{digits, is_all_zero, strip_separators};

pub const CPF_LENGTH: usize = 11;
pub const CNPJ_LENGTH: usize = 14;

/// The two check digits closing a CPF or CNPJ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct CheckDigitPair {
    pub first: u32,
    pub second: u32,
}

impl CheckDigitPair {
    fn matches(&self, tail: &[u32]) -> bool {
        tail == [self.first, self.second]
    }
}

fn reduce(value: i64) -> u32 {
    // rem_euclid keeps the result non-negative when the weighted sum exceeds 11
    (value.rem_euclid(11) % 10) as u32
}

/// Compute the CPF check digits from the first nine digits of `base`.
///
/// Returns `None` when fewer than nine digits are supplied.
pub fn cpf_check_digits(base: &[u32]) -> Option<CheckDigitPair> {
    let base = base.get(..9)?;
    let weighted = |offset: i64| -> i64 {
        base.iter()
            .enumerate()
            .map(|(i, &d)| (offset - i as i64) * d as i64)
            .sum()
    };

    let first = reduce(11 - weighted(10));
    let second = reduce(11 - (weighted(11) + 2 * first as i64));
    Some(CheckDigitPair { first, second })
}

/// Compute the CNPJ check digits from the first twelve digits of `base`.
///
/// Weights cycle 5..2 then 9..2 for the first digit and 6..2 then 9..2 for
/// the second.
pub fn cnpj_check_digits(base: &[u32]) -> Option<CheckDigitPair> {
    let base = base.get(..12)?;
    let weighted = |start: i64| -> i64 {
        base.iter()
            .enumerate()
            .map(|(i, &d)| ((start - i as i64).rem_euclid(8) + 2) * d as i64)
            .sum()
    };

    let first = reduce(11 - weighted(3));
    let second = reduce(11 - weighted(4) - 2 * first as i64);
    Some(CheckDigitPair { first, second })
}

/// Validate a CPF and return it as `XXX.XXX.XXX-XX`.
///
/// # Examples
/// ```
/// use nifv::validate_cpf;
///
/// assert_eq!(validate_cpf("390  533  44705   "), Some("390.533.447-05".to_string()));
/// assert_eq!(validate_cpf("39053344706"), None);
/// ```
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn validate_cpf(cpf: &str) -> Option<String> {
    let cpf = strip_separators(cpf);
    let d = digits(&cpf).filter(|d| d.len() == CPF_LENGTH && !is_all_zero(d))?;

    if !cpf_check_digits(&d)?.matches(&d[9..]) {
        debug!("CPF rejected: check digit mismatch");
        return None;
    }

    Some(format!(
        "{}.{}.{}-{}",
        &cpf[0..3],
        &cpf[3..6],
        &cpf[6..9],
        &cpf[9..11]
    ))
}

/// Validate a CNPJ and return it as `XX.XXX.XXX/XXXX-XX`.
///
/// # Examples
/// ```
/// use nifv::validate_cnpj;
///
/// assert_eq!(
///     validate_cnpj("16.   727.230/0001-97  "),
///     Some("16.727.230/0001-97".to_string())
/// );
/// ```
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn validate_cnpj(cnpj: &str) -> Option<String> {
    let cnpj = strip_separators(cnpj);
    let d = digits(&cnpj).filter(|d| d.len() == CNPJ_LENGTH && !is_all_zero(d))?;

    if !cnpj_check_digits(&d)?.matches(&d[12..]) {
        debug!("CNPJ rejected: check digit mismatch");
        return None;
    }

    Some(format!(
        "{}.{}.{}/{}-{}",
        &cnpj[0..2],
        &cnpj[2..5],
        &cnpj[5..8],
        &cnpj[8..12],
        &cnpj[12..14]
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Vec<u32> {
        s.chars().map(|c| c.to_digit(10).unwrap()).collect()
    }

    #[test]
    fn test_cpf_check_digits() {
        assert_eq!(
            cpf_check_digits(&parse("390533447")),
            Some(CheckDigitPair { first: 0, second: 5 })
        );
        assert_eq!(
            cpf_check_digits(&parse("111444777")),
            Some(CheckDigitPair { first: 3, second: 5 })
        );
        assert_eq!(
            cpf_check_digits(&parse("000000001")),
            Some(CheckDigitPair { first: 9, second: 1 })
        );
        assert_eq!(cpf_check_digits(&parse("12345678")), None);
    }

    #[test]
    fn test_cnpj_check_digits() {
        assert_eq!(
            cnpj_check_digits(&parse("167272300001")),
            Some(CheckDigitPair { first: 9, second: 7 })
        );
        assert_eq!(
            cnpj_check_digits(&parse("112223330001")),
            Some(CheckDigitPair { first: 8, second: 1 })
        );
        assert_eq!(cnpj_check_digits(&parse("11222333000")), None);
    }

    #[test]
    fn test_valid_cpf() {
        assert_eq!(validate_cpf("39053344705"), Some("390.533.447-05".to_string()));
        assert_eq!(validate_cpf("111.444.777-35"), Some("111.444.777-35".to_string()));
        assert_eq!(validate_cpf("00000000191"), Some("000.000.001-91".to_string()));
    }

    #[test]
    fn test_invalid_cpf() {
        assert_eq!(validate_cpf("39053344750"), None);
        assert_eq!(validate_cpf("00000000000"), None);
        assert_eq!(validate_cpf("3905334470"), None);
        assert_eq!(validate_cpf("390533447055"), None);
        assert_eq!(validate_cpf("3905334470A"), None);
    }

    #[test]
    fn test_valid_cnpj() {
        assert_eq!(
            validate_cnpj("16727230000197"),
            Some("16.727.230/0001-97".to_string())
        );
        assert_eq!(
            validate_cnpj("11.222.333/0001-81"),
            Some("11.222.333/0001-81".to_string())
        );
    }

    #[test]
    fn test_invalid_cnpj() {
        assert_eq!(validate_cnpj("16727230000198"), None);
        assert_eq!(validate_cnpj("00000000000000"), None);
        assert_eq!(validate_cnpj("1672723000019"), None);
        assert_eq!(validate_cnpj(""), None);
    }
}
