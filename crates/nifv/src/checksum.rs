//! Table-driven check-digit algorithms
//!
//! Both algorithms walk the digit sequence from the right, so callers pass
//! digits in their natural reading order and the functions reverse internally.

/// Verhoeff multiplication table (dihedral group D5).
const VERHOEFF_D: [[u32; 10]; 10] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 2, 3, 4, 0, 6, 7, 8, 9, 5],
    [2, 3, 4, 0, 1, 7, 8, 9, 5, 6],
    [3, 4, 0, 1, 2, 8, 9, 5, 6, 7],
    [4, 0, 1, 2, 3, 9, 5, 6, 7, 8],
    [5, 9, 8, 7, 6, 0, 4, 3, 2, 1],
    [6, 5, 9, 8, 7, 1, 0, 4, 3, 2],
    [7, 6, 5, 9, 8, 2, 1, 0, 4, 3],
    [8, 7, 6, 5, 9, 3, 2, 1, 0, 4],
    [9, 8, 7, 6, 5, 4, 3, 2, 1, 0],
];

/// Verhoeff permutation table, indexed by position mod 8.
const VERHOEFF_P: [[u32; 10]; 8] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 5, 7, 6, 2, 8, 3, 0, 9, 4],
    [5, 8, 0, 3, 7, 9, 6, 1, 4, 2],
    [8, 9, 1, 6, 0, 4, 3, 5, 2, 7],
    [9, 4, 5, 3, 1, 2, 8, 7, 6, 0],
    [4, 2, 8, 6, 5, 7, 3, 9, 0, 1],
    [2, 7, 9, 3, 8, 0, 6, 4, 1, 5],
    [7, 0, 4, 6, 9, 1, 3, 2, 5, 8],
];

/// Verhoeff inverse table.
const VERHOEFF_INV: [u32; 10] = [0, 4, 3, 2, 1, 5, 6, 7, 8, 9];

fn verhoeff_fold(digits: &[u32], offset: usize) -> Option<u32> {
    digits.iter().rev().enumerate().try_fold(0u32, |c, (i, &d)| {
        let permuted = *VERHOEFF_P[(i + offset) % 8].get(d as usize)?;
        Some(VERHOEFF_D[c as usize][permuted as usize])
    })
}

/// Check a digit sequence whose last digit is a Verhoeff check digit.
///
/// Values outside `0..=9` make the sequence invalid.
///
/// # Examples
/// ```
/// use nifv::checksum::verhoeff_is_valid;
/// assert!(verhoeff_is_valid(&[2, 3, 6, 3]));
/// assert!(!verhoeff_is_valid(&[2, 3, 6, 4]));
/// ```
pub fn verhoeff_is_valid(digits: &[u32]) -> bool {
    !digits.is_empty() && verhoeff_fold(digits, 0) == Some(0)
}

/// Compute the Verhoeff check digit to append to `digits`.
pub fn verhoeff_check_digit(digits: &[u32]) -> Option<u32> {
    verhoeff_fold(digits, 1).map(|c| VERHOEFF_INV[c as usize])
}

fn luhn_sum(digits: &[u32], double_even: bool) -> Option<u32> {
    digits.iter().rev().enumerate().try_fold(0u32, |sum, (i, &d)| {
        if d > 9 {
            return None;
        }
        let doubled = (i % 2 == 0) == double_even;
        let value = if doubled {
            let twice = d * 2;
            if twice > 9 {
                twice - 9
            } else {
                twice
            }
        } else {
            d
        };
        Some(sum + value)
    })
}

/// Check a digit sequence whose last digit is a Luhn (mod 10) check digit.
///
/// # Examples
/// ```
/// use nifv::checksum::luhn_is_valid;
/// assert!(luhn_is_valid(&[7, 9, 9, 2, 7, 3, 9, 8, 7, 1, 3]));
/// ```
pub fn luhn_is_valid(digits: &[u32]) -> bool {
    !digits.is_empty() && luhn_sum(digits, false).is_some_and(|sum| sum % 10 == 0)
}

/// Compute the Luhn check digit to append to `digits`.
pub fn luhn_check_digit(digits: &[u32]) -> Option<u32> {
    // The appended digit shifts every payload position by one, so the
    // rightmost payload digit is the first to be doubled.
    luhn_sum(digits, true).map(|sum| (10 - sum % 10) % 10)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Vec<u32> {
        s.chars().map(|c| c.to_digit(10).unwrap()).collect()
    }

    #[test]
    fn test_verhoeff_known_values() {
        assert!(verhoeff_is_valid(&parse("2363")));
        assert!(verhoeff_is_valid(&parse("828402421550")));
        assert!(verhoeff_is_valid(&parse("234567890124")));
        assert!(!verhoeff_is_valid(&parse("828402421551")));
    }

    #[test]
    fn test_verhoeff_detects_transposition() {
        // Adjacent transposition of 0 and 2
        assert!(!verhoeff_is_valid(&parse("828402241550")));
    }

    #[test]
    fn test_verhoeff_check_digit() {
        assert_eq!(verhoeff_check_digit(&parse("236")), Some(3));
        assert_eq!(verhoeff_check_digit(&parse("23456789012")), Some(4));
        assert_eq!(verhoeff_check_digit(&parse("99999999999")), Some(9));
    }

    #[test]
    fn test_verhoeff_rejects_bad_input() {
        assert!(!verhoeff_is_valid(&[]));
        assert!(!verhoeff_is_valid(&[2, 3, 6, 10]));
        assert_eq!(verhoeff_check_digit(&[12]), None);
    }

    #[test]
    fn test_luhn_known_values() {
        assert!(luhn_is_valid(&parse("79927398713")));
        assert!(luhn_is_valid(&parse("013000666")));
        assert!(luhn_is_valid(&parse("4111111111111111")));
        assert!(!luhn_is_valid(&parse("79927398710")));
    }

    #[test]
    fn test_luhn_check_digit() {
        assert_eq!(luhn_check_digit(&parse("7992739871")), Some(3));
        assert_eq!(luhn_check_digit(&parse("01300066")), Some(6));
    }

    #[test]
    fn test_luhn_rejects_bad_input() {
        assert!(!luhn_is_valid(&[]));
        assert!(!luhn_is_valid(&[1, 11]));
        assert_eq!(luhn_check_digit(&[10]), None);
    }

    #[test]
    fn test_generated_digits_validate() {
        for payload in ["0", "1234", "98765432109", "500000000"] {
            let mut digits = parse(payload);
            let v = verhoeff_check_digit(&digits).unwrap();
            let l = luhn_check_digit(&digits).unwrap();
            let mut with_luhn = digits.clone();
            with_luhn.push(l);
            digits.push(v);
            assert!(verhoeff_is_valid(&digits), "verhoeff {payload}");
            assert!(luhn_is_valid(&with_luhn), "luhn {payload}");
        }
    }
}
