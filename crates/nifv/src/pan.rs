//! India Permanent Account Number (PAN)
//!
//! A PAN is ten characters: five letters, four digits and a trailing letter.
//! The fourth letter encodes the holder type and the fifth is the initial of
//! the holder's surname (individuals) or name (everyone else).

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::normalize::normalize;
use crate::result::{StatusCode, ValidationResult};

pub const PAN_LENGTH: usize = 10;

lazy_static! {
    static ref PAN_PATTERN: Regex = Regex::new(r"^[A-Z]{5}[0-9]{4}[A-Z]$").unwrap();
}

/// Holder category encoded in the fourth PAN character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum PanHolderType {
    /// Association of persons
    Association,
    /// Body of individuals
    BodyOfIndividuals,
    Company,
    Firm,
    Government,
    /// Hindu undivided family
    HinduUndividedFamily,
    LocalAuthority,
    /// Artificial juridical person
    ArtificialJuridicalPerson,
    /// Individual person
    Person,
    Trust,
}

impl PanHolderType {
    /// Parse from the PAN's fourth character.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'A' => Some(Self::Association),
            'B' => Some(Self::BodyOfIndividuals),
            'C' => Some(Self::Company),
            'F' => Some(Self::Firm),
            'G' => Some(Self::Government),
            'H' => Some(Self::HinduUndividedFamily),
            'L' => Some(Self::LocalAuthority),
            'J' => Some(Self::ArtificialJuridicalPerson),
            'P' => Some(Self::Person),
            'T' => Some(Self::Trust),
            _ => None,
        }
    }

    pub fn code(&self) -> char {
        match self {
            Self::Association => 'A',
            Self::BodyOfIndividuals => 'B',
            Self::Company => 'C',
            Self::Firm => 'F',
            Self::Government => 'G',
            Self::HinduUndividedFamily => 'H',
            Self::LocalAuthority => 'L',
            Self::ArtificialJuridicalPerson => 'J',
            Self::Person => 'P',
            Self::Trust => 'T',
        }
    }

    pub fn is_individual(&self) -> bool {
        matches!(self, Self::Person)
    }
}

/// Structural PAN failures, in the order they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PanError {
    #[error("a valid Indian PAN is exactly 10 characters")]
    WrongLength,
    #[error("PAN contains special characters")]
    SpecialCharacters,
    #[error("PAN does not follow the 5 letter, 4 digit, 1 letter pattern")]
    InvalidPattern,
    #[error("PAN digit block must be between 0001 and 9999")]
    InvalidDigitBlock,
    #[error("invalid holder type in fourth PAN character")]
    InvalidHolderType,
}

impl StatusCode for PanError {
    fn status(&self) -> i32 {
        match self {
            Self::WrongLength => -1,
            Self::InvalidHolderType => -2,
            Self::InvalidDigitBlock => -3,
            Self::InvalidPattern => -4,
            Self::SpecialCharacters => -5,
        }
    }
}

/// Registered-name cross-check failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PanNameError {
    #[error("registered name of the holder is required")]
    MissingName,
    #[error("last name of the individual is required")]
    MissingLastName,
    #[error("last name does not match PAN of individual holder")]
    LastNameMismatch,
    #[error("name does not match PAN of non-individual holder")]
    FirstNameMismatch,
}

impl StatusCode for PanNameError {
    fn status(&self) -> i32 {
        match self {
            Self::MissingName => -1,
            Self::MissingLastName => -2,
            Self::LastNameMismatch => -3,
            Self::FirstNameMismatch => -4,
        }
    }
}

/// Run the structural checks on an already normalized PAN.
fn check_pan(pan: &str) -> Result<PanHolderType, PanError> {
    let chars: Vec<char> = pan.chars().collect();

    if chars.len() != PAN_LENGTH {
        return Err(PanError::WrongLength);
    }
    if !chars.iter().all(|c| c.is_alphanumeric()) {
        return Err(PanError::SpecialCharacters);
    }
    if !PAN_PATTERN.is_match(pan) {
        return Err(PanError::InvalidPattern);
    }

    // The pattern guarantees ASCII, so byte slicing is safe here
    let block_in_range = pan[5..9]
        .parse::<u32>()
        .is_ok_and(|n| (1..=9999).contains(&n));
    if !block_in_range {
        return Err(PanError::InvalidDigitBlock);
    }

    PanHolderType::from_char(chars[3]).ok_or(PanError::InvalidHolderType)
}

/// Check that the holder's name agrees with the PAN's fifth character.
///
/// A PAN too short to carry a name initial is left for the structural
/// checks to reject.
fn check_name(pan: &str, name: &str) -> Result<(), PanNameError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(PanNameError::MissingName);
    }

    let chars: Vec<char> = pan.chars().collect();
    if chars.len() < 5 {
        return Ok(());
    }
    let initial = chars[4];
    let starts_with_initial = |token: &str| {
        token
            .chars()
            .next()
            .is_some_and(|c| c.to_uppercase().eq(std::iter::once(initial)))
    };

    let tokens: Vec<&str> = name.split(' ').filter(|t| !t.is_empty()).collect();
    if chars[3] == PanHolderType::Person.code() {
        if tokens.len() < 2 {
            return Err(PanNameError::MissingLastName);
        }
        if !tokens.last().copied().is_some_and(|t| starts_with_initial(t)) {
            return Err(PanNameError::LastNameMismatch);
        }
    } else if !tokens.first().copied().is_some_and(|t| starts_with_initial(t)) {
        return Err(PanNameError::FirstNameMismatch);
    }

    Ok(())
}

/// Validate a PAN with a detailed status.
///
/// Status codes: 0 valid, -1 wrong length, -2 invalid holder type,
/// -3 digit block out of range, -4 pattern mismatch, -5 special characters.
/// Length is checked first, so a short input with special characters
/// reports -1.
///
/// # Examples
/// ```
/// use nifv::validate_pan;
///
/// let result = validate_pan("abcp m0 00 1n");
/// assert!(result.is_valid);
/// assert_eq!(result.message, "ABCPM0001N");
/// assert_eq!(validate_pan("ABCPM0000N").status, -3);
/// ```
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn validate_pan(pan: &str) -> ValidationResult {
    let pan = normalize(pan);
    match check_pan(&pan) {
        Ok(_) => ValidationResult::valid(pan),
        Err(e) => {
            debug!(status = e.status(), "PAN rejected: {}", e);
            ValidationResult::failure(&e)
        }
    }
}

/// Validate a PAN, returning the normalized PAN or `None`.
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn validate_pan_lite(pan: &str) -> Option<String> {
    let pan = normalize(pan);
    check_pan(&pan).ok().map(|_| pan)
}

/// Validate a PAN against the registered name of its holder.
///
/// For individuals (fourth character `P`) the name needs at least two words
/// and the last word must start with the PAN's fifth character; for other
/// holders the first word must. Name failures use their own codes
/// (-1 missing name, -2 missing last name, -3 last name mismatch,
/// -4 first name mismatch); once the name agrees the result of
/// [`validate_pan`] is returned.
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn validate_pan_with_name(pan: &str, name: &str) -> ValidationResult {
    let pan = normalize(pan);
    if let Err(e) = check_name(&pan, name) {
        debug!(status = e.status(), "PAN name check failed: {}", e);
        return ValidationResult::failure(&e);
    }
    validate_pan(&pan)
}

/// Name-checked PAN validation without failure detail.
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn validate_pan_with_name_lite(pan: &str, name: &str) -> Option<String> {
    let pan = normalize(pan);
    check_name(&pan, name).ok()?;
    validate_pan_lite(&pan)
}

/// Holder type of a structurally valid PAN.
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn pan_holder_type(pan: &str) -> Option<PanHolderType> {
    check_pan(&normalize(pan)).ok()
}
