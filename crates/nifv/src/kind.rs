//! Identifier kinds and dispatch by kind

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::result::{StatusCode, ValidationResult};
use crate::{
    validate_aadhaar, validate_cnpj, validate_cpf, validate_national_insurance_number,
    validate_npwp, validate_pan, validate_pan_lite, validate_ssn,
};

/// Supported national identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
#[serde(rename_all = "snake_case")]
pub enum IdentifierKind {
    /// India Permanent Account Number
    Pan,
    /// India unique identity number
    Aadhaar,
    /// US Social Security Number
    Ssn,
    /// Brazil individual taxpayer registry
    Cpf,
    /// Brazil national registry of legal entities
    Cnpj,
    /// Indonesia taxpayer identification number
    Npwp,
    /// UK National Insurance number
    NationalInsurance,
}

impl IdentifierKind {
    /// Get all identifier kinds
    pub fn all() -> &'static [IdentifierKind] {
        &[
            IdentifierKind::Pan,
            IdentifierKind::Aadhaar,
            IdentifierKind::Ssn,
            IdentifierKind::Cpf,
            IdentifierKind::Cnpj,
            IdentifierKind::Npwp,
            IdentifierKind::NationalInsurance,
        ]
    }

    /// Short machine name, as accepted by [`FromStr`]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pan => "pan",
            Self::Aadhaar => "aadhaar",
            Self::Ssn => "ssn",
            Self::Cpf => "cpf",
            Self::Cnpj => "cnpj",
            Self::Npwp => "npwp",
            Self::NationalInsurance => "ni",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Pan => "PAN",
            Self::Aadhaar => "Aadhaar",
            Self::Ssn => "SSN",
            Self::Cpf => "CPF",
            Self::Cnpj => "CNPJ",
            Self::Npwp => "NPWP",
            Self::NationalInsurance => "National Insurance number",
        }
    }

    /// Issuing country (ISO 3166-1 alpha-2)
    pub fn country(&self) -> &'static str {
        match self {
            Self::Pan | Self::Aadhaar => "IN",
            Self::Ssn => "US",
            Self::Cpf | Self::Cnpj => "BR",
            Self::Npwp => "ID",
            Self::NationalInsurance => "GB",
        }
    }
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown identifier kind: {0}")]
pub struct UnknownIdentifierKind(pub String);

impl FromStr for IdentifierKind {
    type Err = UnknownIdentifierKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "pan" => Ok(Self::Pan),
            "aadhaar" | "aadhar" | "uid" => Ok(Self::Aadhaar),
            "ssn" => Ok(Self::Ssn),
            "cpf" => Ok(Self::Cpf),
            "cnpj" => Ok(Self::Cnpj),
            "npwp" => Ok(Self::Npwp),
            "ni" | "nino" | "nationalinsurance" | "nationalinsurancenumber" => {
                Ok(Self::NationalInsurance)
            }
            _ => Err(UnknownIdentifierKind(s.to_string())),
        }
    }
}

/// Failure reported by [`validate_detailed`] for kinds without status detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("not a valid {}", .0.display_name())]
pub struct InvalidIdentifier(pub IdentifierKind);

impl StatusCode for InvalidIdentifier {
    fn status(&self) -> i32 {
        -1
    }
}

/// Validate `input` as `kind`, returning its canonical form.
///
/// # Examples
/// ```
/// use nifv::{validate, IdentifierKind};
///
/// assert_eq!(
///     validate(IdentifierKind::Cnpj, "16727230000197"),
///     Some("16.727.230/0001-97".to_string())
/// );
/// ```
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn validate(kind: IdentifierKind, input: &str) -> Option<String> {
    match kind {
        IdentifierKind::Pan => validate_pan_lite(input),
        IdentifierKind::Aadhaar => validate_aadhaar(input),
        IdentifierKind::Ssn => validate_ssn(input),
        IdentifierKind::Cpf => validate_cpf(input),
        IdentifierKind::Cnpj => validate_cnpj(input),
        IdentifierKind::Npwp => validate_npwp(input),
        IdentifierKind::NationalInsurance => validate_national_insurance_number(input),
    }
}

/// Validate `input` as `kind` with a [`ValidationResult`].
///
/// PAN keeps its own status codes; every other kind reports -1 on failure.
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn validate_detailed(kind: IdentifierKind, input: &str) -> ValidationResult {
    match kind {
        IdentifierKind::Pan => validate_pan(input),
        _ => validate(kind, input)
            .ok_or(InvalidIdentifier(kind))
            .into(),
    }
}
