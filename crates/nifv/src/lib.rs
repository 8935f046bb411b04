//! Format validation for national identity and tax identifiers
//!
//! This crate checks that an identifier string follows the published
//! syntactic and check-digit rules for its type and returns the canonical
//! formatted value. Nothing is ever looked up against an issuing authority.
//!
//! Supported identifiers:
//! - PAN (India), with an optional registered-name cross-check
//! - Aadhaar (India), Verhoeff checksum
//! - SSN (USA)
//! - CPF and CNPJ (Brazil), mod-11 check digits
//! - NPWP (Indonesia), Luhn checksum
//! - National Insurance number (UK)
//!
//! Every validator accepts input containing spaces, dashes, dots and slashes.
//! "Lite" validators return `Option<String>`; the PAN family additionally
//! offers detailed variants returning a [`ValidationResult`] with a status code.
//!
//! ```
//! use nifv::{validate_cpf, validate_pan};
//!
//! assert_eq!(validate_cpf("390 533 447 05"), Some("390.533.447-05".to_string()));
//! assert_eq!(validate_pan("ABCPM0001N").status, 0);
//! ```

pub mod aadhaar;
pub mod brazil;
pub mod checksum;
pub mod kind;
pub mod national_insurance;
pub mod normalize;
pub mod npwp;
pub mod pan;
pub mod result;
pub mod ssn;

pub use aadhaar::*;
pub use brazil::*;
pub use kind::*;
pub use national_insurance::*;
pub use normalize::{normalize, strip_separators};
pub use npwp::*;
pub use pan::*;
pub use result::*;
pub use ssn::*;

// Setup UniFFI when the feature is enabled
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();
