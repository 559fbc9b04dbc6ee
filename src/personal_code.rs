//! Estonian personal identification code (isikukood) validation.
//!
//! A personal code is 11 decimal digits. The first ten carry the holder's
//! century and sex, birth date and a sequence number; the last is a check
//! digit computed with a weighted modulo-11 sum:
//!
//! - pass 1 weights `1 2 3 4 5 6 7 8 9 1`
//! - pass 2 weights `3 4 5 6 7 8 9 1 2 3`, used only when pass 1 gives 10
//! - if pass 2 also gives 10, the check digit is 0
//!
//! Only the check digit is validated; the date fields are not interpreted.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{IdCheckError, Result};
use crate::format::decimal_digits;

/// Number of digits in a personal code.
pub const PERSONAL_CODE_LEN: usize = 11;

const PASS_1_WEIGHTS: [u32; 10] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 1];
const PASS_2_WEIGHTS: [u32; 10] = [3, 4, 5, 6, 7, 8, 9, 1, 2, 3];

/// Smallest integer that no longer fits in 11 digits.
const NUMBER_LIMIT: u64 = 100_000_000_000;

fn weighted_remainder(data: &[u8; 10], weights: &[u32; 10]) -> u32 {
    data.iter()
        .zip(weights)
        .map(|(&d, &w)| u32::from(d) * w)
        .sum::<u32>()
        % 11
}

/// Compute the check digit for the ten data digits of a personal code.
///
/// Digits are expected in `0..=9`, most significant first.
#[must_use]
pub fn checksum(data: &[u8; 10]) -> u8 {
    let mut control = weighted_remainder(data, &PASS_1_WEIGHTS);
    if control == 10 {
        control = weighted_remainder(data, &PASS_2_WEIGHTS);
        if control == 10 {
            control = 0;
        }
    }
    // Remainder of a division by 11 that is not 10 always fits in a digit.
    u8::try_from(control).unwrap_or(0)
}

/// A personal code whose check digit has been verified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PersonalCode {
    digits: [u8; PERSONAL_CODE_LEN],
}

impl PersonalCode {
    /// Parse and validate an 11-digit personal code.
    ///
    /// The input is taken as is: surrounding whitespace is rejected like any
    /// other non-digit character.
    ///
    /// # Errors
    ///
    /// Returns `WrongLength` unless the input has exactly 11 characters,
    /// `NonDigit` for the first character outside `0-9`, and
    /// `ChecksumMismatch` if the last digit does not match the computed one.
    pub fn parse(code: &str) -> Result<Self> {
        let digits: [u8; PERSONAL_CODE_LEN] = decimal_digits(code).inspect_err(|err| {
            tracing::debug!(%err, "malformed personal code");
        })?;

        let mut data = [0u8; 10];
        data.copy_from_slice(&digits[..10]);
        let found = digits[PERSONAL_CODE_LEN - 1];
        let expected = checksum(&data);
        if expected != found {
            tracing::debug!(expected, found, "personal code checksum mismatch");
            return Err(IdCheckError::ChecksumMismatch { expected, found });
        }

        Ok(Self { digits })
    }

    /// Parse a personal code given as an integer.
    ///
    /// Integers lose leading zeros, so the value is zero-padded back to 11
    /// digits: `11` is read as `"00000000011"`.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` for values of 12 or more digits, otherwise the same
    /// errors as [`PersonalCode::parse`].
    pub fn from_number(code: u64) -> Result<Self> {
        if code >= NUMBER_LIMIT {
            tracing::debug!(code, "personal code number out of range");
            return Err(IdCheckError::OutOfRange { value: code });
        }
        Self::parse(&format!("{code:011}"))
    }

    /// The 11 digits, most significant first.
    #[must_use]
    pub const fn digits(&self) -> &[u8; PERSONAL_CODE_LEN] {
        &self.digits
    }

    /// The trailing check digit.
    #[must_use]
    pub const fn check_digit(&self) -> u8 {
        self.digits[PERSONAL_CODE_LEN - 1]
    }
}

/// Returns true if `code` is a valid 11-digit personal code.
///
/// Wrong length, non-digit characters and a bad check digit all give `false`.
#[must_use]
pub fn verify(code: &str) -> bool {
    PersonalCode::parse(code).is_ok()
}

/// Returns true if `code`, zero-padded to 11 digits, is a valid personal code.
#[must_use]
pub fn verify_number(code: u64) -> bool {
    PersonalCode::from_number(code).is_ok()
}

impl FromStr for PersonalCode {
    type Err = IdCheckError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<u64> for PersonalCode {
    type Error = IdCheckError;

    fn try_from(value: u64) -> Result<Self> {
        Self::from_number(value)
    }
}

impl fmt::Display for PersonalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in self.digits {
            write!(f, "{d}")?;
        }
        Ok(())
    }
}

impl Serialize for PersonalCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PersonalCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
