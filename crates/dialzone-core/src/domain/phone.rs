use crate::domain::area_code::AreaCode;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

pub const PHONE_DIGITS: usize = 10;

/// A phone number reduced to exactly ten ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PhoneDigits(String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NormalizationFailure {
    #[error("phone number is missing")]
    Missing,
    #[error("expected 10 digits, found {0}")]
    DigitCount(usize),
}

impl PhoneDigits {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn area_code(&self) -> AreaCode {
        let bytes = self.0.as_bytes();
        AreaCode::from_digits([bytes[0], bytes[1], bytes[2]])
    }
}

impl fmt::Display for PhoneDigits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Strips everything but ASCII digits and accepts the result only when exactly
/// ten digits remain. A leading country code is not special-cased, so
/// `+1 213 555 0100` is rejected.
pub fn normalize(raw: Option<&str>) -> Result<PhoneDigits, NormalizationFailure> {
    let raw = raw.ok_or(NormalizationFailure::Missing)?;
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.len() != PHONE_DIGITS {
        return Err(NormalizationFailure::DigitCount(digits.len()));
    }
    Ok(PhoneDigits(digits))
}
