use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A three-digit NPA prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AreaCode([u8; 3]);

impl AreaCode {
    pub fn new(raw: &str) -> Result<Self, CoreError> {
        match raw.as_bytes() {
            [a, b, c] if raw.bytes().all(|byte| byte.is_ascii_digit()) => Ok(Self([*a, *b, *c])),
            _ => Err(CoreError::InvalidAreaCode(raw.to_string())),
        }
    }

    pub(crate) fn from_digits(digits: [u8; 3]) -> Self {
        Self(digits)
    }

    pub fn as_str(&self) -> &str {
        // Only ASCII digits are ever stored.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl fmt::Display for AreaCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for AreaCode {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<AreaCode> for String {
    fn from(value: AreaCode) -> Self {
        value.as_str().to_string()
    }
}
