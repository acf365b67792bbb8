use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// North American time zones an area code can be assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TimezoneCode {
    Pst,
    Est,
    Cst,
    Mst,
    Akst,
    Hst,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unrecognized timezone code: {0:?}")]
pub struct ParseTimezoneError(pub String);

impl TimezoneCode {
    pub const ALL: [TimezoneCode; 6] = [
        TimezoneCode::Pst,
        TimezoneCode::Est,
        TimezoneCode::Cst,
        TimezoneCode::Mst,
        TimezoneCode::Akst,
        TimezoneCode::Hst,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TimezoneCode::Pst => "PST",
            TimezoneCode::Est => "EST",
            TimezoneCode::Cst => "CST",
            TimezoneCode::Mst => "MST",
            TimezoneCode::Akst => "AKST",
            TimezoneCode::Hst => "HST",
        }
    }
}

impl fmt::Display for TimezoneCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimezoneCode {
    type Err = ParseTimezoneError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        TimezoneCode::ALL
            .into_iter()
            .find(|code| code.as_str() == upper)
            .ok_or(ParseTimezoneError(upper))
    }
}
