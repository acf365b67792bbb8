use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("'{0}' column must be present in the dataset")]
    MissingColumn(String),
    #[error("Invalid timezone '{requested}'. Valid timezones are: {valid}")]
    UnknownTimezone { requested: String, valid: String },
    #[error("invalid area code: {0:?}")]
    InvalidAreaCode(String),
    #[error("area code {code} listed under both {first} and {second}")]
    OverlappingAreaCode {
        code: String,
        first: String,
        second: String,
    },
    #[error("timezone {0} listed more than once")]
    DuplicateTimezone(String),
    #[error("record has {actual} values, dataset has {expected} columns")]
    RecordWidth { expected: usize, actual: usize },
}
