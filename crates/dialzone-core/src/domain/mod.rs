pub mod area_code;
pub mod phone;
pub mod record;
pub mod timezone;

pub use area_code::AreaCode;
pub use phone::{normalize, NormalizationFailure, PhoneDigits};
pub use record::{ContactRecord, Dataset, PHONE_NUMBER_COLUMN};
pub use timezone::{ParseTimezoneError, TimezoneCode};
