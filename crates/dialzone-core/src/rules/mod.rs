pub mod filter;
pub mod validation;

pub use filter::filter_by_timezone;
pub use validation::{
    classify, classify_validity, is_valid_area_code, Classification, InvalidReason,
    ValidityReport,
};
