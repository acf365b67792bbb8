pub mod domain;
pub mod error;
pub mod rules;
pub mod table;

pub use domain::*;
pub use error::CoreError;
pub use rules::*;
pub use table::AreaCodeTable;
