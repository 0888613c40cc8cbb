//! Domain entities and value types exposed by the inquiry service layer.

pub mod dates;
pub mod inquiry;
pub mod types;
