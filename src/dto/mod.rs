//! DTOs exposed by the inquiry API endpoints.

pub mod inquiry;
