//! Database models shared across the inquiry repository.

#[cfg(feature = "server")]
pub mod config;
pub mod inquiry;
