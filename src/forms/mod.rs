//! Deserializable request payloads for the HTTP layer.

pub mod inquiry;
