//! Actix-web handlers for the public and internal API surfaces.

pub mod inquiries;
