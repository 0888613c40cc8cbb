//! Inbound request payloads. Everything arrives loosely typed; the
//! service layer turns these into trusted domain values.

use serde::Deserialize;

/// Body of the public submission endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInquiryForm {
    pub phone_number: String,
    pub business_type: String,
    pub business_number: Option<String>,
}

/// Query string of the internal list endpoint. Every field is optional;
/// absent filters contribute no predicate and absent options fall back
/// to the documented defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListInquiriesParams {
    pub phone_number: Option<String>,
    /// `YYYY-MM-DD`, inclusive.
    pub start_date: Option<String>,
    /// `YYYY-MM-DD`, inclusive.
    pub end_date: Option<String>,
    pub page: Option<usize>,
    pub limit: Option<usize>,
    /// `createdAt` or `id`.
    pub sort: Option<String>,
    /// `ASC` or `DESC`.
    pub order: Option<String>,
    /// Set to request a read that must observe the latest writes.
    #[serde(default)]
    pub strong: bool,
}
