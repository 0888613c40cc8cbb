//! JSON envelopes returned by the inquiry API endpoints.

use serde::Serialize;

use crate::domain::dates::date_string;
use crate::domain::inquiry::Inquiry;
use crate::repository::PageResult;

/// One inquiry as rendered in API responses. The stored epoch-second
/// timestamp is internal; responses carry a local `YYYY-MM-DD` date.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryData {
    pub id: i32,
    pub phone_number: String,
    pub business_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_number: Option<String>,
    pub created_at: String,
}

impl From<Inquiry> for InquiryData {
    fn from(inquiry: Inquiry) -> Self {
        Self {
            id: inquiry.id,
            phone_number: inquiry.phone_number,
            business_type: inquiry.business_type,
            business_number: inquiry.business_number,
            created_at: date_string(inquiry.created_at),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PaginationData {
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub pages: usize,
}

#[derive(Debug, Serialize)]
pub struct ListInquiriesResponse {
    pub success: bool,
    pub data: Vec<InquiryData>,
    pub pagination: PaginationData,
}

impl ListInquiriesResponse {
    pub fn from_page(page: PageResult<Inquiry>) -> Self {
        Self {
            success: true,
            data: page.items.into_iter().map(Into::into).collect(),
            pagination: PaginationData {
                total: page.total,
                page: page.page,
                limit: page.limit,
                pages: page.pages,
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreateInquiryResponse {
    pub success: bool,
    pub id: i32,
    pub message: String,
}

/// Body returned for rejected or failed requests.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}
