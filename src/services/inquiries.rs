//! Inquiry create and list workflows.
//!
//! Validates loosely-typed request fields into trusted domain values,
//! resolves query options against defaults, invokes the repository, and
//! shapes the response envelopes. Validation always happens before any
//! datastore access.

use chrono::NaiveDate;

use crate::domain::dates::day_range;
use crate::domain::inquiry::NewInquiry;
use crate::domain::types::{PhoneNumber, ValidationError};
use crate::dto::inquiry::{CreateInquiryResponse, ListInquiriesResponse};
use crate::forms::inquiry::{CreateInquiryForm, ListInquiriesParams};
use crate::repository::{
    InquiryListQuery, InquiryReader, InquiryWriter, Pagination, ReadConsistency, SortField,
    SortOrder,
};
use crate::services::ServiceResult;

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_ITEMS_PER_PAGE: usize = 20;

/// Caller-supplied option overrides, each field independently optional.
#[derive(Debug, Default, Clone)]
pub struct ListOptions {
    pub page: Option<usize>,
    pub limit: Option<usize>,
    pub sort: Option<SortField>,
    pub order: Option<SortOrder>,
}

/// Fully-resolved options after defaults are applied.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedOptions {
    pub pagination: Pagination,
    pub sort: SortField,
    pub order: SortOrder,
}

/// Applies defaults field-by-field over the caller's overrides. An
/// explicit zero is an error, not a request for the default.
pub fn resolve_options(options: ListOptions) -> Result<ResolvedOptions, ValidationError> {
    let page = match options.page {
        Some(0) => return Err(ValidationError::InvalidPage),
        Some(page) => page,
        None => DEFAULT_PAGE,
    };
    let limit = match options.limit {
        Some(0) => return Err(ValidationError::InvalidLimit),
        Some(limit) => limit,
        None => DEFAULT_ITEMS_PER_PAGE,
    };

    Ok(ResolvedOptions {
        pagination: Pagination {
            page,
            per_page: limit,
        },
        sort: options.sort.unwrap_or_default(),
        order: options.order.unwrap_or_default(),
    })
}

fn parse_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| ValidationError::InvalidDate)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

/// Turns the raw request parameters into a validated repository query.
pub fn build_list_query(
    params: ListInquiriesParams,
    consistency: ReadConsistency,
) -> Result<InquiryListQuery, ValidationError> {
    let phone_number = non_empty(params.phone_number)
        .map(PhoneNumber::new)
        .transpose()?;

    let start_date = non_empty(params.start_date)
        .map(|s| parse_date(&s))
        .transpose()?;
    let end_date = non_empty(params.end_date)
        .map(|s| parse_date(&s))
        .transpose()?;
    let (start_timestamp, end_timestamp) = day_range(start_date, end_date);

    let options = resolve_options(ListOptions {
        page: params.page,
        limit: params.limit,
        sort: non_empty(params.sort)
            .map(|s| SortField::parse(&s))
            .transpose()?,
        order: non_empty(params.order)
            .map(|s| SortOrder::parse(&s))
            .transpose()?,
    })?;

    let mut query = InquiryListQuery::new(options.pagination)
        .created_between(start_timestamp, end_timestamp)
        .sort(options.sort, options.order)
        .consistency(consistency);

    if let Some(phone) = phone_number {
        query = query.phone_number(phone);
    }

    Ok(query)
}

/// Returns the paginated list of inquiries matching the raw filter
/// parameters.
pub fn list_inquiries<R>(
    repo: &R,
    params: ListInquiriesParams,
    consistency: ReadConsistency,
) -> ServiceResult<ListInquiriesResponse>
where
    R: InquiryReader + ?Sized,
{
    let query = build_list_query(params, consistency)?;
    let result = repo.list_inquiries(query)?;

    Ok(ListInquiriesResponse::from_page(result))
}

/// Persists one inquiry submission.
pub fn create_inquiry<R>(repo: &R, form: CreateInquiryForm) -> ServiceResult<CreateInquiryResponse>
where
    R: InquiryWriter + ?Sized,
{
    let new_inquiry = NewInquiry::new(
        &form.phone_number,
        &form.business_type,
        form.business_number.as_deref(),
    )?;

    let inquiry = repo.create_inquiry(&new_inquiry)?;

    Ok(CreateInquiryResponse {
        success: true,
        id: inquiry.id,
        message: "Inquiry received".to_string(),
    })
}
