use diesel::prelude::*;

use crate::domain::inquiry::{Inquiry as DomainInquiry, NewInquiry as DomainNewInquiry};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::inquiries)]
/// Diesel model for [`crate::domain::inquiry::Inquiry`].
pub struct Inquiry {
    pub id: i32,
    pub phone_number: String,
    pub business_type: String,
    pub business_number: Option<String>,
    pub created_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::inquiries)]
/// Insertable form of [`Inquiry`]. `created_at` is filled in by the
/// repository, never by callers.
pub struct NewInquiry<'a> {
    pub phone_number: &'a str,
    pub business_type: &'a str,
    pub business_number: Option<&'a str>,
    pub created_at: i64,
}

impl From<Inquiry> for DomainInquiry {
    fn from(inquiry: Inquiry) -> Self {
        Self {
            id: inquiry.id,
            phone_number: inquiry.phone_number,
            business_type: inquiry.business_type,
            business_number: inquiry.business_number,
            created_at: inquiry.created_at,
        }
    }
}

impl<'a> NewInquiry<'a> {
    /// Binds a validated domain payload to the insert row, stamping the
    /// creation time supplied by the repository.
    pub fn from_domain(inquiry: &'a DomainNewInquiry, created_at: i64) -> Self {
        Self {
            phone_number: inquiry.phone_number.as_str(),
            business_type: inquiry.business_type.as_str(),
            business_number: inquiry.business_number.as_ref().map(|n| n.as_str()),
            created_at,
        }
    }
}
