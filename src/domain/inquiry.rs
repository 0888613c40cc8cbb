use serde::{Deserialize, Serialize};

use crate::domain::types::{BusinessNumber, BusinessType, PhoneNumber, ValidationError};

/// A customer's purchase-consultation request record.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Inquiry {
    pub id: i32,
    pub phone_number: String,
    pub business_type: String,
    pub business_number: Option<String>,
    /// Epoch seconds, assigned once by the store at creation time.
    pub created_at: i64,
}

/// Validated payload for creating an [`Inquiry`]. The timestamp is
/// deliberately absent: the store assigns it on insert.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewInquiry {
    pub phone_number: PhoneNumber,
    pub business_type: BusinessType,
    pub business_number: Option<BusinessNumber>,
}

impl NewInquiry {
    /// Validates the raw submission fields into a trusted payload.
    pub fn new(
        phone_number: &str,
        business_type: &str,
        business_number: Option<&str>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            phone_number: PhoneNumber::new(phone_number)?,
            business_type: BusinessType::new(business_type)?,
            business_number: business_number
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(BusinessNumber::new)
                .transpose()?,
        })
    }
}
