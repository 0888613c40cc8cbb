//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce the inquiry field invariants (national mobile
//! number format, bounded business type length, fixed-width business
//! registration number) so that once a value reaches the repository it
//! can be treated as trusted.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fixed national mobile prefix every inquiry phone number carries.
pub const MOBILE_PREFIX: &str = "010";

/// Numeric bounds implied by the prefix/length check, enforced as an
/// explicit defense-in-depth range.
const PHONE_NUMERIC_MIN: u64 = 1_000_000_000;
const PHONE_NUMERIC_MAX: u64 = 1_099_999_999;

const BUSINESS_TYPE_MAX_LEN: usize = 150;
const BUSINESS_NUMBER_LEN: usize = 10;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Phone number did not meet the 010 + 11 digit format.
    #[error("phone number must be 11 digits starting with 010")]
    InvalidPhoneNumber,
    /// Date string was not a parseable `YYYY-MM-DD` value.
    #[error("date must be a valid YYYY-MM-DD value")]
    InvalidDate,
    /// Business type was empty or longer than 150 characters.
    #[error("business type must be between 1 and 150 characters")]
    InvalidBusinessType,
    /// Business registration number was not exactly 10 digits.
    #[error("business number must be exactly 10 digits")]
    InvalidBusinessNumber,
    /// Page number was zero.
    #[error("page must be 1 or greater")]
    InvalidPage,
    /// Page size was zero.
    #[error("limit must be 1 or greater")]
    InvalidLimit,
    /// Sort field was not one of the accepted values.
    #[error("sort must be one of: createdAt, id")]
    InvalidSortField,
    /// Sort direction was not one of the accepted values.
    #[error("order must be one of: ASC, DESC")]
    InvalidSortOrder,
}

/// Validated national mobile number, stored exactly as received.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Validates a candidate phone number without reformatting it.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, ValidationError> {
        let value = value.into();
        if !Self::is_valid(&value) {
            return Err(ValidationError::InvalidPhoneNumber);
        }
        Ok(Self(value))
    }

    /// Side-effect-free variant of the same checks, for predicate call sites.
    pub fn is_valid(value: &str) -> bool {
        if value.len() != 11 || !value.starts_with(MOBILE_PREFIX) {
            return false;
        }
        let numeric = match value.parse::<u64>() {
            Ok(n) => n,
            Err(_) => return false,
        };
        (PHONE_NUMERIC_MIN..=PHONE_NUMERIC_MAX).contains(&numeric)
    }

    /// Borrow the number as a `&str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the owned inner `String`.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for PhoneNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for PhoneNumber {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PhoneNumber> for String {
    fn from(value: PhoneNumber) -> Self {
        value.0
    }
}

/// Free-text business type, trimmed and bounded to 150 characters.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct BusinessType(String);

impl BusinessType {
    /// Trims whitespace and rejects empty or oversized inputs.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, ValidationError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() || trimmed.chars().count() > BUSINESS_TYPE_MAX_LEN {
            return Err(ValidationError::InvalidBusinessType);
        }
        Ok(Self(trimmed))
    }

    /// Borrow the value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for BusinessType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for BusinessType {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for BusinessType {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<BusinessType> for String {
    fn from(value: BusinessType) -> Self {
        value.0
    }
}

/// Ten-digit business registration number.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct BusinessNumber(String);

impl BusinessNumber {
    /// Accepts exactly ten ASCII digits.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.len() != BUSINESS_NUMBER_LEN || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::InvalidBusinessNumber);
        }
        Ok(Self(value))
    }

    /// Borrow the value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for BusinessNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for BusinessNumber {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for BusinessNumber {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<BusinessNumber> for String {
    fn from(value: BusinessNumber) -> Self {
        value.0
    }
}
