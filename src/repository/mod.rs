//! Persistence contracts for inquiry records.
//!
//! Queries are expressed as builder values accumulating typed predicate
//! clauses; the Diesel implementation folds present clauses into a
//! conjunctive filter and omits absent ones entirely.

use crate::db::{DbConnection, DbPool, get_connection};
use crate::domain::inquiry::{Inquiry, NewInquiry};
use crate::domain::types::{PhoneNumber, ValidationError};
use crate::repository::errors::StorageResult;

pub mod errors;
pub mod inquiry;
#[cfg(feature = "test-mocks")]
pub mod mock;

/// How many trailing seconds of wall-clock time count as "recent" for
/// read routing. A range query reaching into this window is served by
/// the primary so replica lag cannot hide fresh writes.
pub const RECENT_WRITE_WINDOW_SECS: i64 = 300;

/// Whether a read must observe the most recent write (routed to the
/// primary) or may tolerate replica staleness.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReadConsistency {
    #[default]
    Default,
    Strong,
}

/// Sort key accepted by the list operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortField {
    #[default]
    CreatedAt,
    Id,
}

impl SortField {
    /// Parses the API-level `sort` value.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        match value {
            "createdAt" => Ok(Self::CreatedAt),
            "id" => Ok(Self::Id),
            _ => Err(ValidationError::InvalidSortField),
        }
    }
}

/// Sort direction accepted by the list operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// Parses the API-level `order` value.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        match value {
            "ASC" => Ok(Self::Asc),
            "DESC" => Ok(Self::Desc),
            _ => Err(ValidationError::InvalidSortOrder),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

/// Filter, paging, sorting, and routing choices for one list call.
#[derive(Debug, Clone)]
pub struct InquiryListQuery {
    pub phone_number: Option<PhoneNumber>,
    /// Inclusive epoch-second lower bound on `created_at`.
    pub start_timestamp: Option<i64>,
    /// Inclusive epoch-second upper bound on `created_at`.
    pub end_timestamp: Option<i64>,
    pub pagination: Pagination,
    pub sort_field: SortField,
    pub sort_order: SortOrder,
    pub consistency: ReadConsistency,
}

impl InquiryListQuery {
    pub fn new(pagination: Pagination) -> Self {
        Self {
            phone_number: None,
            start_timestamp: None,
            end_timestamp: None,
            pagination,
            sort_field: SortField::default(),
            sort_order: SortOrder::default(),
            consistency: ReadConsistency::default(),
        }
    }

    pub fn phone_number(mut self, phone_number: PhoneNumber) -> Self {
        self.phone_number = Some(phone_number);
        self
    }

    pub fn created_between(mut self, start: Option<i64>, end: Option<i64>) -> Self {
        self.start_timestamp = start;
        self.end_timestamp = end;
        self
    }

    pub fn sort(mut self, field: SortField, order: SortOrder) -> Self {
        self.sort_field = field;
        self.sort_order = order;
        self
    }

    pub fn consistency(mut self, consistency: ReadConsistency) -> Self {
        self.consistency = consistency;
        self
    }
}

/// One page of matching inquiries plus the pagination figures computed
/// over the full matching set.
#[derive(Debug, Clone)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub pages: usize,
}

pub trait InquiryReader {
    fn list_inquiries(&self, query: InquiryListQuery) -> StorageResult<PageResult<Inquiry>>;
}

pub trait InquiryWriter {
    fn create_inquiry(&self, new_inquiry: &NewInquiry) -> StorageResult<Inquiry>;
}

/// Diesel-backed repository holding both logical database endpoints.
#[derive(Clone)]
pub struct DieselRepository {
    primary: DbPool,
    replica: DbPool,
}

impl DieselRepository {
    /// Builds a repository over a primary pool and an optional replica
    /// pool. Without a replica every read is served by the primary.
    pub fn new(primary: DbPool, replica: Option<DbPool>) -> Self {
        let replica = replica.unwrap_or_else(|| primary.clone());
        Self { primary, replica }
    }

    /// Connection to the write-capable primary.
    pub(crate) fn write_conn(&self) -> StorageResult<DbConnection> {
        Ok(get_connection(&self.primary)?)
    }

    /// Connection for a read, routed by the query's consistency mode
    /// and the recent-window heuristic.
    pub(crate) fn read_conn(&self, query: &InquiryListQuery) -> StorageResult<DbConnection> {
        let pool = if self.requires_primary(query, chrono::Utc::now().timestamp()) {
            &self.primary
        } else {
            &self.replica
        };
        Ok(get_connection(pool)?)
    }

    /// Routing decision, separated from clock and pool access so it can
    /// be tested directly.
    fn requires_primary(&self, query: &InquiryListQuery, now: i64) -> bool {
        match query.consistency {
            ReadConsistency::Strong => true,
            ReadConsistency::Default => query
                .start_timestamp
                .is_some_and(|start| start >= now - RECENT_WRITE_WINDOW_SECS),
        }
    }
}
