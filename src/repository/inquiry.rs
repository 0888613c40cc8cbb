//! Diesel implementation of the inquiry reader/writer contracts.

use chrono::Utc;
use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::domain::inquiry::{Inquiry, NewInquiry};
use crate::models::inquiry::{Inquiry as DbInquiry, NewInquiry as DbNewInquiry};
use crate::repository::errors::StorageResult;
use crate::repository::{
    DieselRepository, InquiryListQuery, InquiryReader, InquiryWriter, PageResult, SortField,
    SortOrder,
};
use crate::schema::inquiries;

/// Folds the present filter fields into a conjunctive predicate. Absent
/// fields contribute no clause at all.
fn apply_filters<'a>(
    mut query: inquiries::BoxedQuery<'a, Sqlite>,
    list_query: &'a InquiryListQuery,
) -> inquiries::BoxedQuery<'a, Sqlite> {
    if let Some(phone) = &list_query.phone_number {
        query = query.filter(inquiries::phone_number.eq(phone.as_str()));
    }
    if let Some(start) = list_query.start_timestamp {
        query = query.filter(inquiries::created_at.ge(start));
    }
    if let Some(end) = list_query.end_timestamp {
        query = query.filter(inquiries::created_at.le(end));
    }
    query
}

impl InquiryWriter for DieselRepository {
    fn create_inquiry(&self, new_inquiry: &NewInquiry) -> StorageResult<Inquiry> {
        let mut conn = self.write_conn()?;

        // The store owns the creation timestamp; callers never pass one.
        let created_at = Utc::now().timestamp();
        let row = DbNewInquiry::from_domain(new_inquiry, created_at);

        let inserted = diesel::insert_into(inquiries::table)
            .values(&row)
            .get_result::<DbInquiry>(&mut conn)?;

        Ok(inserted.into())
    }
}

impl InquiryReader for DieselRepository {
    fn list_inquiries(&self, query: InquiryListQuery) -> StorageResult<PageResult<Inquiry>> {
        let mut conn = self.read_conn(&query)?;

        // The service rejects zero values; clamp anyway so a raw caller
        // cannot underflow the offset.
        let page = query.pagination.page.max(1);
        let limit = query.pagination.per_page.max(1);

        // Saturate instead of wrapping: an astronomically large page is
        // an empty page past the end, never a negative SQL offset.
        let offset = i64::try_from((page as u64 - 1).saturating_mul(limit as u64))
            .unwrap_or(i64::MAX);
        let sql_limit = i64::try_from(limit).unwrap_or(i64::MAX);

        let mut select = apply_filters(inquiries::table.into_boxed(), &query);

        // `id` as an implicit secondary key keeps pagination stable when
        // primary sort values collide.
        select = match (query.sort_field, query.sort_order) {
            (SortField::CreatedAt, SortOrder::Asc) => {
                select.order((inquiries::created_at.asc(), inquiries::id.asc()))
            }
            (SortField::CreatedAt, SortOrder::Desc) => {
                select.order((inquiries::created_at.desc(), inquiries::id.desc()))
            }
            (SortField::Id, SortOrder::Asc) => select.order(inquiries::id.asc()),
            (SortField::Id, SortOrder::Desc) => select.order(inquiries::id.desc()),
        };

        let items = select
            .limit(sql_limit)
            .offset(offset)
            .load::<DbInquiry>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect::<Vec<Inquiry>>();

        let total: i64 = apply_filters(inquiries::table.into_boxed(), &query)
            .count()
            .get_result(&mut conn)?;
        let total = total as usize;

        let pages = total.div_ceil(limit);

        Ok(PageResult {
            items,
            total,
            page,
            limit,
            pages,
        })
    }
}
