use diesel::prelude::*;

use inquiry_desk::db::DbPool;
use inquiry_desk::domain::inquiry::NewInquiry;
use inquiry_desk::models::inquiry::NewInquiry as DbNewInquiry;
use inquiry_desk::repository::{
    DieselRepository, InquiryListQuery, InquiryReader, InquiryWriter, Pagination, ReadConsistency,
    SortField, SortOrder,
};
use inquiry_desk::schema::inquiries;

mod common;

fn repo(test_db: &common::TestDb) -> DieselRepository {
    DieselRepository::new(test_db.pool().clone(), None)
}

/// Seeds a row with a chosen timestamp, bypassing the store's own
/// clock so ordering and range tests are deterministic.
fn seed(pool: &DbPool, phone: &str, business_type: &str, created_at: i64) {
    let mut conn = pool.get().unwrap();
    diesel::insert_into(inquiries::table)
        .values(&DbNewInquiry {
            phone_number: phone,
            business_type,
            business_number: None,
            created_at,
        })
        .execute(&mut conn)
        .unwrap();
}

fn page(page: usize, per_page: usize) -> Pagination {
    Pagination { page, per_page }
}

#[test]
fn create_assigns_id_and_timestamp() {
    let test_db = common::TestDb::new("create_assigns_id_and_timestamp.db");
    let repo = repo(&test_db);

    let before = chrono::Utc::now().timestamp();
    let new_inquiry = NewInquiry::new("01012345678", "bookstore", Some("1234567890")).unwrap();
    let first = repo.create_inquiry(&new_inquiry).unwrap();
    let second = repo.create_inquiry(&new_inquiry).unwrap();
    let after = chrono::Utc::now().timestamp();

    assert!(first.id > 0);
    assert!(second.id > first.id);
    assert_eq!(first.phone_number, "01012345678");
    assert_eq!(first.business_number.as_deref(), Some("1234567890"));
    assert!(first.created_at >= before && first.created_at <= after);
    assert!(second.created_at >= first.created_at);
}

#[test]
fn phone_filter_matches_exactly() {
    let test_db = common::TestDb::new("phone_filter_matches_exactly.db");
    let repo = repo(&test_db);
    seed(test_db.pool(), "01011112222", "cafe", 100);
    seed(test_db.pool(), "01011112223", "cafe", 200);
    seed(test_db.pool(), "01011112222", "bakery", 300);

    let query = InquiryListQuery::new(page(1, 20))
        .phone_number("01011112222".try_into().unwrap());
    let result = repo.list_inquiries(query).unwrap();

    assert_eq!(result.total, 2);
    assert!(
        result
            .items
            .iter()
            .all(|i| i.phone_number == "01011112222")
    );
}

#[test]
fn date_bounds_are_inclusive_and_independent() {
    let test_db = common::TestDb::new("date_bounds_are_inclusive_and_independent.db");
    let repo = repo(&test_db);
    for ts in [100, 200, 300, 400] {
        seed(test_db.pool(), "01011112222", "cafe", ts);
    }

    let both = repo
        .list_inquiries(InquiryListQuery::new(page(1, 20)).created_between(Some(200), Some(300)))
        .unwrap();
    assert_eq!(both.total, 2);
    assert!(
        both.items
            .iter()
            .all(|i| i.created_at >= 200 && i.created_at <= 300)
    );

    let lower_only = repo
        .list_inquiries(InquiryListQuery::new(page(1, 20)).created_between(Some(300), None))
        .unwrap();
    assert_eq!(lower_only.total, 2);

    let upper_only = repo
        .list_inquiries(InquiryListQuery::new(page(1, 20)).created_between(None, Some(100)))
        .unwrap();
    assert_eq!(upper_only.total, 1);
}

#[test]
fn equal_phone_rows_come_back_newest_first() {
    let test_db = common::TestDb::new("equal_phone_rows_come_back_newest_first.db");
    let repo = repo(&test_db);
    for ts in [1_000, 2_000, 3_000] {
        seed(test_db.pool(), "01011112222", "cafe", ts);
    }

    let result = repo
        .list_inquiries(
            InquiryListQuery::new(page(1, 20))
                .phone_number("01011112222".try_into().unwrap())
                .sort(SortField::CreatedAt, SortOrder::Desc),
        )
        .unwrap();

    let timestamps: Vec<i64> = result.items.iter().map(|i| i.created_at).collect();
    assert_eq!(timestamps, vec![3_000, 2_000, 1_000]);
}

#[test]
fn equal_sort_values_fall_back_to_id_order() {
    let test_db = common::TestDb::new("equal_sort_values_fall_back_to_id_order.db");
    let repo = repo(&test_db);
    // Same timestamp for every row; only the implicit id key orders them.
    for business in ["a", "b", "c", "d"] {
        seed(test_db.pool(), "01011112222", business, 500);
    }

    let desc = repo
        .list_inquiries(
            InquiryListQuery::new(page(1, 20)).sort(SortField::CreatedAt, SortOrder::Desc),
        )
        .unwrap();
    let ids: Vec<i32> = desc.items.iter().map(|i| i.id).collect();
    let mut sorted = ids.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(ids, sorted);
}

#[test]
fn second_page_of_five_rows_by_id_asc() {
    let test_db = common::TestDb::new("second_page_of_five_rows_by_id_asc.db");
    let repo = repo(&test_db);
    for ts in [10, 20, 30, 40, 50] {
        seed(test_db.pool(), "01011112222", "cafe", ts);
    }

    let result = repo
        .list_inquiries(InquiryListQuery::new(page(2, 2)).sort(SortField::Id, SortOrder::Asc))
        .unwrap();

    assert_eq!(result.total, 5);
    assert_eq!(result.pages, 3);
    assert_eq!(result.page, 2);
    assert_eq!(result.limit, 2);
    let created: Vec<i64> = result.items.iter().map(|i| i.created_at).collect();
    assert_eq!(created, vec![30, 40]);
}

#[test]
fn concatenated_pages_cover_the_whole_set_once() {
    let test_db = common::TestDb::new("concatenated_pages_cover_the_whole_set_once.db");
    let repo = repo(&test_db);
    for ts in 0..7 {
        seed(test_db.pool(), "01011112222", "cafe", ts * 100);
    }

    let limit = 3;
    let first = repo
        .list_inquiries(
            InquiryListQuery::new(page(1, limit)).sort(SortField::CreatedAt, SortOrder::Asc),
        )
        .unwrap();
    assert_eq!(first.pages, 3);

    let mut seen = Vec::new();
    for page_no in 1..=first.pages {
        let result = repo
            .list_inquiries(
                InquiryListQuery::new(page(page_no, limit))
                    .sort(SortField::CreatedAt, SortOrder::Asc),
            )
            .unwrap();
        seen.extend(result.items.into_iter().map(|i| i.id));
    }

    assert_eq!(seen.len(), first.total);
    let mut deduped = seen.clone();
    deduped.dedup();
    assert_eq!(deduped.len(), seen.len());
    let mut ordered = seen.clone();
    ordered.sort_unstable();
    assert_eq!(seen, ordered);
}

#[test]
fn extreme_page_and_limit_values_never_wrap() {
    let test_db = common::TestDb::new("extreme_page_and_limit_values_never_wrap.db");
    let repo = repo(&test_db);
    for ts in [100, 200, 300] {
        seed(test_db.pool(), "01011112222", "cafe", ts);
    }

    // A page far past the end is just empty, with the figures intact.
    let result = repo
        .list_inquiries(InquiryListQuery::new(page(usize::MAX, 20)))
        .unwrap();
    assert!(result.items.is_empty());
    assert_eq!(result.total, 3);
    assert_eq!(result.pages, 1);

    // A huge limit must not collapse to an unlimited (negative) SQL
    // limit or overflow the pages count.
    let result = repo
        .list_inquiries(InquiryListQuery::new(page(1, usize::MAX)))
        .unwrap();
    assert_eq!(result.items.len(), 3);
    assert_eq!(result.pages, 1);

    // Huge page times huge limit saturates rather than going negative.
    let result = repo
        .list_inquiries(InquiryListQuery::new(page(usize::MAX, usize::MAX)))
        .unwrap();
    assert!(result.items.is_empty());
    assert_eq!(result.total, 3);
}

#[test]
fn empty_result_has_zero_pages() {
    let test_db = common::TestDb::new("empty_result_has_zero_pages.db");
    let repo = repo(&test_db);

    let result = repo
        .list_inquiries(InquiryListQuery::new(page(1, 20)))
        .unwrap();
    assert_eq!(result.total, 0);
    assert_eq!(result.pages, 0);
    assert!(result.items.is_empty());
}

#[test]
fn strong_reads_return_the_same_result_shape() {
    let test_db = common::TestDb::new("strong_reads_return_the_same_result_shape.db");
    let repo = repo(&test_db);
    for ts in [100, 200] {
        seed(test_db.pool(), "01011112222", "cafe", ts);
    }

    let default = repo
        .list_inquiries(InquiryListQuery::new(page(1, 20)))
        .unwrap();
    let strong = repo
        .list_inquiries(InquiryListQuery::new(page(1, 20)).consistency(ReadConsistency::Strong))
        .unwrap();

    assert_eq!(default.total, strong.total);
    assert_eq!(
        default.items.iter().map(|i| i.id).collect::<Vec<_>>(),
        strong.items.iter().map(|i| i.id).collect::<Vec<_>>()
    );
}

#[test]
fn recent_range_is_served_fresh_from_the_primary() {
    let test_db = common::TestDb::new("recent_range_is_served_fresh_from_the_primary.db");
    let repo = repo(&test_db);

    let new_inquiry = NewInquiry::new("01012345678", "florist", None).unwrap();
    let created = repo.create_inquiry(&new_inquiry).unwrap();

    // A window starting moments ago routes to the primary, so the write
    // just issued is visible immediately.
    let result = repo
        .list_inquiries(
            InquiryListQuery::new(page(1, 20)).created_between(Some(created.created_at - 1), None),
        )
        .unwrap();
    assert_eq!(result.total, 1);
    assert_eq!(result.items[0].id, created.id);
}
