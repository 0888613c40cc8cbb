//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::inquiry::{Inquiry, NewInquiry};
use crate::repository::errors::StorageResult;
use crate::repository::{InquiryListQuery, InquiryReader, InquiryWriter, PageResult};

mock! {
    pub Repository {}

    impl InquiryReader for Repository {
        fn list_inquiries(&self, query: InquiryListQuery) -> StorageResult<PageResult<Inquiry>>;
    }

    impl InquiryWriter for Repository {
        fn create_inquiry(&self, new_inquiry: &NewInquiry) -> StorageResult<Inquiry>;
    }
}
