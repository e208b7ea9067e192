use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

pub const DEFAULT_PAGE_SIZE: i32 = 10;

/// Optional paging controls accepted by every list endpoint. When neither
/// field is present the endpoint returns the full, unpaged collection.
#[derive(Debug, Default, Serialize, Deserialize, IntoParams)]
pub struct ListParams {
    pub page: Option<i32>,
    pub size: Option<i32>,
}

impl ListParams {
    pub fn page_request(&self) -> Option<PageRequest> {
        match (self.page, self.size) {
            (None, None) => None,
            (page, size) => Some(PageRequest::new(
                page.unwrap_or(1),
                size.unwrap_or(DEFAULT_PAGE_SIZE),
            )),
        }
    }
}

/// Normalized 1-indexed page window: a non-positive page means the first
/// page, a non-positive size falls back to the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: i32,
    size: i32,
}

impl PageRequest {
    pub fn new(page: i32, size: i32) -> Self {
        let page = if page > 0 { page } else { 1 };
        let size = if size > 0 { size } else { DEFAULT_PAGE_SIZE };
        Self { page, size }
    }

    pub fn page(&self) -> i32 {
        self.page
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.size)
    }

    pub fn offset(&self) -> i64 {
        i64::from(self.page - 1) * i64::from(self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_positive_page_becomes_first_page() {
        assert_eq!(PageRequest::new(0, 10).page(), 1);
        assert_eq!(PageRequest::new(-3, 10).page(), 1);
        assert_eq!(PageRequest::new(2, 10).page(), 2);
    }

    #[test]
    fn non_positive_size_falls_back_to_default() {
        assert_eq!(PageRequest::new(1, 0).size(), DEFAULT_PAGE_SIZE);
        assert_eq!(PageRequest::new(1, -5).size(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn offset_is_zero_indexed_window_start() {
        assert_eq!(PageRequest::new(1, 10).offset(), 0);
        assert_eq!(PageRequest::new(3, 10).offset(), 20);
        assert_eq!(PageRequest::new(3, 10).limit(), 10);
    }

    #[test]
    fn page_request_absent_without_params() {
        let params = ListParams::default();
        assert!(params.page_request().is_none());
    }

    #[test]
    fn one_param_is_enough_to_page() {
        let params = ListParams {
            page: Some(2),
            size: None,
        };
        let req = params.page_request().unwrap();
        assert_eq!(req.page(), 2);
        assert_eq!(req.size(), DEFAULT_PAGE_SIZE);

        let params = ListParams {
            page: None,
            size: Some(5),
        };
        let req = params.page_request().unwrap();
        assert_eq!(req.page(), 1);
        assert_eq!(req.size(), 5);
    }
}
