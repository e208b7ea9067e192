use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::requests::list::PageRequest;

/// One page of results plus the bookkeeping a client needs to walk the rest.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Paged<T> {
    pub total_count: i64,
    pub total_pages: i64,
    pub page: i32,
    pub size: i32,
    pub has_more: bool,
    pub items: Vec<T>,
}

impl<T> Paged<T> {
    pub fn new(req: &PageRequest, total_count: i64, items: Vec<T>) -> Self {
        let size = i64::from(req.size());
        let total_pages = if total_count == 0 {
            0
        } else {
            (total_count + size - 1) / size
        };
        let has_more = i64::from(req.page()) * size < total_count;

        Self {
            total_count,
            total_pages,
            page: req.page(),
            size: req.size(),
            has_more,
            items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_result_has_no_pages() {
        let req = PageRequest::new(1, 10);
        let page: Paged<i32> = Paged::new(&req, 0, Vec::new());

        assert_eq!(page.total_count, 0);
        assert_eq!(page.total_pages, 0);
        assert!(!page.has_more);
        assert!(page.items.is_empty());
    }

    #[test]
    fn partial_last_page_rounds_up() {
        let req = PageRequest::new(1, 10);
        let page: Paged<i32> = Paged::new(&req, 25, (0..10).collect());

        assert_eq!(page.total_pages, 3);
        assert!(page.has_more);
    }

    #[test]
    fn final_page_reports_no_more() {
        let req = PageRequest::new(3, 10);
        let page: Paged<i32> = Paged::new(&req, 25, (20..25).collect());

        assert_eq!(page.total_pages, 3);
        assert!(!page.has_more);
    }

    #[test]
    fn exact_boundary_has_no_more() {
        let req = PageRequest::new(2, 10);
        let page: Paged<i32> = Paged::new(&req, 20, (10..20).collect());

        assert_eq!(page.total_pages, 2);
        assert!(!page.has_more);
    }
}
