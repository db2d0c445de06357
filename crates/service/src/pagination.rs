//! Pagination utilities for service layer
//!
//! Provides a simple `Pagination` struct and helpers to normalize inputs.

use serde::Serialize;

pub const DEFAULT_PER_PAGE: u32 = 15;
pub const MAX_PER_PAGE: u32 = 100;

/// Pagination parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based page index
    pub page: u32,
    /// items per page
    pub per_page: u32,
}

impl Pagination {
    /// `None` when the caller asked for neither `page` nor `per_page`,
    /// meaning "everything, unpaginated".
    pub fn from_query(page: Option<u32>, per_page: Option<u32>) -> Option<Self> {
        if page.is_none() && per_page.is_none() {
            return None;
        }
        Some(Self {
            page: page.unwrap_or(1),
            per_page: per_page.unwrap_or(DEFAULT_PER_PAGE),
        })
    }

    /// Clamp to sane defaults and convert to `(0-based page index, per_page)`
    pub fn normalize(self) -> (u64, u64) {
        let page = if self.page == 0 { 1 } else { self.page };
        let per_page = self.per_page.clamp(1, MAX_PER_PAGE);
        ((page - 1) as u64, per_page as u64)
    }

    pub fn meta(self, total: u64) -> PageMeta {
        let (idx, per_page) = self.normalize();
        let last_page = total.div_ceil(per_page).max(1);
        PageMeta { current_page: idx + 1, per_page, total, last_page }
    }
}

impl Default for Pagination {
    fn default() -> Self { Self { page: 1, per_page: DEFAULT_PER_PAGE } }
}

/// Page description returned next to a paginated `data` array.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub current_page: u64,
    pub per_page: u64,
    pub total: u64,
    pub last_page: u64,
}

#[cfg(test)]
mod tests {
    use super::Pagination;

    #[test]
    fn normalize_clamps_zero_to_defaults() {
        let (idx, per) = Pagination { page: 0, per_page: 0 }.normalize();
        assert_eq!(idx, 0);
        assert_eq!(per, 1);
    }

    #[test]
    fn normalize_clamps_upper_bound() {
        let (idx, per) = Pagination { page: 5, per_page: 1000 }.normalize();
        assert_eq!(idx, 4);
        assert_eq!(per, 100);
    }

    #[test]
    fn default_values_are_sane() {
        let d = Pagination::default();
        assert_eq!(d.page, 1);
        assert_eq!(d.per_page, 15);
    }

    #[test]
    fn from_query_only_paginates_when_asked() {
        assert_eq!(Pagination::from_query(None, None), None);
        assert_eq!(Pagination::from_query(Some(2), None), Some(Pagination { page: 2, per_page: 15 }));
        assert_eq!(Pagination::from_query(None, Some(5)), Some(Pagination { page: 1, per_page: 5 }));
    }

    #[test]
    fn meta_rounds_last_page_up() {
        let m = Pagination { page: 2, per_page: 2 }.meta(5);
        assert_eq!((m.current_page, m.per_page, m.total, m.last_page), (2, 2, 5, 3));

        let empty = Pagination::default().meta(0);
        assert_eq!(empty.last_page, 1);
    }
}
