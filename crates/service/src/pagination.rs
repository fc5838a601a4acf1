//! Pagination utilities for service layer
//!
//! A zero page or limit means "no pagination": the full, sorted set.

use sea_orm::Order;

/// Pagination parameters
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based page index
    pub page: u64,
    /// items per page
    pub limit: u64,
}

impl Pagination {
    pub fn new(page: u64, limit: u64) -> Self { Self { page, limit } }

    /// Raw query-string values; anything unparsable counts as zero.
    pub fn from_raw(page: Option<&str>, limit: Option<&str>) -> Self {
        let parse = |v: Option<&str>| v.and_then(|s| s.trim().parse::<u64>().ok()).unwrap_or(0);
        Self { page: parse(page), limit: parse(limit) }
    }

    /// Row window for the query, or `None` for the unpaginated set.
    pub fn window(self) -> Option<models::product::Window> {
        if self.page == 0 || self.limit == 0 {
            return None;
        }
        Some(models::product::Window { offset: (self.page - 1).saturating_mul(self.limit), limit: self.limit })
    }
}

/// Listing order on creation time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// `"desc"` sorts descending; every other value, including empty, is ascending.
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("desc") { SortDirection::Desc } else { SortDirection::Asc }
    }
}

impl From<SortDirection> for Order {
    fn from(dir: SortDirection) -> Self {
        match dir {
            SortDirection::Asc => Order::Asc,
            SortDirection::Desc => Order::Desc,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_page_or_limit_is_unpaginated() {
        assert_eq!(Pagination::new(0, 10).window(), None);
        assert_eq!(Pagination::new(2, 0).window(), None);
        assert_eq!(Pagination::default().window(), None);
    }

    #[test]
    fn window_offsets_by_page() {
        let w = Pagination::new(3, 10).window().unwrap();
        assert_eq!(w.offset, 20);
        assert_eq!(w.limit, 10);
        assert_eq!(Pagination::new(1, 5).window().unwrap().offset, 0);
    }

    #[test]
    fn from_raw_treats_garbage_as_zero() {
        assert_eq!(Pagination::from_raw(Some("2"), Some("15")), Pagination::new(2, 15));
        assert_eq!(Pagination::from_raw(Some("abc"), Some("-1")), Pagination::new(0, 0));
        assert_eq!(Pagination::from_raw(None, Some("5")), Pagination::new(0, 5));
    }

    #[test]
    fn sort_defaults_to_ascending() {
        assert_eq!(SortDirection::parse("desc"), SortDirection::Desc);
        assert_eq!(SortDirection::parse("DESC"), SortDirection::Desc);
        assert_eq!(SortDirection::parse("asc"), SortDirection::Asc);
        assert_eq!(SortDirection::parse(""), SortDirection::Asc);
        assert_eq!(SortDirection::parse("sideways"), SortDirection::Asc);
    }
}
