//! Unit Data

use crate::domain::units::{
    records::UnitUuid,
    types::{UnitStatus, UnitType},
};

/// Validated input for storing a new unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUnit {
    /// Identifier chosen by the caller
    pub uuid: UnitUuid,

    /// Display name
    pub name: String,

    /// Capsule or cabin
    pub unit_type: UnitType,

    /// Initial status
    pub status: UnitStatus,
}

/// Create or update input as received, before the type and status are parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnitRequest {
    /// Display name
    pub name: String,

    /// Raw unit type
    pub unit_type: String,

    /// Raw unit status
    pub status: String,
}

/// Optional equality and substring filters for listing units.
///
/// Empty strings are treated the same as absent filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnitFilter {
    /// Exact status match
    pub status: Option<String>,

    /// Exact type match
    pub unit_type: Option<String>,

    /// Case-insensitive substring of the name
    pub name: Option<String>,
}

impl UnitFilter {
    /// Status filter, if set.
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        non_empty(self.status.as_deref())
    }

    /// Type filter, if set.
    #[must_use]
    pub fn unit_type(&self) -> Option<&str> {
        non_empty(self.unit_type.as_deref())
    }

    /// Name substring filter, if set.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        non_empty(self.name.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}

/// One-based page number and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// One-based page number
    pub page: i64,

    /// Maximum items per page
    pub size: i64,
}

impl PageRequest {
    /// Page used when the client does not ask for one.
    pub const DEFAULT_PAGE: i64 = 1;

    /// Size used when the client does not ask for one.
    pub const DEFAULT_SIZE: i64 = 10;

    /// Create a page request.
    #[must_use]
    pub const fn new(page: i64, size: i64) -> Self {
        Self { page, size }
    }

    /// Number of matching items skipped before this page.
    #[must_use]
    pub const fn offset(self) -> i64 {
        (self.page - 1).saturating_mul(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PAGE, Self::DEFAULT_SIZE)
    }
}

/// A page of results plus the total number of matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Requested page
    pub page: i64,

    /// Requested size
    pub size: i64,

    /// Matches across all pages
    pub total: u64,

    /// Items on this page
    pub content: Vec<T>,
}

impl<T> Page<T> {
    /// Assemble a page for the given request.
    #[must_use]
    pub fn new(request: PageRequest, total: u64, content: Vec<T>) -> Self {
        Self {
            page: request.page,
            size: request.size,
            total,
            content,
        }
    }

    /// Number of pages needed to hold every match.
    #[must_use]
    pub fn total_pages(&self) -> u64 {
        u64::try_from(self.size)
            .ok()
            .filter(|size| *size > 0)
            .map_or(0, |size| self.total.div_ceil(size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filters_count_as_absent() {
        let filter = UnitFilter {
            status: Some(String::new()),
            unit_type: None,
            name: Some("cap".to_owned()),
        };

        assert_eq!(filter.status(), None);
        assert_eq!(filter.unit_type(), None);
        assert_eq!(filter.name(), Some("cap"));
    }

    #[test]
    fn offset_skips_previous_pages() {
        assert_eq!(PageRequest::new(1, 10).offset(), 0);
        assert_eq!(PageRequest::new(3, 2).offset(), 4);
    }

    #[test]
    fn default_page_request_is_first_ten() {
        assert_eq!(PageRequest::default(), PageRequest::new(1, 10));
    }

    #[test]
    fn total_pages_rounds_up() {
        let page = Page::new(PageRequest::new(1, 2), 5, vec![(), ()]);

        assert_eq!(page.total_pages(), 3);
    }

    #[test]
    fn total_pages_is_zero_without_matches() {
        let page: Page<()> = Page::new(PageRequest::default(), 0, Vec::new());

        assert_eq!(page.total_pages(), 0);
    }
}
