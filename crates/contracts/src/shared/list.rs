//! Paginated list query/result shared by every list page.
//!
//! Pages are 1-based on the wire and in the UI.

use serde::{Deserialize, Serialize};

use super::filter::ListFilter;

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Направление сортировки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SortState {
    pub field: String,
    pub direction: SortDirection,
}

impl SortState {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Asc,
        }
    }

    /// Header click: same column flips asc <-> desc, another column starts at asc.
    pub fn toggle(current: Option<&SortState>, field: &str) -> SortState {
        match current {
            Some(sort) if sort.field == field => SortState {
                field: sort.field.clone(),
                direction: sort.direction.toggled(),
            },
            _ => SortState::asc(field),
        }
    }
}

/// Effective query of one list view.
#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery<F> {
    pub page: usize,
    pub page_size: usize,
    pub search: Option<String>,
    pub filter: F,
    pub sort: Option<SortState>,
}

impl<F: ListFilter> ListQuery<F> {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
            search: None,
            filter: F::default(),
            sort: None,
        }
    }

    /// Query string parameters in the order the backend documents them.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("page".to_string(), self.page.max(1).to_string()),
            ("limit".to_string(), self.page_size.max(1).to_string()),
        ];
        if let Some(search) = self.search.as_deref().map(str::trim) {
            if !search.is_empty() {
                pairs.push(("search".to_string(), search.to_string()));
            }
        }
        if let Some(sort) = &self.sort {
            pairs.push(("sortBy".to_string(), sort.field.clone()));
            pairs.push(("sortOrder".to_string(), sort.direction.as_str().to_string()));
        }
        pairs.extend(
            self.filter
                .query_pairs()
                .into_iter()
                .map(|(key, value)| (key.to_string(), value)),
        );
        pairs
    }
}

/// One page of records as returned by the list endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct ListResult<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
}

/// Entry of the numbered pagination strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    Page(usize),
    Gap,
}

impl<T> ListResult<T> {
    pub fn empty(page: usize, page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            page: page.max(1),
            page_size: page_size.max(1),
        }
    }

    /// Builds a result and enforces `items.len() <= page_size <= ...` and
    /// `total >= items.len()` regardless of what the server sent.
    pub fn new(mut items: Vec<T>, total: usize, page: usize, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        items.truncate(page_size);
        let total = total.max(items.len());
        Self {
            items,
            total,
            page: page.max(1),
            page_size,
        }
    }

    pub fn total_pages(&self) -> usize {
        self.total.div_ceil(self.page_size)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// 1-based positions of the first and last visible record.
    pub fn visible_range(&self) -> Option<(usize, usize)> {
        if self.items.is_empty() {
            return None;
        }
        let first = (self.page - 1) * self.page_size + 1;
        Some((first, first + self.items.len() - 1))
    }

    pub fn summary(&self) -> String {
        match self.visible_range() {
            Some((first, last)) => format!("Showing {} to {} of {}", first, last, self.total),
            None => "No results".to_string(),
        }
    }

    /// Numbered page links around the current page, first and last always present.
    pub fn page_links(&self, max_links: usize) -> Vec<PageLink> {
        let total_pages = self.total_pages();
        if total_pages == 0 {
            return Vec::new();
        }
        if total_pages <= max_links.max(5) {
            return (1..=total_pages).map(PageLink::Page).collect();
        }

        let current = self.page.clamp(1, total_pages);
        let start = current.saturating_sub(1).max(2);
        let end = (current + 1).min(total_pages - 1);

        let mut links = vec![PageLink::Page(1)];
        if start > 2 {
            links.push(PageLink::Gap);
        }
        links.extend((start..=end).map(PageLink::Page));
        if end < total_pages - 1 {
            links.push(PageLink::Gap);
        }
        links.push(PageLink::Page(total_pages));
        links
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> ListResult<U> {
        ListResult {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            page_size: self.page_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::filter::NoFilter;

    #[test]
    fn test_first_page_of_twenty_three() {
        let result = ListResult::new((0..10).collect::<Vec<_>>(), 23, 1, 10);
        assert_eq!(result.items.len(), 10);
        assert_eq!(result.total_pages(), 3);
        assert_eq!(result.summary(), "Showing 1 to 10 of 23");
        assert_eq!(
            result.page_links(7),
            vec![PageLink::Page(1), PageLink::Page(2), PageLink::Page(3)]
        );
    }

    #[test]
    fn test_last_partial_page() {
        let result = ListResult::new(vec!['a', 'b', 'c'], 23, 3, 10);
        assert_eq!(result.visible_range(), Some((21, 23)));
        assert_eq!(result.summary(), "Showing 21 to 23 of 23");
    }

    #[test]
    fn test_invariants_are_enforced() {
        let result = ListResult::new((0..15).collect::<Vec<_>>(), 4, 1, 10);
        assert_eq!(result.items.len(), 10);
        assert!(result.total >= result.items.len());

        let empty: ListResult<u8> = ListResult::new(Vec::new(), 0, 0, 0);
        assert_eq!(empty.page, 1);
        assert_eq!(empty.page_size, 1);
        assert_eq!(empty.total_pages(), 0);
        assert_eq!(empty.summary(), "No results");
        assert!(empty.page_links(7).is_empty());
    }

    #[test]
    fn test_page_links_window() {
        let result: ListResult<u8> = ListResult::new(Vec::new(), 200, 10, 10);
        assert_eq!(
            result.page_links(7),
            vec![
                PageLink::Page(1),
                PageLink::Gap,
                PageLink::Page(9),
                PageLink::Page(10),
                PageLink::Page(11),
                PageLink::Gap,
                PageLink::Page(20),
            ]
        );

        let first: ListResult<u8> = ListResult::new(Vec::new(), 200, 1, 10);
        assert_eq!(
            first.page_links(7),
            vec![
                PageLink::Page(1),
                PageLink::Page(2),
                PageLink::Gap,
                PageLink::Page(20),
            ]
        );
    }

    #[test]
    fn test_sort_toggle() {
        let first = SortState::toggle(None, "name");
        assert_eq!(first.direction, SortDirection::Asc);
        let second = SortState::toggle(Some(&first), "name");
        assert_eq!(second.direction, SortDirection::Desc);
        let third = SortState::toggle(Some(&second), "name");
        assert_eq!(third.direction, SortDirection::Asc);
        let other = SortState::toggle(Some(&second), "code");
        assert_eq!(other, SortState::asc("code"));
    }

    #[test]
    fn test_query_pairs_skip_blank_search() {
        let mut query: ListQuery<NoFilter> = ListQuery::new(25);
        query.search = Some("   ".to_string());
        query.page = 2;
        assert_eq!(
            query.query_pairs(),
            vec![
                ("page".to_string(), "2".to_string()),
                ("limit".to_string(), "25".to_string()),
            ]
        );

        query.search = Some(" acme ".to_string());
        query.sort = Some(SortState {
            field: "name".to_string(),
            direction: SortDirection::Desc,
        });
        let pairs = query.query_pairs();
        assert!(pairs.contains(&("search".to_string(), "acme".to_string())));
        assert!(pairs.contains(&("sortBy".to_string(), "name".to_string())));
        assert!(pairs.contains(&("sortOrder".to_string(), "desc".to_string())));
    }
}
