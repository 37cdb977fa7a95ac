//! State machine of one server-paginated list view.
//!
//! Every query mutation is followed by exactly one `begin_fetch`; responses
//! are committed with the sequence number of their fetch, and only the
//! latest issued fetch may change the visible result.

use std::collections::BTreeSet;

use contracts::shared::api::ApiError;
use contracts::shared::filter::ListFilter;
use contracts::shared::list::{ListQuery, ListResult, SortState};

/// Issued by `begin_fetch`; the query is a snapshot at issue time.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchTicket<F> {
    pub seq: u64,
    pub query: ListQuery<F>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    Applied,
    /// The result was replaced by an empty page; the text goes to a notification.
    Failed(String),
    /// A newer fetch was issued after this one; nothing changed.
    Stale,
}

#[derive(Debug, Clone)]
pub struct ListController<T, F> {
    query: ListQuery<F>,
    result: ListResult<T>,
    loading: bool,
    error: Option<String>,
    selection: BTreeSet<String>,
    last_issued: u64,
}

impl<T, F: ListFilter> ListController<T, F> {
    pub fn new(page_size: usize, sort: Option<SortState>) -> Self {
        let mut query = ListQuery::new(page_size);
        query.sort = sort;
        let result = ListResult::empty(query.page, query.page_size);
        Self {
            query,
            result,
            loading: false,
            error: None,
            selection: BTreeSet::new(),
            last_issued: 0,
        }
    }

    pub fn query(&self) -> &ListQuery<F> {
        &self.query
    }

    pub fn result(&self) -> &ListResult<T> {
        &self.result
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    // ------------------------------------------------------------------
    // Query mutations. All of them except `set_page` go back to page 1.
    // ------------------------------------------------------------------

    pub fn set_search(&mut self, search: &str) {
        let trimmed = search.trim();
        self.query.search = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
        self.query.page = 1;
    }

    pub fn set_filter(&mut self, filter: F) {
        self.query.filter = filter;
        self.query.page = 1;
    }

    pub fn update_filter(&mut self, f: impl FnOnce(&mut F)) {
        f(&mut self.query.filter);
        self.query.page = 1;
    }

    /// Clears search and filters, keeps sort and page size.
    pub fn reset_filters(&mut self) {
        self.query.search = None;
        self.query.filter = F::default();
        self.query.page = 1;
    }

    /// Pages are clamped to `1..=total_pages` once the total is known.
    pub fn set_page(&mut self, page: usize) {
        let last = self.result.total_pages().max(1);
        self.query.page = page.clamp(1, last);
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.query.page_size = page_size.max(1);
        self.query.page = 1;
    }

    pub fn set_sort(&mut self, sort: Option<SortState>) {
        self.query.sort = sort;
        self.query.page = 1;
    }

    /// Header click: asc → desc → asc on the same column, asc on a new one.
    pub fn toggle_sort(&mut self, field: &str) {
        let next = SortState::toggle(self.query.sort.as_ref(), field);
        self.set_sort(Some(next));
    }

    // ------------------------------------------------------------------
    // Fetch lifecycle
    // ------------------------------------------------------------------

    pub fn begin_fetch(&mut self) -> FetchTicket<F> {
        self.last_issued += 1;
        self.loading = true;
        FetchTicket {
            seq: self.last_issued,
            query: self.query.clone(),
        }
    }

    pub fn is_latest(&self, seq: u64) -> bool {
        seq == self.last_issued
    }

    pub fn commit(&mut self, seq: u64, response: Result<ListResult<T>, ApiError>) -> CommitOutcome {
        if !self.is_latest(seq) {
            return CommitOutcome::Stale;
        }
        self.loading = false;
        self.selection.clear();
        match response {
            Ok(result) => {
                self.result = result;
                self.error = None;
                CommitOutcome::Applied
            }
            Err(err) => {
                let message = err.user_message();
                self.result = ListResult::empty(self.query.page, self.query.page_size);
                self.error = Some(message.clone());
                CommitOutcome::Failed(message)
            }
        }
    }

    // ------------------------------------------------------------------
    // Row selection
    // ------------------------------------------------------------------

    pub fn selection(&self) -> &BTreeSet<String> {
        &self.selection
    }

    pub fn is_selected(&self, key: &str) -> bool {
        self.selection.contains(key)
    }

    pub fn set_selected(&mut self, key: &str, selected: bool) {
        if selected {
            self.selection.insert(key.to_string());
        } else {
            self.selection.remove(key);
        }
    }

    pub fn select_all(&mut self, keys: impl IntoIterator<Item = String>) {
        self.selection.extend(keys);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a004_cohort::aggregate::{CohortFilter, CohortStatus};
    use contracts::shared::filter::NoFilter;
    use contracts::shared::list::SortDirection;

    type Controller = ListController<u32, NoFilter>;

    fn page(items: std::ops::Range<u32>, total: usize, page: usize) -> ListResult<u32> {
        ListResult::new(items.collect(), total, page, 10)
    }

    #[test]
    fn test_first_fetch_of_twenty_three() {
        let mut c = Controller::new(10, None);
        let ticket = c.begin_fetch();
        assert_eq!(ticket.query.page, 1);
        assert_eq!(ticket.query.page_size, 10);
        assert!(c.is_loading());

        assert_eq!(c.commit(ticket.seq, Ok(page(0..10, 23, 1))), CommitOutcome::Applied);
        assert!(!c.is_loading());
        assert_eq!(c.result().items.len(), 10);
        assert_eq!(c.result().total_pages(), 3);
        assert_eq!(c.result().summary(), "Showing 1 to 10 of 23");
    }

    #[test]
    fn test_mutations_reset_page() {
        let mut c: ListController<u32, CohortFilter> = ListController::new(10, None);
        let t = c.begin_fetch();
        c.commit(t.seq, Ok(ListResult::new((0..10).collect(), 95, 1, 10)));

        c.set_page(4);
        assert_eq!(c.query().page, 4);
        c.set_search("  rust ");
        assert_eq!(c.query().page, 1);
        assert_eq!(c.query().search.as_deref(), Some("rust"));

        c.set_page(3);
        c.update_filter(|f| f.status = Some(CohortStatus::Ongoing));
        assert_eq!(c.query().page, 1);

        c.set_page(5);
        c.toggle_sort("name");
        assert_eq!(c.query().page, 1);

        c.set_page(2);
        c.set_page_size(25);
        assert_eq!(c.query().page, 1);
        assert_eq!(c.query().page_size, 25);

        c.set_page(2);
        c.reset_filters();
        assert_eq!(c.query().page, 1);
        assert!(c.query().filter.status.is_none());
        assert!(c.query().search.is_none());
    }

    #[test]
    fn test_set_page_is_clamped() {
        let mut c = Controller::new(10, None);
        let t = c.begin_fetch();
        c.commit(t.seq, Ok(page(0..10, 23, 1)));
        c.set_page(9);
        assert_eq!(c.query().page, 3);
        c.set_page(0);
        assert_eq!(c.query().page, 1);
    }

    #[test]
    fn test_latest_query_wins_regardless_of_arrival_order() {
        let mut c = Controller::new(10, None);
        c.set_search("a");
        let first = c.begin_fetch();
        c.set_search("ab");
        let second = c.begin_fetch();

        // Newer response arrives first, older one afterwards.
        assert_eq!(c.commit(second.seq, Ok(page(0..2, 2, 1))), CommitOutcome::Applied);
        assert_eq!(c.commit(first.seq, Ok(page(0..10, 40, 1))), CommitOutcome::Stale);
        assert_eq!(c.result().total, 2);
        assert_eq!(second.query.search.as_deref(), Some("ab"));
    }

    #[test]
    fn test_rapid_page_changes_keep_last_page() {
        let mut c = Controller::new(10, None);
        let t = c.begin_fetch();
        c.commit(t.seq, Ok(page(0..10, 35, 1)));

        c.set_page(2);
        let to_second = c.begin_fetch();
        c.set_page(3);
        let to_third = c.begin_fetch();
        assert_eq!(to_second.query.page, 2);
        assert_eq!(to_third.query.page, 3);

        assert_eq!(c.commit(to_third.seq, Ok(page(20..30, 35, 3))), CommitOutcome::Applied);
        assert_eq!(c.commit(to_second.seq, Ok(page(10..20, 35, 2))), CommitOutcome::Stale);
        assert_eq!(c.result().page, 3);
        assert_eq!(c.result().items.first(), Some(&20));
        assert_eq!(c.result().summary(), "Showing 21 to 30 of 35");
        assert_eq!(c.query().page, 3);
    }

    #[test]
    fn test_stale_response_does_not_stop_loading() {
        let mut c = Controller::new(10, None);
        let first = c.begin_fetch();
        let _second = c.begin_fetch();
        assert_eq!(c.commit(first.seq, Ok(page(0..1, 1, 1))), CommitOutcome::Stale);
        assert!(c.is_loading());
    }

    #[test]
    fn test_failure_empties_result() {
        let mut c = Controller::new(10, None);
        let t = c.begin_fetch();
        c.commit(t.seq, Ok(page(0..10, 23, 1)));
        c.set_selected("3", true);

        let t = c.begin_fetch();
        let outcome = c.commit(
            t.seq,
            Err(ApiError::Application {
                message: Some("Database unavailable".into()),
            }),
        );
        assert_eq!(outcome, CommitOutcome::Failed("Database unavailable".into()));
        assert!(c.result().items.is_empty());
        assert_eq!(c.result().total, 0);
        assert_eq!(c.error(), Some("Database unavailable"));
        assert!(c.selection().is_empty());
        assert!(!c.is_loading());
    }

    #[test]
    fn test_commit_clears_selection() {
        let mut c = Controller::new(10, None);
        c.set_selected("1", true);
        c.select_all(vec!["2".to_string(), "3".to_string()]);
        assert_eq!(c.selection().len(), 3);
        c.set_selected("2", false);
        assert!(!c.is_selected("2"));

        let t = c.begin_fetch();
        c.commit(t.seq, Ok(page(0..3, 3, 1)));
        assert!(c.selection().is_empty());
    }

    #[test]
    fn test_sort_toggles_and_is_sent() {
        let mut c = Controller::new(10, Some(SortState::asc("name")));
        c.toggle_sort("name");
        assert_eq!(c.query().sort.as_ref().map(|s| s.direction), Some(SortDirection::Desc));
        c.toggle_sort("code");
        let ticket = c.begin_fetch();
        let pairs = ticket.query.query_pairs();
        assert!(pairs.contains(&("sortBy".to_string(), "code".to_string())));
        assert!(pairs.contains(&("sortOrder".to_string(), "asc".to_string())));
    }
}
