//! Reactive side of a list page: owns the controller in a signal and runs
//! the fetches it issues.

use contracts::domain::common::Entity;
use contracts::shared::list::{ListResult, SortState};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::controller::{CommitOutcome, ListController};
use super::debounce::SearchDebouncer;
use super::delete_flow::{DeleteFlow, DeleteOutcome};
use crate::shared::api;
use crate::shared::config::app_config;
use crate::shared::notifications::NotificationService;

pub struct ListHandle<E: Entity> {
    state: RwSignal<ListController<E, E::Filter>>,
    debouncer: RwSignal<SearchDebouncer>,
    /// What is typed in the search box, ahead of the debounced query.
    search_text: RwSignal<String>,
    deletion: RwSignal<DeleteFlow<E>>,
    notifications: NotificationService,
}

impl<E: Entity> Clone for ListHandle<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: Entity> Copy for ListHandle<E> {}

impl<E: Entity> ListHandle<E> {
    pub fn new(notifications: NotificationService) -> Self {
        let page_size = app_config().default_page_size;
        Self {
            state: RwSignal::new(ListController::new(page_size, E::default_sort())),
            debouncer: RwSignal::new(SearchDebouncer::new()),
            search_text: RwSignal::new(String::new()),
            deletion: RwSignal::new(DeleteFlow::new()),
            notifications,
        }
    }

    // ------------------------------------------------------------------
    // Reads (tracked)
    // ------------------------------------------------------------------

    pub fn with<R>(&self, f: impl FnOnce(&ListController<E, E::Filter>) -> R) -> R {
        self.state.with(f)
    }

    pub fn with_untracked<R>(&self, f: impl FnOnce(&ListController<E, E::Filter>) -> R) -> R {
        self.state.with_untracked(f)
    }

    pub fn items(&self) -> Vec<E> {
        self.state.with(|s| s.result().items.clone())
    }

    pub fn result(&self) -> ListResult<E> {
        self.state.with(|s| s.result().clone())
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(|s| s.is_loading())
    }

    pub fn sort(&self) -> Option<SortState> {
        self.state.with(|s| s.query().sort.clone())
    }

    pub fn filter(&self) -> E::Filter {
        self.state.with(|s| s.query().filter.clone())
    }

    pub fn search_text(&self) -> RwSignal<String> {
        self.search_text
    }

    pub fn deletion(&self) -> RwSignal<DeleteFlow<E>> {
        self.deletion
    }

    pub fn notifications(&self) -> NotificationService {
        self.notifications
    }

    // ------------------------------------------------------------------
    // Fetch
    // ------------------------------------------------------------------

    /// Issues a fetch for the current query. Only the latest one is applied.
    pub fn fetch(&self) {
        let Some(ticket) = self.state.try_update(|s| s.begin_fetch()) else {
            return;
        };
        let this = *self;
        let seq = ticket.seq;
        spawn_local(async move {
            let response = api::fetch_list::<E>(&ticket.query).await;
            match this.state.try_update(|s| s.commit(seq, response)) {
                None => log::debug!("{}: list disposed, dropping response seq={}", E::full_name(), seq),
                Some(CommitOutcome::Stale) => {
                    log::debug!("{}: dropping stale response seq={}", E::full_name(), seq)
                }
                Some(CommitOutcome::Failed(message)) => this.notifications.error(message),
                Some(CommitOutcome::Applied) => {}
            }
        });
    }

    pub fn reload(&self) {
        self.fetch();
    }

    fn mutate(&self, f: impl FnOnce(&mut ListController<E, E::Filter>)) {
        if self.state.try_update(f).is_some() {
            self.fetch();
        }
    }

    // ------------------------------------------------------------------
    // Query mutations
    // ------------------------------------------------------------------

    pub fn set_filter(&self, filter: E::Filter) {
        self.mutate(|s| s.set_filter(filter));
    }

    pub fn update_filter(&self, f: impl FnOnce(&mut E::Filter)) {
        self.mutate(|s| s.update_filter(f));
    }

    pub fn reset_filters(&self) {
        self.debouncer.update(|d| d.cancel());
        self.search_text.set(String::new());
        self.mutate(|s| s.reset_filters());
    }

    pub fn set_page(&self, page: usize) {
        self.mutate(|s| s.set_page(page));
    }

    pub fn set_page_size(&self, page_size: usize) {
        self.mutate(|s| s.set_page_size(page_size));
    }

    pub fn toggle_sort(&self, field: &str) {
        self.mutate(|s| s.toggle_sort(field));
    }

    /// Keystroke in the search box; the query changes once typing pauses.
    pub fn input_search(&self, text: String) {
        self.search_text.set(text.clone());
        let Some(ticket) = self.debouncer.try_update(|d| d.input(text)) else {
            return;
        };
        let this = *self;
        let delay = app_config().search_debounce_ms;
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            if let Some(Some(search)) = this.debouncer.try_update(|d| d.settle(ticket)) {
                this.mutate(|s| s.set_search(&search));
            }
        });
    }

    /// Clear button: applies immediately, without waiting for the debounce.
    pub fn clear_search(&self) {
        self.debouncer.update(|d| d.cancel());
        self.search_text.set(String::new());
        self.mutate(|s| s.set_search(""));
    }

    // ------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------

    pub fn set_selected(&self, key: String, selected: bool) {
        self.state.update(|s| s.set_selected(&key, selected));
    }

    pub fn set_all_selected(&self, selected: bool) {
        self.state.update(|s| {
            if selected {
                let keys: Vec<String> = s.result().items.iter().map(|r| r.record_key()).collect();
                s.select_all(keys);
            } else {
                s.clear_selection();
            }
        });
    }

    // ------------------------------------------------------------------
    // Deletion
    // ------------------------------------------------------------------

    pub fn request_delete(&self, record: E) {
        let staged = self.deletion.try_update(|d| d.request(record)).unwrap_or(false);
        if !staged {
            log::debug!("{}: delete already in flight, ignoring", E::full_name());
        }
    }

    pub fn cancel_delete(&self) {
        self.deletion.update(|d| d.cancel());
    }

    pub fn confirm_delete(&self) {
        let Some(Some(record)) = self.deletion.try_update(|d| d.confirm()) else {
            return;
        };
        let this = *self;
        spawn_local(async move {
            let result = api::delete::<E>(record.id())
                .await
                .map_err(|e| e.user_message());
            let Some(outcome) = this.deletion.try_update(|d| d.finish(result)) else {
                return;
            };
            match outcome {
                DeleteOutcome::Deleted => {
                    this.notifications
                        .success(format!("{} deleted", E::element_name()));
                    this.fetch();
                }
                DeleteOutcome::Failed(message) => this.notifications.error(message),
            }
        });
    }
}
