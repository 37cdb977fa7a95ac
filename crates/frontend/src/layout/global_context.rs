use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

use crate::layout::tabs::tab_label_for_key;

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
        }
    }

    /// Restores the tab named in `?active=` and keeps the URL in sync afterwards.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(active_key) = params.get("active").cloned() {
            let title = tab_label_for_key(&active_key);
            self.open_tab(&active_key, &title);
        }

        let this = *self;
        Effect::new(move |_| {
            let Some(active_key) = this.active.get() else {
                return;
            };
            let query_string =
                serde_qs::to_string(&HashMap::from([("active".to_string(), active_key)]))
                    .unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            if current_search == new_url {
                return;
            }
            if let Some(history) = window().and_then(|w| w.history().ok()) {
                let _ = history.replace_state_with_url(
                    &wasm_bindgen::JsValue::NULL,
                    "",
                    Some(&new_url),
                );
            }
        });
    }

    pub fn open_tab(&self, key: &str, title: &str) {
        log::debug!("open_tab: key='{}', title='{}'", key, title);
        self.opened.update(|tabs| open_in(tabs, key, title));
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    pub fn update_tab_title(&self, key: &str, new_title: &str) {
        self.opened.update(|tabs| {
            if let Some(tab) = tabs.iter_mut().find(|t| t.key == key) {
                tab.title = new_title.to_string();
            }
        });
    }

    pub fn close_tab(&self, key: &str) {
        log::debug!("close_tab: key='{}'", key);
        let was_active = self
            .active
            .with_untracked(|active| active.as_deref() == Some(key));
        let mut next_active = None;
        self.opened.update(|tabs| {
            next_active = close_in(tabs, key);
        });
        if was_active {
            self.active.set(next_active);
        }
    }

    /// Drops every tab; used on logout.
    pub fn close_all(&self) {
        self.opened.set(Vec::new());
        self.active.set(None);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}

/// Appends the tab unless a tab with that key is already open.
fn open_in(tabs: &mut Vec<Tab>, key: &str, title: &str) {
    if tabs.iter().any(|tab| tab.key == key) {
        return;
    }
    tabs.push(Tab {
        key: key.to_string(),
        title: title.to_string(),
    });
}

/// Removes the tab and returns the key that should become active if it was.
fn close_in(tabs: &mut Vec<Tab>, key: &str) -> Option<String> {
    tabs.retain(|tab| tab.key != key);
    tabs.last().map(|t| t.key.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_is_idempotent() {
        let mut tabs = Vec::new();
        open_in(&mut tabs, "a001_organization", "Organizations");
        open_in(&mut tabs, "a001_organization", "Organizations again");
        assert_eq!(tabs.len(), 1);
        assert_eq!(tabs[0].title, "Organizations");
    }

    #[test]
    fn test_close_falls_back_to_last_tab() {
        let mut tabs = Vec::new();
        open_in(&mut tabs, "a001_organization", "Organizations");
        open_in(&mut tabs, "a002_center", "Centers");
        open_in(&mut tabs, "a003_course", "Courses");
        assert_eq!(close_in(&mut tabs, "a003_course"), Some("a002_center".to_string()));
        assert_eq!(close_in(&mut tabs, "a001_organization"), Some("a002_center".to_string()));
        assert_eq!(close_in(&mut tabs, "a002_center"), None);
        assert!(tabs.is_empty());
    }
}
