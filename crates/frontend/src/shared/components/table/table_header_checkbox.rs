//! Компонент чекбокса в заголовке таблицы для выбора всех строк
//!
//! # Примеры
//!
//! ```ignore
//! <TableHeaderCheckbox
//!     keys=Signal::derive(move || handle.items().iter().map(|r| r.record_key()).collect())
//!     selected=Signal::derive(move || handle.with(|s| s.selection().clone()))
//!     on_change=Callback::new(move |check_all: bool| handle.set_all_selected(check_all))
//! />
//! ```

use leptos::prelude::*;
use leptos::prelude::event_target_checked;
use std::collections::BTreeSet;
use thaw::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CheckboxState {
    Unchecked,
    Checked,
    Indeterminate,
}

impl CheckboxState {
    /// State of the header box for the visible `keys`.
    pub fn of(keys: &[String], selected: &BTreeSet<String>) -> Self {
        if keys.is_empty() {
            return CheckboxState::Unchecked;
        }
        let selected_count = keys.iter().filter(|k| selected.contains(*k)).count();
        if selected_count == 0 {
            CheckboxState::Unchecked
        } else if selected_count == keys.len() {
            CheckboxState::Checked
        } else {
            CheckboxState::Indeterminate
        }
    }
}

/// Компонент чекбокса в заголовке таблицы
///
/// Показывает три состояния: unchecked, checked, indeterminate.
#[component]
pub fn TableHeaderCheckbox(
    /// Ключи строк текущей страницы
    #[prop(into)]
    keys: Signal<Vec<String>>,

    /// Выбранные ключи
    #[prop(into)]
    selected: Signal<BTreeSet<String>>,

    /// Callback при изменении (true = выбрать все, false = снять все)
    on_change: Callback<bool>,
) -> impl IntoView {
    let checkbox_state =
        Signal::derive(move || selected.with(|sel| keys.with(|k| CheckboxState::of(k, sel))));

    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    // indeterminate есть только у DOM-свойства, атрибута нет
    Effect::new(move |_| {
        let state = checkbox_state.get();
        if let Some(input) = checkbox_ref.get() {
            input.set_indeterminate(matches!(state, CheckboxState::Indeterminate));
        }
    });

    view! {
        <TableHeaderCell resizable=false class="fixed-checkbox-column">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || matches!(checkbox_state.get(), CheckboxState::Checked)
                prop:disabled=move || keys.with(|k| k.is_empty())
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
        </TableHeaderCell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_checkbox_state() {
        let page = keys(&["a", "b", "c"]);
        let mut selected = BTreeSet::new();
        assert_eq!(CheckboxState::of(&page, &selected), CheckboxState::Unchecked);
        selected.insert("b".to_string());
        assert_eq!(CheckboxState::of(&page, &selected), CheckboxState::Indeterminate);
        selected.extend(page.iter().cloned());
        assert_eq!(CheckboxState::of(&page, &selected), CheckboxState::Checked);
        assert_eq!(CheckboxState::of(&[], &selected), CheckboxState::Unchecked);
    }
}
