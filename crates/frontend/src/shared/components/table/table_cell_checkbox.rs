//! Компонент чекбокса в ячейке таблицы для выбора отдельной строки

use leptos::prelude::*;
use std::collections::BTreeSet;
use thaw::*;

/// Клик по чекбоксу не доходит до строки (stop_propagation).
#[component]
pub fn TableCellCheckbox(
    /// Ключ строки
    #[prop(into)]
    item_key: String,

    /// Выбранные ключи
    #[prop(into)]
    selected: Signal<BTreeSet<String>>,

    /// Callback при изменении (item_key, checked)
    on_change: Callback<(String, bool)>,
) -> impl IntoView {
    let key_for_checked = item_key.clone();

    view! {
        <TableCell class="fixed-checkbox-column" on:click=|e| e.stop_propagation()>
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || selected.with(|s| s.contains(&key_for_checked))
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    on_change.run((item_key.clone(), checked));
                }
            />
        </TableCell>
    }
}
