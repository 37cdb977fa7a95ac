//! Компонент сортируемой ячейки заголовка таблицы
//!
//! # Примеры
//!
//! ```ignore
//! <SortableHeaderCell
//!     label="Name"
//!     sort_field="name"
//!     sort=Signal::derive(move || handle.sort())
//!     on_sort=Callback::new(move |field: String| handle.toggle_sort(&field))
//! />
//! ```

use contracts::shared::list::SortState;
use leptos::prelude::*;
use thaw::*;

use crate::shared::list_utils::{get_sort_class, get_sort_indicator};

/// Клик по заголовку переключает сортировку: asc → desc → asc.
#[component]
pub fn SortableHeaderCell(
    /// Текст заголовка
    #[prop(into)]
    label: String,

    /// Поле сортировки на сервере
    sort_field: &'static str,

    /// Текущая сортировка списка
    #[prop(into)]
    sort: Signal<Option<SortState>>,

    /// Callback при клике на заголовок
    on_sort: Callback<String>,

    /// Inline-стиль ширины колонки
    #[prop(optional, into)]
    style: String,

    /// Выравнивание заголовка (left/right)
    #[prop(optional, default = "left")]
    align: &'static str,
) -> impl IntoView {
    let header_style = if align == "right" {
        "cursor: pointer; justify-content: flex-end;"
    } else {
        "cursor: pointer;"
    };

    view! {
        <TableHeaderCell resizable=false attr:style=style>
            <div
                class="table__sortable-header"
                style=header_style
                on:click=move |_| on_sort.run(sort_field.to_string())
            >
                {label}
                <span class=move || sort.with(|s| get_sort_class(s.as_ref(), sort_field))>
                    {move || sort.with(|s| get_sort_indicator(s.as_ref(), sort_field))}
                </span>
            </div>
        </TableHeaderCell>
    }
}
