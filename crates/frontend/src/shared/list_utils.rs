/// Утилиты для списков: индикаторы сортировки и поле поиска
use contracts::shared::list::{SortDirection, SortState};
use leptos::prelude::*;

use crate::shared::icons::icon;

/// Получить индикатор сортировки для заголовка
pub fn get_sort_indicator(sort: Option<&SortState>, field: &str) -> &'static str {
    match sort {
        Some(s) if s.field == field => match s.direction {
            SortDirection::Asc => " ▲",
            SortDirection::Desc => " ▼",
        },
        _ => " ⇅",
    }
}

/// CSS-класс индикатора: активная колонка подсвечивается
pub fn get_sort_class(sort: Option<&SortState>, field: &str) -> &'static str {
    match sort {
        Some(s) if s.field == field => "table__sort-indicator table__sort-indicator--active",
        _ => "table__sort-indicator",
    }
}

/// Поле поиска с кнопкой очистки
///
/// Debounce выполняет владелец списка: компонент только сообщает о вводе.
#[component]
pub fn SearchInput(
    /// Текст в поле
    #[prop(into)]
    value: Signal<String>,
    /// Каждое нажатие клавиши
    #[prop(into)]
    on_input: Callback<String>,
    /// Кнопка очистки
    #[prop(into)]
    on_clear: Callback<()>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    let is_active = move || value.with(|v| !v.trim().is_empty());

    view! {
        <div class="search-input">
            <span class="search-input__icon">{icon("search")}</span>
            <input
                type="text"
                class="search-input__field"
                class:search-input__field--active=is_active
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <Show when=is_active>
                <button
                    class="search-input__clear"
                    title="Clear"
                    on:click=move |_| on_clear.run(())
                >
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_indicator() {
        let sort = SortState::asc("name");
        assert_eq!(get_sort_indicator(Some(&sort), "name"), " ▲");
        assert_eq!(get_sort_indicator(Some(&sort), "code"), " ⇅");
        assert_eq!(get_sort_indicator(None, "name"), " ⇅");

        let desc = SortState::toggle(Some(&sort), "name");
        assert_eq!(get_sort_indicator(Some(&desc), "name"), " ▼");
        assert!(get_sort_class(Some(&desc), "name").ends_with("--active"));
        assert_eq!(get_sort_class(None, "name"), "table__sort-indicator");
    }
}
