//! PageFrame: root wrapper for every page rendered inside a tab.
//!
//! Sets two attributes on the root element:
//!   - `id`                  `"{entity}--{category}"`, e.g. `"a001_organization--list"`
//!   - `data-page-category`  one of the `PAGE_CAT_*` constants

use leptos::prelude::*;

/// Список записей одной сущности
pub const PAGE_CAT_LIST: &str = "list";
/// Сценарий поверх списка (например, оформление зачисления из обращения)
pub const PAGE_CAT_USECASE: &str = "usecase";

#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`
    #[prop(into)]
    page_id: String,
    /// One of the `PAGE_CAT_*` constants
    category: &'static str,
    children: Children,
) -> impl IntoView {
    let class = match category {
        PAGE_CAT_USECASE => "page page--usecase",
        _ => "page",
    };

    view! {
        <div id=page_id class=class data-page-category=category>
            {children()}
        </div>
    }
}
