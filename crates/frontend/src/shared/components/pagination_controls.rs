use contracts::shared::list::PageLink;
use leptos::prelude::*;

use crate::shared::icons::icon;

/// Numbered links shown around the current page.
const MAX_PAGE_LINKS: usize = 7;

/// PaginationControls component - first/prev/pages/next/last, page size and summary
///
/// Pages are 1-based.
#[component]
pub fn PaginationControls(
    /// Current page (1-based)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<usize>,

    /// "Showing X to Y of Z"
    #[prop(into)]
    summary: Signal<String>,

    /// Numbered page links
    #[prop(into)]
    page_links: Signal<Vec<PageLink>>,

    /// Current page size
    #[prop(into)]
    page_size: Signal<usize>,

    /// Callback when page changes
    on_page_change: Callback<usize>,

    /// Callback when page size changes
    on_page_size_change: Callback<usize>,

    /// Available page size options
    page_size_options: Vec<usize>,
) -> impl IntoView {
    let at_first = move || current_page.get() <= 1;
    let at_last = move || current_page.get() >= total_pages.get();

    view! {
        <div class="pagination-controls">
            <span class="pagination-info">{move || summary.get()}</span>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(1)
                disabled=at_first
                title="First page"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(current_page.get().saturating_sub(1).max(1))
                disabled=at_first
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            {move || {
                page_links
                    .get()
                    .into_iter()
                    .map(|link| match link {
                        PageLink::Page(page) => view! {
                            <button
                                class="pagination-btn pagination-btn--page"
                                class:pagination-btn--active=move || current_page.get() == page
                                on:click=move |_| on_page_change.run(page)
                            >
                                {page.to_string()}
                            </button>
                        }
                        .into_any(),
                        PageLink::Gap => view! { <span class="pagination-gap">"…"</span> }.into_any(),
                    })
                    .collect_view()
            }}
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(current_page.get() + 1)
                disabled=at_last
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(total_pages.get().max(1))
                disabled=at_last
                title="Last page"
            >
                {icon("chevrons-right")}
            </button>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse() {
                        on_page_size_change.run(size);
                    }
                }
                prop:value=move || page_size.get().to_string()
            >
                {page_size_options.iter().map(|&size| {
                    view! {
                        <option value={size.to_string()} selected=move || page_size.get() == size>
                            {format!("{} / page", size)}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}

/// Links window used by list pages.
pub fn page_links_for<T>(result: &contracts::shared::list::ListResult<T>) -> Vec<PageLink> {
    result.page_links(MAX_PAGE_LINKS)
}
