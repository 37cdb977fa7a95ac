use leptos::prelude::*;

use super::ui::Select;

/// Select of the filter bar; the empty option ("All") clears the filter.
#[component]
pub fn FilterSelect(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    options: &'static [(&'static str, &'static str)],
    on_change: Callback<String>,
) -> impl IntoView {
    let options: Vec<(String, String)> = options
        .iter()
        .map(|(code, label)| (code.to_string(), label.to_string()))
        .collect();

    view! {
        <div class="filter-bar__item">
            <Select
                label=label
                value=value
                options=Signal::stored(options)
                empty_label="All"
                on_change=on_change
            />
        </div>
    }
}
