use contracts::system::permissions::Module;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::ui::Select;
use crate::shared::api::fetch_reference_options;
use crate::shared::notifications::use_notifications;

/// Select over the records of another module, loaded once on mount.
#[component]
pub fn ReferenceSelect(
    module: Module,
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    #[prop(optional, into)] disabled: Signal<bool>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] error: Signal<Option<String>>,
    /// Overrides the label of the empty option
    #[prop(optional, into)]
    empty_label: Option<String>,
) -> impl IntoView {
    let notifications = use_notifications();
    let loaded = RwSignal::new(Vec::<(String, String)>::new());
    let loading = RwSignal::new(true);

    spawn_local(async move {
        match fetch_reference_options(module).await {
            Ok(options) => {
                let _ = loaded.try_set(options);
            }
            Err(e) => notifications.error(format!(
                "Could not load {}: {}",
                module.label(),
                e.user_message()
            )),
        }
        let _ = loading.try_set(false);
    });

    // The current value stays selectable even when it is not on the first page.
    let options = Signal::derive(move || {
        let mut options = loaded.get();
        let current = value.get();
        if !current.is_empty() && !options.iter().any(|(id, _)| *id == current) {
            options.insert(0, (current.clone(), current));
        }
        options
    });

    let empty_label = empty_label
        .unwrap_or_else(|| if required { "Select..." } else { "(none)" }.to_string());

    view! {
        <Select
            label=label
            value=value
            on_change=on_change
            options=options
            empty_label=empty_label
            disabled=Signal::derive(move || disabled.get() || loading.get())
            required=required
            error=error
        />
    }
}
