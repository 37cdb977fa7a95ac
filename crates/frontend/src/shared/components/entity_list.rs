//! Generic list page: header toolbar, search and filters, the table with
//! its row menus, pagination, and the modals for editing and deleting.

use contracts::domain::common::Entity;
use contracts::shared::form::FormValues;
use contracts::system::permissions::ActionKind;
use leptos::prelude::*;
use std::sync::Arc;
use thaw::*;

use super::column::ColumnDef;
use super::confirm_dialog::ConfirmDialog;
use super::data_table::{DataTable, RowRenderer};
use super::entity_form::EntityForm;
use super::pagination_controls::{page_links_for, PaginationControls};
use super::row_actions::{toolbar_actions, visible_actions, CustomAction, RowAction, RowActionMenu};
use crate::shared::clipboard::copy_to_clipboard_with_callback;
use crate::shared::config::app_config;
use crate::shared::date_utils::today_iso;
use crate::shared::export::export_to_csv;
use crate::shared::icons::icon;
use crate::shared::list_state::{FormState, ListHandle};
use crate::shared::list_utils::SearchInput;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST, PAGE_CAT_USECASE};
use crate::system::permissions::use_module_permissions;

/// Entity-specific row actions, computed per record.
pub type CustomActions<E> = fn(&E) -> Vec<CustomAction>;

fn no_custom_actions<E>(_: &E) -> Vec<CustomAction> {
    Vec::new()
}

/// Список записей сущности `E`
///
/// `handle` is created by the caller so that the filter bar passed as
/// `children` can drive the same query. With `initial_create` the create
/// modal opens on mount pre-filled with those values.
#[component]
pub fn EntityListPage<E>(
    handle: ListHandle<E>,
    columns: Vec<ColumnDef<E>>,
    #[prop(optional)] custom_actions: Option<CustomActions<E>>,
    #[prop(optional)] on_custom_action: Option<Callback<(&'static str, E)>>,
    #[prop(optional)] initial_create: Option<FormValues>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView
where
    E: Entity,
{
    let notifications = handle.notifications();
    let permissions = use_module_permissions(E::module());
    let form = RwSignal::new(FormState::<E>::new());
    let toolbar = Memo::new(move |_| permissions.with(|p| toolbar_actions::<E>(p)));
    let custom_actions = custom_actions.unwrap_or(no_custom_actions::<E>);

    let category = if initial_create.is_some() {
        PAGE_CAT_USECASE
    } else {
        PAGE_CAT_LIST
    };
    if let Some(seed) = initial_create {
        form.update(|f| f.open(None, false, seed));
    }
    handle.fetch();

    let open_record = move |record: &E, read_only: bool| {
        form.update(|f| f.open(Some(record), read_only, FormValues::new()));
    };

    let run_action = move |action: RowAction, record: E| match action {
        RowAction::View => open_record(&record, true),
        RowAction::Edit => open_record(&record, false),
        RowAction::Delete => handle.request_delete(record),
        RowAction::CopyId | RowAction::CopyCode | RowAction::CopyEmail => {
            let Some(text) = action.copy_text(&record) else {
                return;
            };
            let message = format!("Copied: {}", text);
            copy_to_clipboard_with_callback(&text, move |copied| {
                if copied {
                    notifications.info(message);
                } else {
                    notifications.error("Could not copy to clipboard");
                }
            });
        }
        RowAction::Custom(custom) => match on_custom_action {
            Some(callback) => callback.run((custom.key, record)),
            None => log::warn!("{}: no handler for action '{}'", E::full_name(), custom.key),
        },
    };

    let row_actions: RowRenderer<E> = Arc::new(move |record: &E| {
        let actions = permissions.with(|p| visible_actions(record, p, &custom_actions(record)));
        let record = record.clone();
        let on_action: Arc<dyn Fn(RowAction) + Send + Sync> =
            Arc::new(move |action| run_action(action, record.clone()));
        view! { <RowActionMenu actions=actions on_action=on_action /> }.into_any()
    });

    let on_row_click = Callback::new(move |record: E| {
        if permissions.with_untracked(|p| p.allows(ActionKind::Read)) {
            open_record(&record, true);
        }
    });

    let columns = StoredValue::new(columns);
    let handle_export = move |_: leptos::ev::MouseEvent| {
        let rows = handle.with_untracked(|s| s.result().items.clone());
        let filename = format!("{}_{}.csv", E::full_name(), today_iso());
        match columns.with_value(|cols| export_to_csv(cols, &rows, &filename)) {
            Ok(()) => notifications.success(format!("Exported {} rows", rows.len())),
            Err(e) => notifications.error(e),
        }
    };

    let deletion = handle.deletion();
    let delete_message = Signal::derive(move || {
        deletion.with(|d| {
            d.pending()
                .map(|record| {
                    format!(
                        "Delete {} \"{}\"? This cannot be undone.",
                        E::element_name().to_lowercase(),
                        record.description()
                    )
                })
                .unwrap_or_default()
        })
    });

    let result = Signal::derive(move || handle.result());

    view! {
        <PageFrame page_id=format!("{}--{}", E::full_name(), category) category=category>
            <div class="page__header">
                <div class="page__header-left">
                    {icon(E::module().as_str())}
                    <h1 class="page__title">{E::list_name()}</h1>
                    <Badge appearance=BadgeAppearance::Tint>
                        {move || result.with(|r| r.total.to_string())}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Show when=move || toolbar.get().create>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| form.update(|f| f.open(None, false, FormValues::new()))
                        >
                            {icon("plus")}
                            {format!("New {}", E::element_name())}
                        </Button>
                    </Show>
                    <Show when=move || toolbar.get().export>
                        <Button appearance=ButtonAppearance::Secondary on_click=handle_export>
                            {icon("download")}
                            "Export"
                        </Button>
                    </Show>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| handle.reload()
                        disabled=Signal::derive(move || handle.is_loading())
                    >
                        {icon("refresh")}
                        "Refresh"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="filter-bar">
                    <SearchInput
                        value=handle.search_text()
                        on_input=Callback::new(move |text: String| handle.input_search(text))
                        on_clear=Callback::new(move |_: ()| handle.clear_search())
                        placeholder=format!("Search {}...", E::list_name().to_lowercase())
                    />
                    {children.map(|children| children())}
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| handle.reset_filters()
                    >
                        "Reset"
                    </Button>
                </div>

                <DataTable
                    columns=columns.get_value()
                    items=Signal::derive(move || handle.items())
                    sort=Signal::derive(move || handle.sort())
                    on_sort=Callback::new(move |field: String| handle.toggle_sort(&field))
                    loading=Signal::derive(move || handle.is_loading())
                    selected=Signal::derive(move || handle.with(|s| s.selection().clone()))
                    on_select=Callback::new(move |(key, on): (String, bool)| handle.set_selected(key, on))
                    on_select_all=Callback::new(move |on: bool| handle.set_all_selected(on))
                    row_actions=row_actions
                    on_row_click=on_row_click
                />

                <PaginationControls
                    current_page=Signal::derive(move || result.with(|r| r.page))
                    total_pages=Signal::derive(move || result.with(|r| r.total_pages()))
                    summary=Signal::derive(move || result.with(|r| r.summary()))
                    page_links=Signal::derive(move || result.with(|r| page_links_for(r)))
                    page_size=Signal::derive(move || result.with(|r| r.page_size))
                    on_page_change=Callback::new(move |page: usize| handle.set_page(page))
                    on_page_size_change=Callback::new(move |size: usize| handle.set_page_size(size))
                    page_size_options=app_config().page_size_options.clone()
                />
            </div>

            <ConfirmDialog
                open=Signal::derive(move || deletion.with(|d| d.is_open()))
                title=format!("Delete {}", E::element_name())
                message=delete_message
                busy=Signal::derive(move || deletion.with(|d| d.is_deleting()))
                on_confirm=Callback::new(move |_: ()| handle.confirm_delete())
                on_cancel=Callback::new(move |_: ()| handle.cancel_delete())
            />

            <EntityForm form=form on_success=Callback::new(move |_: ()| handle.reload()) />
        </PageFrame>
    }
}
