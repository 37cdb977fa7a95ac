//! Create/edit/view modal driven by the form schema of an entity.

use contracts::domain::common::Entity;
use contracts::shared::form::{FieldDef, FieldKind, FormModel};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance};

use super::reference_select::ReferenceSelect;
use super::ui::{Input, Select, Textarea};
use crate::shared::api;
use crate::shared::list_state::{FormState, Submission};
use crate::shared::modal::Modal;
use crate::shared::notifications::use_notifications;

fn input_type(kind: &FieldKind) -> &'static str {
    match kind {
        FieldKind::Email => "email",
        FieldKind::Phone => "tel",
        FieldKind::Number => "number",
        FieldKind::Date => "date",
        _ => "text",
    }
}

fn render_field<E: Entity>(field: &'static FieldDef, form: RwSignal<FormState<E>>) -> AnyView {
    let key = field.key;
    let value = Signal::derive(move || form.with(|f| f.value(key)));
    let error = Signal::derive(move || form.with(|f| f.errors().get(key).map(|e| e.to_string())));
    let disabled =
        Signal::derive(move || form.with(|f| !f.mode().is_editable() || f.is_submitting()));
    let on_input = Callback::new(move |v: String| form.update(|f| f.set_value(key, v)));
    let required = field.rules.required;
    let id = format!("{}-{}", E::collection_name(), key);

    match field.kind {
        FieldKind::TextArea => view! {
            <Textarea
                id=id
                label=field.label.to_string()
                value=value
                on_input=on_input
                placeholder=field.placeholder.unwrap_or_default().to_string()
                disabled=disabled
                required=required
                error=error
            />
        }
        .into_any(),
        FieldKind::Select(options) => {
            let options: Vec<(String, String)> = options
                .iter()
                .map(|(code, label)| (code.to_string(), label.to_string()))
                .collect();
            view! {
                <Select
                    id=id
                    label=field.label.to_string()
                    value=value
                    on_change=on_input
                    options=options
                    empty_label=if required { "Select..." } else { "(none)" }
                    disabled=disabled
                    required=required
                    error=error
                />
            }
            .into_any()
        }
        FieldKind::Reference(module) => view! {
            <ReferenceSelect
                module=module
                label=field.label
                value=value
                on_change=on_input
                disabled=disabled
                required=required
                error=error
            />
        }
        .into_any(),
        ref kind => view! {
            <Input
                id=id
                label=field.label.to_string()
                input_type=input_type(kind)
                value=value
                on_input=on_input
                placeholder=field.placeholder.unwrap_or_default().to_string()
                disabled=disabled
                required=required
                error=error
            />
        }
        .into_any(),
    }
}

/// Modal for one record.
///
/// A successful save calls `on_success` (the list refetches) and closes the
/// modal; a failed save keeps it open with the entered values.
#[component]
pub fn EntityForm<E>(form: RwSignal<FormState<E>>, on_success: Callback<()>) -> impl IntoView
where
    E: Entity,
{
    let notifications = use_notifications();

    let submit = move || {
        let Some(Some(submission)) = form.try_update(|f| f.submit()) else {
            return;
        };
        spawn_local(async move {
            let (result, verb) = match &submission {
                Submission::Create(body) => (api::create::<E>(body).await, "created"),
                Submission::Update { id, body } => (api::update::<E>(id, body).await, "saved"),
            };
            match result {
                Ok(_) => {
                    notifications.success(format!("{} {}", E::element_name(), verb));
                    on_success.run(());
                    let _ = form.try_update(|f| f.submit_succeeded());
                }
                Err(e) => {
                    notifications.error(e.user_message());
                    let _ = form.try_update(|f| f.submit_failed());
                }
            }
        });
    };

    let close = Callback::new(move |_: ()| form.update(|f| f.close()));
    let title = Signal::derive(move || form.with(|f| f.title()));
    let editable = move || form.with(|f| f.mode().is_editable());
    let submitting = Signal::derive(move || form.with(|f| f.is_submitting()));

    view! {
        <Show when=move || form.with(|f| f.is_open())>
            <Modal
                title=title
                on_close=close
                footer=move || view! {
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| close.run(())>
                        {move || if editable() { "Cancel" } else { "Close" }}
                    </Button>
                    <Show when=editable>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| submit()
                            disabled=submitting
                        >
                            {move || if submitting.get() { "Saving..." } else { "Save" }}
                        </Button>
                    </Show>
                }
            >
                <form
                    class="entity-form"
                    on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        submit();
                    }
                >
                    {E::Form::fields()
                        .iter()
                        .map(|field| render_field(field, form))
                        .collect_view()}
                </form>
            </Modal>
        </Show>
    }
}
