use contracts::domain::a001_organization::aggregate::OrganizationId;
use contracts::domain::a002_center::aggregate::Center;
use contracts::shared::enums::RecordStatus;
use contracts::system::permissions::Module;
use leptos::prelude::*;

use crate::shared::components::reference_select::ReferenceSelect;
use crate::shared::components::{Cell, ColumnDef, EntityListPage, FilterSelect};
use crate::shared::list_state::ListHandle;
use crate::shared::notifications::use_notifications;

fn columns() -> Vec<ColumnDef<Center>> {
    vec![
        ColumnDef::new("code", "Code", |c: &Center| Cell::opt_text(c.code.as_deref()))
            .sortable()
            .width(110),
        ColumnDef::new("name", "Name", |c: &Center| Cell::text(c.name.clone()))
            .sortable()
            .min_width(180),
        ColumnDef::new("organizationName", "Organization", |c: &Center| {
            Cell::text(
                c.organization_name
                    .clone()
                    .unwrap_or_else(|| c.organization_id.0.clone()),
            )
        })
        .sortable(),
        ColumnDef::new("city", "City", |c: &Center| Cell::opt_text(c.city.as_deref()))
            .sortable()
            .width(140),
        ColumnDef::new("phone", "Phone", |c: &Center| Cell::opt_text(c.phone.as_deref()))
            .width(150),
        ColumnDef::new("status", "Status", |c: &Center| {
            Cell::badge(c.status.label(), c.status.tone())
        })
        .sortable()
        .width(110),
    ]
}

#[component]
pub fn CenterList() -> impl IntoView {
    let handle = ListHandle::<Center>::new(use_notifications());

    let status = Signal::derive(move || {
        handle
            .filter()
            .status
            .map(|s| s.code().to_string())
            .unwrap_or_default()
    });
    let organization = Signal::derive(move || {
        handle
            .filter()
            .organization_id
            .map(|id| id.0)
            .unwrap_or_default()
    });

    view! {
        <EntityListPage handle=handle columns=columns()>
            <FilterSelect
                label="Status"
                value=status
                options=RecordStatus::OPTIONS
                on_change=Callback::new(move |code: String| {
                    handle.update_filter(|f| f.status = RecordStatus::from_code(&code))
                })
            />
            <div class="filter-bar__item">
                <ReferenceSelect
                    module=Module::Organizations
                    label="Organization"
                    value=organization
                    empty_label="All"
                    on_change=Callback::new(move |id: String| {
                        handle.update_filter(|f| {
                            f.organization_id = (!id.is_empty()).then(|| OrganizationId::new(id))
                        })
                    })
                />
            </div>
        </EntityListPage>
    }
}
