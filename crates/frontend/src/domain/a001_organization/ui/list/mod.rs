use contracts::domain::a001_organization::aggregate::Organization;
use contracts::shared::enums::RecordStatus;
use leptos::prelude::*;

use crate::shared::components::{Cell, ColumnDef, EntityListPage, FilterSelect};
use crate::shared::list_state::ListHandle;
use crate::shared::notifications::use_notifications;

fn columns() -> Vec<ColumnDef<Organization>> {
    vec![
        ColumnDef::new("code", "Code", |o: &Organization| Cell::opt_text(o.code.as_deref()))
            .sortable()
            .width(120),
        ColumnDef::new("name", "Name", |o: &Organization| Cell::text(o.name.clone()))
            .sortable()
            .min_width(200),
        ColumnDef::new("email", "Email", |o: &Organization| Cell::opt_text(o.email.as_deref()))
            .sortable(),
        ColumnDef::new("phone", "Phone", |o: &Organization| Cell::opt_text(o.phone.as_deref()))
            .width(150),
        ColumnDef::new("address", "Address", |o: &Organization| {
            Cell::opt_text(o.address.as_deref())
        })
        .truncate(40),
        ColumnDef::new("status", "Status", |o: &Organization| {
            Cell::badge(o.status.label(), o.status.tone())
        })
        .sortable()
        .width(110),
        ColumnDef::new("createdAt", "Created", |o: &Organization| {
            Cell::DateTime(o.metadata.created_at)
        })
        .sortable()
        .width(160),
    ]
}

#[component]
pub fn OrganizationList() -> impl IntoView {
    let handle = ListHandle::<Organization>::new(use_notifications());

    let status = Signal::derive(move || {
        handle
            .filter()
            .status
            .map(|s| s.code().to_string())
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
        </EntityListPage>
    }
}
