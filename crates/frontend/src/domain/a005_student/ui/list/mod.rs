use contracts::domain::a002_center::aggregate::CenterId;
use contracts::domain::a005_student::aggregate::Student;
use contracts::shared::enums::RecordStatus;
use contracts::system::permissions::Module;
use leptos::prelude::*;

use crate::shared::components::reference_select::ReferenceSelect;
use crate::shared::components::{Cell, ColumnDef, EntityListPage, FilterSelect};
use crate::shared::list_state::ListHandle;
use crate::shared::notifications::use_notifications;

fn columns() -> Vec<ColumnDef<Student>> {
    vec![
        ColumnDef::new("lastName", "Name", |s: &Student| Cell::text(s.person_name()))
            .sortable()
            .min_width(180),
        ColumnDef::new("email", "Email", |s: &Student| Cell::opt_text(s.email.as_deref()))
            .sortable(),
        ColumnDef::new("phone", "Phone", |s: &Student| Cell::opt_text(s.phone.as_deref()))
            .width(150),
        ColumnDef::new("dateOfBirth", "Born", |s: &Student| Cell::Date(s.date_of_birth))
            .sortable()
            .width(110),
        ColumnDef::new("centerName", "Center", |s: &Student| {
            Cell::opt_text(s.center_name.as_deref())
        }),
        ColumnDef::new("status", "Status", |s: &Student| {
            Cell::badge(s.status.label(), s.status.tone())
        })
        .sortable()
        .width(110),
        ColumnDef::new("createdAt", "Registered", |s: &Student| {
            Cell::DateTime(s.metadata.created_at)
        })
        .sortable()
        .width(160),
    ]
}

#[component]
pub fn StudentList() -> impl IntoView {
    let handle = ListHandle::<Student>::new(use_notifications());

    let status = Signal::derive(move || {
        handle
            .filter()
            .status
            .map(|s| s.code().to_string())
            .unwrap_or_default()
    });
    let center = Signal::derive(move || {
        handle.filter().center_id.map(|id| id.0).unwrap_or_default()
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
                    module=Module::Centers
                    label="Center"
                    value=center
                    empty_label="All"
                    on_change=Callback::new(move |id: String| {
                        handle.update_filter(|f| {
                            f.center_id = (!id.is_empty()).then(|| CenterId::new(id))
                        })
                    })
                />
            </div>
        </EntityListPage>
    }
}
