use contracts::domain::a003_course::aggregate::Course;
use contracts::shared::enums::RecordStatus;
use leptos::prelude::*;

use crate::shared::components::{Cell, ColumnDef, EntityListPage, FilterSelect};
use crate::shared::list_state::ListHandle;
use crate::shared::notifications::use_notifications;

fn columns() -> Vec<ColumnDef<Course>> {
    vec![
        ColumnDef::new("code", "Code", |c: &Course| Cell::opt_text(c.code.as_deref()))
            .sortable()
            .width(110),
        ColumnDef::new("name", "Name", |c: &Course| Cell::text(c.name.clone()))
            .sortable()
            .min_width(200),
        ColumnDef::new("description", "Description", |c: &Course| {
            Cell::opt_text(c.description.as_deref())
        })
        .truncate(60),
        ColumnDef::new("durationWeeks", "Weeks", |c: &Course| {
            Cell::Number(c.duration_weeks.map(f64::from))
        })
        .sortable()
        .width(90),
        ColumnDef::new("fee", "Fee", |c: &Course| Cell::Number(c.fee))
            .sortable()
            .width(110),
        ColumnDef::new("status", "Status", |c: &Course| {
            Cell::badge(c.status.label(), c.status.tone())
        })
        .sortable()
        .width(110),
    ]
}

#[component]
pub fn CourseList() -> impl IntoView {
    let handle = ListHandle::<Course>::new(use_notifications());

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
