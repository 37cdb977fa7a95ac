use contracts::domain::a002_center::aggregate::CenterId;
use contracts::domain::a004_cohort::aggregate::{Cohort, CohortStatus};
use contracts::system::permissions::Module;
use leptos::prelude::*;

use crate::shared::components::reference_select::ReferenceSelect;
use crate::shared::components::{Cell, ColumnDef, EntityListPage, FilterSelect};
use crate::shared::list_state::ListHandle;
use crate::shared::notifications::use_notifications;

fn seats(cohort: &Cohort) -> Cell {
    match (cohort.seats_left(), cohort.capacity) {
        (Some(left), Some(capacity)) => Cell::text(format!("{} / {}", left, capacity)),
        _ => Cell::Empty,
    }
}

fn columns() -> Vec<ColumnDef<Cohort>> {
    vec![
        ColumnDef::new("name", "Name", |c: &Cohort| Cell::text(c.name.clone()))
            .sortable()
            .min_width(160),
        ColumnDef::new("courseName", "Course", |c: &Cohort| {
            Cell::text(c.course_name.clone().unwrap_or_else(|| c.course_id.0.clone()))
        })
        .sortable(),
        ColumnDef::new("centerName", "Center", |c: &Cohort| {
            Cell::text(c.center_name.clone().unwrap_or_else(|| c.center_id.0.clone()))
        })
        .sortable(),
        ColumnDef::new("startDate", "Starts", |c: &Cohort| Cell::Date(c.start_date))
            .sortable()
            .width(110),
        ColumnDef::new("endDate", "Ends", |c: &Cohort| Cell::Date(c.end_date))
            .sortable()
            .width(110),
        ColumnDef::new("seats", "Seats left", seats).width(100),
        ColumnDef::new("status", "Status", |c: &Cohort| {
            Cell::badge(c.status.label(), c.status.tone())
        })
        .sortable()
        .width(120),
    ]
}

#[component]
pub fn CohortList() -> impl IntoView {
    let handle = ListHandle::<Cohort>::new(use_notifications());

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
                options=CohortStatus::OPTIONS
                on_change=Callback::new(move |code: String| {
                    handle.update_filter(|f| f.status = CohortStatus::from_code(&code))
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
