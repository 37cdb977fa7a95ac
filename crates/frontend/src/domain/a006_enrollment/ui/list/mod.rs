use contracts::domain::a004_cohort::aggregate::CohortId;
use contracts::domain::a006_enrollment::aggregate::{Enrollment, EnrollmentStatus, ENQUIRY_FIELD};
use contracts::domain::a007_enquiry::aggregate::EnquiryId;
use contracts::domain::common::RecordId;
use contracts::shared::form::FormValues;
use contracts::system::permissions::Module;
use leptos::prelude::*;

use crate::shared::components::reference_select::ReferenceSelect;
use crate::shared::components::{Cell, ColumnDef, EntityListPage, FilterSelect};
use crate::shared::date_utils::today_iso;
use crate::shared::list_state::ListHandle;
use crate::shared::notifications::use_notifications;

fn columns() -> Vec<ColumnDef<Enrollment>> {
    vec![
        ColumnDef::new("studentName", "Student", |e: &Enrollment| {
            Cell::text(e.student_name.clone().unwrap_or_else(|| e.student_id.0.clone()))
        })
        .sortable()
        .min_width(180),
        ColumnDef::new("cohortName", "Cohort", |e: &Enrollment| {
            Cell::text(e.cohort_name.clone().unwrap_or_else(|| e.cohort_id.0.clone()))
        })
        .sortable(),
        ColumnDef::new("enrolledOn", "Enrolled on", |e: &Enrollment| Cell::Date(e.enrolled_on))
            .sortable()
            .width(120),
        ColumnDef::new("status", "Status", |e: &Enrollment| {
            Cell::badge(e.status.label(), e.status.tone())
        })
        .sortable()
        .width(120),
        ColumnDef::new("notes", "Notes", |e: &Enrollment| Cell::opt_text(e.notes.as_deref()))
            .truncate(40),
    ]
}

/// Values of the create form when an enquiry is converted.
fn seed_from_enquiry(enquiry_id: &EnquiryId, today: String) -> FormValues {
    let mut seed = FormValues::new();
    seed.insert(ENQUIRY_FIELD.to_string(), enquiry_id.as_str().to_string());
    seed.insert("enrolled_on".to_string(), today);
    seed
}

/// Список зачислений
///
/// With `from_enquiry` the create modal opens right away, linked to that enquiry.
#[component]
pub fn EnrollmentList(#[prop(optional)] from_enquiry: Option<EnquiryId>) -> impl IntoView {
    let handle = ListHandle::<Enrollment>::new(use_notifications());
    let initial_create = from_enquiry.map(|id| seed_from_enquiry(&id, today_iso()));

    let status = Signal::derive(move || {
        handle
            .filter()
            .status
            .map(|s| s.code().to_string())
            .unwrap_or_default()
    });
    let cohort = Signal::derive(move || {
        handle.filter().cohort_id.map(|id| id.0).unwrap_or_default()
    });

    let filters = move || {
        view! {
            <FilterSelect
                label="Status"
                value=status
                options=EnrollmentStatus::OPTIONS
                on_change=Callback::new(move |code: String| {
                    handle.update_filter(|f| f.status = EnrollmentStatus::from_code(&code))
                })
            />
            <div class="filter-bar__item">
                <ReferenceSelect
                    module=Module::Cohorts
                    label="Cohort"
                    value=cohort
                    empty_label="All"
                    on_change=Callback::new(move |id: String| {
                        handle.update_filter(|f| {
                            f.cohort_id = (!id.is_empty()).then(|| CohortId::new(id))
                        })
                    })
                />
            </div>
        }
    };

    match initial_create {
        Some(seed) => view! {
            <EntityListPage handle=handle columns=columns() initial_create=seed>
                {filters()}
            </EntityListPage>
        }
        .into_any(),
        None => view! {
            <EntityListPage handle=handle columns=columns()>
                {filters()}
            </EntityListPage>
        }
        .into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a006_enrollment::aggregate::EnrollmentDto;
    use contracts::shared::form::FormModel;

    #[test]
    fn test_seed_links_enquiry() {
        let seed = seed_from_enquiry(&EnquiryId::new("enq-42"), "2024-09-02".to_string());
        let mut values = EnrollmentDto::default_values();
        values.extend(seed);
        values.insert("student_id".into(), "stu-1".into());
        values.insert("cohort_id".into(), "coh-1".into());

        let dto = EnrollmentDto::parse(&values).unwrap();
        assert_eq!(dto.enquiry_id, Some(EnquiryId::new("enq-42")));
        assert_eq!(dto.enrolled_on.map(|d| d.to_string()), Some("2024-09-02".to_string()));
    }
}
