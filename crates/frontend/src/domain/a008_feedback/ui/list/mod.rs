use contracts::domain::a003_course::aggregate::CourseId;
use contracts::domain::a008_feedback::aggregate::{Feedback, RATING_OPTIONS};
use contracts::system::permissions::Module;
use leptos::prelude::*;

use crate::shared::components::reference_select::ReferenceSelect;
use crate::shared::components::{Cell, ColumnDef, EntityListPage, FilterSelect};
use crate::shared::list_state::ListHandle;
use crate::shared::notifications::use_notifications;

fn columns() -> Vec<ColumnDef<Feedback>> {
    vec![
        ColumnDef::new("studentName", "Student", |f: &Feedback| {
            Cell::text(f.student_name.clone().unwrap_or_else(|| f.student_id.0.clone()))
        })
        .sortable()
        .min_width(160),
        ColumnDef::new("courseName", "Course", |f: &Feedback| {
            Cell::text(f.course_name.clone().unwrap_or_else(|| f.course_id.0.clone()))
        })
        .sortable(),
        ColumnDef::new("rating", "Rating", |f: &Feedback| Cell::text(f.stars()))
            .sortable()
            .width(120),
        ColumnDef::new("comment", "Comment", |f: &Feedback| {
            Cell::opt_text(f.comment.as_deref())
        })
        .truncate(60),
        ColumnDef::new("createdAt", "Submitted", |f: &Feedback| {
            Cell::DateTime(f.metadata.created_at)
        })
        .sortable()
        .width(160),
    ]
}

#[component]
pub fn FeedbackList() -> impl IntoView {
    let handle = ListHandle::<Feedback>::new(use_notifications());

    let rating = Signal::derive(move || {
        handle
            .filter()
            .rating
            .map(|r| r.to_string())
            .unwrap_or_default()
    });
    let course = Signal::derive(move || {
        handle.filter().course_id.map(|id| id.0).unwrap_or_default()
    });

    view! {
        <EntityListPage handle=handle columns=columns()>
            <FilterSelect
                label="Rating"
                value=rating
                options=RATING_OPTIONS
                on_change=Callback::new(move |code: String| {
                    handle.update_filter(|f| f.rating = code.parse().ok())
                })
            />
            <div class="filter-bar__item">
                <ReferenceSelect
                    module=Module::Courses
                    label="Course"
                    value=course
                    empty_label="All"
                    on_change=Callback::new(move |id: String| {
                        handle.update_filter(|f| {
                            f.course_id = (!id.is_empty()).then(|| CourseId::new(id))
                        })
                    })
                />
            </div>
        </EntityListPage>
    }
}
