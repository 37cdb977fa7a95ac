use contracts::domain::a007_enquiry::aggregate::{Enquiry, EnquirySource, EnquiryStatus};
use contracts::domain::common::Entity;
use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{detail_tab_label, TabRoute};
use crate::shared::components::row_actions::CustomAction;
use crate::shared::components::{Cell, ColumnDef, EntityListPage, FilterSelect};
use crate::shared::list_state::ListHandle;
use crate::shared::notifications::use_notifications;

pub const CONVERT_ACTION: CustomAction = CustomAction {
    key: "convert",
    label: "Convert to enrollment",
    icon: "user-plus",
};

fn enquiry_actions(enquiry: &Enquiry) -> Vec<CustomAction> {
    if enquiry.can_convert() {
        vec![CONVERT_ACTION]
    } else {
        Vec::new()
    }
}

fn columns() -> Vec<ColumnDef<Enquiry>> {
    vec![
        ColumnDef::new("fullName", "Name", |e: &Enquiry| Cell::text(e.full_name.clone()))
            .sortable()
            .min_width(180),
        ColumnDef::new("email", "Email", |e: &Enquiry| Cell::opt_text(e.email.as_deref()))
            .sortable(),
        ColumnDef::new("phone", "Phone", |e: &Enquiry| Cell::opt_text(e.phone.as_deref()))
            .width(150),
        ColumnDef::new("courseName", "Course", |e: &Enquiry| {
            Cell::opt_text(e.course_name.as_deref())
        }),
        ColumnDef::new("source", "Source", |e: &Enquiry| {
            Cell::badge(e.source.label(), e.source.tone())
        })
        .sortable()
        .width(120),
        ColumnDef::new("status", "Status", |e: &Enquiry| {
            Cell::badge(e.status.label(), e.status.tone())
        })
        .sortable()
        .width(120),
        ColumnDef::new("createdAt", "Received", |e: &Enquiry| {
            Cell::DateTime(e.metadata.created_at)
        })
        .sortable()
        .width(160),
    ]
}

#[component]
pub fn EnquiryList() -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let handle = ListHandle::<Enquiry>::new(use_notifications());

    let on_custom_action = Callback::new(move |(key, enquiry): (&'static str, Enquiry)| {
        if key != CONVERT_ACTION.key {
            return;
        }
        let route = TabRoute::EnrollmentFromEnquiry(enquiry.id.clone());
        let title = detail_tab_label("New enrollment", &enquiry.description());
        log::debug!("{}: converting {}", Enquiry::full_name(), enquiry.id.0);
        tabs_store.open_tab(&route.key(), &title);
    });

    let status = Signal::derive(move || {
        handle
            .filter()
            .status
            .map(|s| s.code().to_string())
            .unwrap_or_default()
    });
    let source = Signal::derive(move || {
        handle
            .filter()
            .source
            .map(|s| s.code().to_string())
            .unwrap_or_default()
    });

    view! {
        <EntityListPage
            handle=handle
            columns=columns()
            custom_actions=enquiry_actions
            on_custom_action=on_custom_action
        >
            <FilterSelect
                label="Status"
                value=status
                options=EnquiryStatus::OPTIONS
                on_change=Callback::new(move |code: String| {
                    handle.update_filter(|f| f.status = EnquiryStatus::from_code(&code))
                })
            />
            <FilterSelect
                label="Source"
                value=source
                options=EnquirySource::OPTIONS
                on_change=Callback::new(move |code: String| {
                    handle.update_filter(|f| f.source = EnquirySource::from_code(&code))
                })
            />
        </EntityListPage>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn enquiry(status: &str) -> Enquiry {
        serde_json::from_value(json!({
            "id": "enq-1",
            "fullName": "Mira Patel",
            "status": status,
            "source": "WEBSITE"
        }))
        .unwrap()
    }

    #[test]
    fn test_convert_offered_only_for_open_enquiries() {
        assert_eq!(enquiry_actions(&enquiry("INTERESTED")), vec![CONVERT_ACTION]);
        assert!(enquiry_actions(&enquiry("CONVERTED")).is_empty());
        assert!(enquiry_actions(&enquiry("CLOSED")).is_empty());
    }
}
