//! Tab content registry - единственный источник правды для маппинга tab.key → View
//!
//! List tabs use the entity's full name as key (`a001_organization`). The
//! enquiry conversion tab carries the enquiry id in its key.

use contracts::domain::a001_organization::aggregate::Organization;
use contracts::domain::a002_center::aggregate::Center;
use contracts::domain::a003_course::aggregate::Course;
use contracts::domain::a004_cohort::aggregate::Cohort;
use contracts::domain::a005_student::aggregate::Student;
use contracts::domain::a006_enrollment::aggregate::Enrollment;
use contracts::domain::a007_enquiry::aggregate::{Enquiry, EnquiryId};
use contracts::domain::a008_feedback::aggregate::Feedback;
use contracts::domain::a009_audit_log::aggregate::AuditLog;
use contracts::domain::common::{Entity, RecordId};
use contracts::system::permissions::Module;
use leptos::prelude::*;

use crate::domain::a001_organization::ui::list::OrganizationList;
use crate::domain::a002_center::ui::list::CenterList;
use crate::domain::a003_course::ui::list::CourseList;
use crate::domain::a004_cohort::ui::list::CohortList;
use crate::domain::a005_student::ui::list::StudentList;
use crate::domain::a006_enrollment::ui::list::EnrollmentList;
use crate::domain::a007_enquiry::ui::list::EnquiryList;
use crate::domain::a008_feedback::ui::list::FeedbackList;
use crate::domain::a009_audit_log::ui::list::AuditLogList;

pub const ENROLLMENT_FROM_ENQUIRY_PREFIX: &str = "a006_enrollment_from_enquiry_";

/// What a tab key points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabRoute {
    List(Module),
    /// Enrollment list with the create modal seeded from an enquiry
    EnrollmentFromEnquiry(EnquiryId),
}

/// Tab key of the list page of `module`.
pub fn list_key(module: Module) -> String {
    match module {
        Module::Organizations => Organization::full_name(),
        Module::Centers => Center::full_name(),
        Module::Courses => Course::full_name(),
        Module::Cohorts => Cohort::full_name(),
        Module::Students => Student::full_name(),
        Module::Enrollments => Enrollment::full_name(),
        Module::Enquiries => Enquiry::full_name(),
        Module::Feedback => Feedback::full_name(),
        Module::AuditLogs => AuditLog::full_name(),
    }
}

impl TabRoute {
    pub fn parse(key: &str) -> Option<Self> {
        if let Some(id) = key.strip_prefix(ENROLLMENT_FROM_ENQUIRY_PREFIX) {
            return (!id.is_empty()).then(|| TabRoute::EnrollmentFromEnquiry(EnquiryId::new(id)));
        }
        Module::ALL
            .into_iter()
            .find(|module| list_key(*module) == key)
            .map(TabRoute::List)
    }

    pub fn key(&self) -> String {
        match self {
            TabRoute::List(module) => list_key(*module),
            TabRoute::EnrollmentFromEnquiry(id) => {
                format!("{}{}", ENROLLMENT_FROM_ENQUIRY_PREFIX, id.as_str())
            }
        }
    }
}

/// Рендерит контент таба по его ключу.
///
/// Unknown keys (a stale `?active=` link, for instance) get a placeholder.
pub fn render_tab_content(key: &str) -> AnyView {
    let Some(route) = TabRoute::parse(key) else {
        log::warn!("unknown tab key: {}", key);
        return view! { <div class="placeholder">"Page not found"</div> }.into_any();
    };

    match route {
        TabRoute::List(module) => match module {
            Module::Organizations => view! { <OrganizationList /> }.into_any(),
            Module::Centers => view! { <CenterList /> }.into_any(),
            Module::Courses => view! { <CourseList /> }.into_any(),
            Module::Cohorts => view! { <CohortList /> }.into_any(),
            Module::Students => view! { <StudentList /> }.into_any(),
            Module::Enrollments => view! { <EnrollmentList /> }.into_any(),
            Module::Enquiries => view! { <EnquiryList /> }.into_any(),
            Module::Feedback => view! { <FeedbackList /> }.into_any(),
            Module::AuditLogs => view! { <AuditLogList /> }.into_any(),
        },
        TabRoute::EnrollmentFromEnquiry(enquiry_id) => {
            view! { <EnrollmentList from_enquiry=enquiry_id /> }.into_any()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_keys_round_trip() {
        for module in Module::ALL {
            let route = TabRoute::List(module);
            assert_eq!(TabRoute::parse(&route.key()), Some(route));
        }
        assert_eq!(list_key(Module::Organizations), "a001_organization");
        assert_eq!(list_key(Module::Students), "a005_student");
        assert_eq!(list_key(Module::AuditLogs), "a009_audit_log");
    }

    #[test]
    fn test_enrollment_from_enquiry_key() {
        let route = TabRoute::parse("a006_enrollment_from_enquiry_enq-42");
        assert_eq!(
            route,
            Some(TabRoute::EnrollmentFromEnquiry(EnquiryId::new("enq-42")))
        );
        assert_eq!(
            route.map(|r| r.key()),
            Some("a006_enrollment_from_enquiry_enq-42".to_string())
        );
        assert_eq!(TabRoute::parse("a006_enrollment_from_enquiry_"), None);
    }

    #[test]
    fn test_unknown_key() {
        assert_eq!(TabRoute::parse("d400_monthly_summary"), None);
        assert_eq!(
            TabRoute::parse("a006_enrollment"),
            Some(TabRoute::List(Module::Enrollments))
        );
    }
}
