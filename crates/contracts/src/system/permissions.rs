//! Role-based action permissions, resolved per `(role, module)`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ActionKind {
    Create,
    Read,
    Update,
    Delete,
    Export,
}

impl ActionKind {
    pub const ALL: [ActionKind; 5] = [
        ActionKind::Create,
        ActionKind::Read,
        ActionKind::Update,
        ActionKind::Delete,
        ActionKind::Export,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::Create => "CREATE",
            ActionKind::Read => "READ",
            ActionKind::Update => "UPDATE",
            ActionKind::Delete => "DELETE",
            ActionKind::Export => "EXPORT",
        }
    }

    /// Case-insensitive; unknown actions are ignored by the caller.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|a| a.as_str().eq_ignore_ascii_case(code.trim()))
    }
}

/// Permission-system name of an entity type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Module {
    Organizations,
    Centers,
    Courses,
    Cohorts,
    Students,
    Enrollments,
    Enquiries,
    Feedback,
    AuditLogs,
}

impl Module {
    pub const ALL: [Module; 9] = [
        Module::Organizations,
        Module::Centers,
        Module::Courses,
        Module::Cohorts,
        Module::Students,
        Module::Enrollments,
        Module::Enquiries,
        Module::Feedback,
        Module::AuditLogs,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Module::Organizations => "organizations",
            Module::Centers => "centers",
            Module::Courses => "courses",
            Module::Cohorts => "cohorts",
            Module::Students => "students",
            Module::Enrollments => "enrollments",
            Module::Enquiries => "enquiries",
            Module::Feedback => "feedback",
            Module::AuditLogs => "audit-logs",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Module::Organizations => "Organizations",
            Module::Centers => "Centers",
            Module::Courses => "Courses",
            Module::Cohorts => "Cohorts",
            Module::Students => "Students",
            Module::Enrollments => "Enrollments",
            Module::Enquiries => "Enquiries",
            Module::Feedback => "Feedback",
            Module::AuditLogs => "Audit logs",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == code)
    }

    pub const OPTIONS: &'static [(&'static str, &'static str)] = &[
        ("organizations", "Organizations"),
        ("centers", "Centers"),
        ("courses", "Courses"),
        ("cohorts", "Cohorts"),
        ("students", "Students"),
        ("enrollments", "Enrollments"),
        ("enquiries", "Enquiries"),
        ("feedback", "Feedback"),
        ("audit-logs", "Audit logs"),
    ];
}

/// Role name as issued by the backend (e.g. `SUPER_ADMIN`, `COUNSELOR`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(String);

impl Role {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Allowed actions of one role on one module.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionSet(BTreeSet<ActionKind>);

impl PermissionSet {
    /// Nothing allowed: the state before permissions are known or after a failed lookup.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn allows(&self, action: ActionKind) -> bool {
        self.0.contains(&action)
    }

    pub fn actions(&self) -> impl Iterator<Item = ActionKind> + '_ {
        self.0.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<ActionKind> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = ActionKind>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// `data` of `GET /roles/{role}/actions?module=…`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PermissionPayload {
    #[serde(default)]
    pub actions: Vec<String>,
}

impl PermissionPayload {
    pub fn into_set(self) -> PermissionSet {
        self.actions
            .iter()
            .filter_map(|a| ActionKind::from_code(a))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::ApiResponse;
    use serde_json::json;

    #[test]
    fn test_permission_payload_ignores_unknown_actions() {
        let raw = json!({
            "success": true,
            "data": { "actions": ["READ", "update", "ARCHIVE", "DELETE"] }
        });
        let response: ApiResponse<PermissionPayload> = serde_json::from_value(raw).unwrap();
        let set = response.into_data().unwrap().into_set();
        assert!(set.allows(ActionKind::Read));
        assert!(set.allows(ActionKind::Update));
        assert!(set.allows(ActionKind::Delete));
        assert!(!set.allows(ActionKind::Create));
        assert_eq!(set.actions().count(), 3);
    }

    #[test]
    fn test_module_codes_round_trip() {
        for module in Module::ALL {
            assert_eq!(Module::from_code(module.as_str()), Some(module));
        }
        assert_eq!(
            serde_json::to_string(&Module::AuditLogs).unwrap(),
            "\"audit-logs\""
        );
    }

    #[test]
    fn test_empty_set_denies_everything() {
        let set = PermissionSet::none();
        assert!(ActionKind::ALL.iter().all(|a| !set.allows(*a)));
    }
}
