use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::{record_id, Entity};
use crate::shared::enums::labeled_enum;
use crate::shared::filter::{push_opt, ListFilter};
use crate::shared::form::{text, FieldDef, FieldKind, FormModel, FormValues};
use crate::shared::list::{SortDirection, SortState};
use crate::system::permissions::Module;

record_id! {
    /// Уникальный идентификатор записи журнала аудита
    AuditLogId
}

labeled_enum! {
    /// Действие, зафиксированное в журнале
    AuditAction {
        Create => ("CREATE", "Create", Success),
        Update => ("UPDATE", "Update", Informative),
        Delete => ("DELETE", "Delete", Danger),
        Login => ("LOGIN", "Login", Subtle),
        Logout => ("LOGOUT", "Logout", Subtle),
        Export => ("EXPORT", "Export", Warning),
    }
}

/// Запись журнала аудита (только чтение)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLog {
    pub id: AuditLogId,
    /// Пользователь, выполнивший действие
    pub actor: String,
    /// Raw action code; codes unknown to this client are still listed.
    pub action: String,
    pub module: String,
    #[serde(default)]
    pub record_id: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl AuditLog {
    pub fn action_kind(&self) -> Option<AuditAction> {
        AuditAction::from_code(&self.action)
    }

    pub fn module_label(&self) -> &str {
        Module::from_code(&self.module)
            .map(|m| m.label())
            .unwrap_or(self.module.as_str())
    }
}

impl Entity for AuditLog {
    type Id = AuditLogId;
    type Filter = AuditLogFilter;
    type Form = AuditLogView;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn description(&self) -> String {
        format!("{} {} {}", self.actor, self.action, self.module)
    }

    fn aggregate_index() -> &'static str {
        "a009"
    }

    fn collection_name() -> &'static str {
        "audit_log"
    }

    fn module() -> Module {
        Module::AuditLogs
    }

    fn element_name() -> &'static str {
        "Audit log entry"
    }

    fn list_name() -> &'static str {
        "Audit logs"
    }

    fn is_read_only() -> bool {
        true
    }

    fn default_sort() -> Option<SortState> {
        Some(SortState {
            field: "createdAt".to_string(),
            direction: SortDirection::Desc,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuditLogFilter {
    pub module: Option<Module>,
    pub action: Option<AuditAction>,
}

impl ListFilter for AuditLogFilter {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push_opt(&mut pairs, "module", self.module.map(|m| m.as_str()));
        push_opt(&mut pairs, "action", self.action.map(|a| a.code()));
        pairs
    }
}

/// Представление записи журнала для формы просмотра; никогда не отправляется
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AuditLogView {
    pub actor: String,
    pub action: String,
    pub module: String,
    pub record_id: String,
    pub details: String,
    pub created_at: String,
}

const FIELDS: &[FieldDef] = &[
    FieldDef::new("created_at", "Timestamp", FieldKind::Text),
    FieldDef::new("actor", "Actor", FieldKind::Text),
    FieldDef::new("action", "Action", FieldKind::Text),
    FieldDef::new("module", "Module", FieldKind::Text),
    FieldDef::new("record_id", "Record", FieldKind::Text),
    FieldDef::new("details", "Details", FieldKind::TextArea),
];

impl FormModel for AuditLogView {
    fn fields() -> &'static [FieldDef] {
        FIELDS
    }

    fn to_values(&self) -> FormValues {
        let mut values = FormValues::new();
        values.insert("created_at".into(), self.created_at.clone());
        values.insert("actor".into(), self.actor.clone());
        values.insert("action".into(), self.action.clone());
        values.insert("module".into(), self.module.clone());
        values.insert("record_id".into(), self.record_id.clone());
        values.insert("details".into(), self.details.clone());
        values
    }

    fn from_values(values: &FormValues) -> Self {
        Self {
            actor: text(values, "actor"),
            action: text(values, "action"),
            module: text(values, "module"),
            record_id: text(values, "record_id"),
            details: text(values, "details"),
            created_at: text(values, "created_at"),
        }
    }
}

impl From<&AuditLog> for AuditLogView {
    fn from(record: &AuditLog) -> Self {
        Self {
            actor: record.actor.clone(),
            action: record
                .action_kind()
                .map(|a| a.label().to_string())
                .unwrap_or_else(|| record.action.clone()),
            module: record.module_label().to_string(),
            record_id: record.record_id.clone().unwrap_or_default(),
            details: record.details.clone().unwrap_or_default(),
            created_at: record.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unknown_action_is_kept() {
        let entry: AuditLog = serde_json::from_value(json!({
            "id": "log-1",
            "actor": "admin",
            "action": "PASSWORD_RESET",
            "module": "students",
            "createdAt": "2024-03-15T08:30:00Z"
        }))
        .unwrap();
        assert_eq!(entry.action_kind(), None);
        let view = AuditLogView::from(&entry);
        assert_eq!(view.action, "PASSWORD_RESET");
        assert_eq!(view.module, "Students");
        assert_eq!(view.created_at, "2024-03-15 08:30:00");
        assert!(AuditLog::is_read_only());
    }

    #[test]
    fn test_filter_pairs() {
        let filter = AuditLogFilter {
            module: Some(Module::AuditLogs),
            action: Some(AuditAction::Delete),
        };
        assert_eq!(
            filter.query_pairs(),
            vec![
                ("module", "audit-logs".to_string()),
                ("action", "DELETE".to_string()),
            ]
        );
    }
}
