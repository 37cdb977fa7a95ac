use serde::{Deserialize, Serialize};

use crate::domain::common::{record_id, Entity, RecordMetadata};
use crate::shared::enums::RecordStatus;
use crate::shared::filter::{push_opt, ListFilter};
use crate::shared::form::{
    optional_text, text, FieldDef, FieldKind, FormModel, FormValues, ValidationRules,
};
use crate::shared::list::SortState;
use crate::system::permissions::Module;

// ============================================================================
// ID Type
// ============================================================================

record_id! {
    /// Уникальный идентификатор организации
    OrganizationId
}

// ============================================================================
// Record
// ============================================================================

/// Организация: верхний уровень иерархии (организация → центры → когорты)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub id: OrganizationId,
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub status: RecordStatus,
    #[serde(flatten)]
    pub metadata: RecordMetadata,
}

impl Entity for Organization {
    type Id = OrganizationId;
    type Filter = OrganizationFilter;
    type Form = OrganizationDto;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn description(&self) -> String {
        self.name.clone()
    }

    fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "organization"
    }

    fn module() -> Module {
        Module::Organizations
    }

    fn element_name() -> &'static str {
        "Organization"
    }

    fn list_name() -> &'static str {
        "Organizations"
    }

    fn default_sort() -> Option<SortState> {
        Some(SortState::asc("name"))
    }
}

// ============================================================================
// Filter
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrganizationFilter {
    pub status: Option<RecordStatus>,
}

impl ListFilter for OrganizationFilter {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push_opt(&mut pairs, "status", self.status.map(|s| s.code()));
        pairs
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания/обновления организации
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationDto {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub status: RecordStatus,
}

const FIELDS: &[FieldDef] = &[
    FieldDef::new("name", "Name", FieldKind::Text)
        .rules(ValidationRules::required().max_length(200)),
    FieldDef::new("code", "Code", FieldKind::Text)
        .rules(ValidationRules::none().max_length(32))
        .placeholder("e.g. ORG-001"),
    FieldDef::new("email", "Email", FieldKind::Email),
    FieldDef::new("phone", "Phone", FieldKind::Phone),
    FieldDef::new("address", "Address", FieldKind::TextArea),
    FieldDef::new("status", "Status", FieldKind::Select(RecordStatus::OPTIONS)).required(),
];

impl FormModel for OrganizationDto {
    fn fields() -> &'static [FieldDef] {
        FIELDS
    }

    fn to_values(&self) -> FormValues {
        let mut values = FormValues::new();
        values.insert("name".into(), self.name.clone());
        values.insert("code".into(), self.code.clone().unwrap_or_default());
        values.insert("email".into(), self.email.clone().unwrap_or_default());
        values.insert("phone".into(), self.phone.clone().unwrap_or_default());
        values.insert("address".into(), self.address.clone().unwrap_or_default());
        values.insert("status".into(), self.status.code().to_string());
        values
    }

    fn from_values(values: &FormValues) -> Self {
        Self {
            name: text(values, "name"),
            code: optional_text(values, "code"),
            email: optional_text(values, "email"),
            phone: optional_text(values, "phone"),
            address: optional_text(values, "address"),
            status: RecordStatus::from_code(&text(values, "status")).unwrap_or_default(),
        }
    }
}

impl From<&Organization> for OrganizationDto {
    fn from(record: &Organization) -> Self {
        Self {
            name: record.name.clone(),
            code: record.code.clone(),
            email: record.email.clone(),
            phone: record.phone.clone(),
            address: record.address.clone(),
            status: record.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::FieldError;
    use serde_json::json;

    fn acme() -> Organization {
        serde_json::from_value(json!({
            "id": "org-1",
            "name": "Acme",
            "status": "ACTIVE",
            "createdAt": "2024-01-05T10:00:00Z"
        }))
        .unwrap()
    }

    #[test]
    fn test_decode_record() {
        let org = acme();
        assert_eq!(org.id, OrganizationId::new("org-1"));
        assert_eq!(org.status, RecordStatus::Active);
        assert!(org.metadata.created_at.is_some());
        assert!(org.metadata.updated_at.is_none());
        assert_eq!(Organization::full_name(), "a001_organization");
        assert_eq!(Organization::api_path(), "organizations");
    }

    #[test]
    fn test_blank_name_is_required() {
        let mut values = OrganizationDto::from(&acme()).to_values();
        values.insert("name".into(), String::new());
        let errors = OrganizationDto::parse(&values).unwrap_err();
        assert_eq!(errors.get("name"), Some(&FieldError::Required));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_blank_optionals_are_omitted() {
        let values = OrganizationDto::from(&acme()).to_values();
        let dto = OrganizationDto::parse(&values).unwrap();
        let body = serde_json::to_value(&dto).unwrap();
        assert_eq!(body, json!({ "name": "Acme", "status": "ACTIVE" }));
    }

    #[test]
    fn test_filter_pairs() {
        assert!(OrganizationFilter::default().is_empty());
        let filter = OrganizationFilter {
            status: Some(RecordStatus::Inactive),
        };
        assert_eq!(filter.query_pairs(), vec![("status", "INACTIVE".to_string())]);
    }
}
