use serde::{Deserialize, Serialize};

use crate::domain::a001_organization::aggregate::OrganizationId;
use crate::domain::common::{record_id, Entity, RecordMetadata};
use crate::shared::enums::RecordStatus;
use crate::shared::filter::{push_opt, ListFilter};
use crate::shared::form::{
    optional_text, text, FieldDef, FieldKind, FormModel, FormValues, ValidationRules,
};
use crate::system::permissions::Module;

record_id! {
    /// Уникальный идентификатор центра
    CenterId
}

/// Учебный центр организации
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Center {
    pub id: CenterId,
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
    pub organization_id: OrganizationId,
    /// Название организации (денормализовано бэкендом для таблицы)
    #[serde(default)]
    pub organization_name: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub status: RecordStatus,
    #[serde(flatten)]
    pub metadata: RecordMetadata,
}

impl Entity for Center {
    type Id = CenterId;
    type Filter = CenterFilter;
    type Form = CenterDto;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn description(&self) -> String {
        match &self.city {
            Some(city) => format!("{} ({})", self.name, city),
            None => self.name.clone(),
        }
    }

    fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "center"
    }

    fn module() -> Module {
        Module::Centers
    }

    fn element_name() -> &'static str {
        "Center"
    }

    fn list_name() -> &'static str {
        "Centers"
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CenterFilter {
    pub status: Option<RecordStatus>,
    pub organization_id: Option<OrganizationId>,
}

impl ListFilter for CenterFilter {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push_opt(&mut pairs, "status", self.status.map(|s| s.code()));
        push_opt(
            &mut pairs,
            "organizationId",
            self.organization_id.as_ref().map(|id| id.0.as_str()),
        );
        pairs
    }
}

/// DTO для создания/обновления центра
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CenterDto {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub organization_id: OrganizationId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub status: RecordStatus,
}

const FIELDS: &[FieldDef] = &[
    FieldDef::new("name", "Name", FieldKind::Text)
        .rules(ValidationRules::required().max_length(200)),
    FieldDef::new("code", "Code", FieldKind::Text).rules(ValidationRules::none().max_length(32)),
    FieldDef::new(
        "organization_id",
        "Organization",
        FieldKind::Reference(Module::Organizations),
    )
    .required(),
    FieldDef::new("city", "City", FieldKind::Text),
    FieldDef::new("address", "Address", FieldKind::TextArea),
    FieldDef::new("phone", "Phone", FieldKind::Phone),
    FieldDef::new("status", "Status", FieldKind::Select(RecordStatus::OPTIONS)).required(),
];

impl FormModel for CenterDto {
    fn fields() -> &'static [FieldDef] {
        FIELDS
    }

    fn to_values(&self) -> FormValues {
        let mut values = FormValues::new();
        values.insert("name".into(), self.name.clone());
        values.insert("code".into(), self.code.clone().unwrap_or_default());
        values.insert("organization_id".into(), self.organization_id.0.clone());
        values.insert("city".into(), self.city.clone().unwrap_or_default());
        values.insert("address".into(), self.address.clone().unwrap_or_default());
        values.insert("phone".into(), self.phone.clone().unwrap_or_default());
        values.insert("status".into(), self.status.code().to_string());
        values
    }

    fn from_values(values: &FormValues) -> Self {
        Self {
            name: text(values, "name"),
            code: optional_text(values, "code"),
            organization_id: OrganizationId::new(text(values, "organization_id")),
            city: optional_text(values, "city"),
            address: optional_text(values, "address"),
            phone: optional_text(values, "phone"),
            status: RecordStatus::from_code(&text(values, "status")).unwrap_or_default(),
        }
    }
}

impl From<&Center> for CenterDto {
    fn from(record: &Center) -> Self {
        Self {
            name: record.name.clone(),
            code: record.code.clone(),
            organization_id: record.organization_id.clone(),
            city: record.city.clone(),
            address: record.address.clone(),
            phone: record.phone.clone(),
            status: record.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::FieldError;

    #[test]
    fn test_organization_is_required() {
        let mut values = CenterDto::default_values();
        values.insert("name".into(), "North campus".into());
        let errors = CenterDto::parse(&values).unwrap_err();
        assert_eq!(errors.get("organization_id"), Some(&FieldError::Required));

        values.insert("organization_id".into(), "org-1".into());
        let dto = CenterDto::parse(&values).unwrap();
        assert_eq!(dto.organization_id, OrganizationId::new("org-1"));
        assert_eq!(dto.status, RecordStatus::Active);
    }

    #[test]
    fn test_filter_uses_camel_case_keys() {
        let filter = CenterFilter {
            status: None,
            organization_id: Some(OrganizationId::new("org-7")),
        };
        assert_eq!(
            filter.query_pairs(),
            vec![("organizationId", "org-7".to_string())]
        );
    }
}
