use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::a002_center::aggregate::CenterId;
use crate::domain::common::{record_id, Entity, RecordMetadata};
use crate::shared::enums::RecordStatus;
use crate::shared::filter::{push_opt, ListFilter};
use crate::shared::form::{
    format_date, optional_date, optional_text, text, FieldDef, FieldKind, FormModel, FormValues,
    ValidationRules,
};
use crate::shared::list::SortState;
use crate::system::permissions::Module;

record_id! {
    /// Уникальный идентификатор студента
    StudentId
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: StudentId,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub center_id: Option<CenterId>,
    #[serde(default)]
    pub center_name: Option<String>,
    #[serde(default)]
    pub status: RecordStatus,
    #[serde(flatten)]
    pub metadata: RecordMetadata,
}

impl Student {
    pub fn person_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }
}

impl Entity for Student {
    type Id = StudentId;
    type Filter = StudentFilter;
    type Form = StudentDto;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn description(&self) -> String {
        self.person_name()
    }

    fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    fn aggregate_index() -> &'static str {
        "a005"
    }

    fn collection_name() -> &'static str {
        "student"
    }

    fn module() -> Module {
        Module::Students
    }

    fn element_name() -> &'static str {
        "Student"
    }

    fn list_name() -> &'static str {
        "Students"
    }

    fn default_sort() -> Option<SortState> {
        Some(SortState::asc("lastName"))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentFilter {
    pub status: Option<RecordStatus>,
    pub center_id: Option<CenterId>,
}

impl ListFilter for StudentFilter {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push_opt(&mut pairs, "status", self.status.map(|s| s.code()));
        push_opt(
            &mut pairs,
            "centerId",
            self.center_id.as_ref().map(|id| id.0.as_str()),
        );
        pairs
    }
}

/// DTO для создания/обновления студента
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentDto {
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub center_id: Option<CenterId>,
    pub status: RecordStatus,
}

const FIELDS: &[FieldDef] = &[
    FieldDef::new("first_name", "First name", FieldKind::Text)
        .rules(ValidationRules::required().max_length(100)),
    FieldDef::new("last_name", "Last name", FieldKind::Text)
        .rules(ValidationRules::required().max_length(100)),
    FieldDef::new("email", "Email", FieldKind::Email),
    FieldDef::new("phone", "Phone", FieldKind::Phone),
    FieldDef::new("date_of_birth", "Date of birth", FieldKind::Date),
    FieldDef::new("center_id", "Center", FieldKind::Reference(Module::Centers)),
    FieldDef::new("status", "Status", FieldKind::Select(RecordStatus::OPTIONS)).required(),
];

impl FormModel for StudentDto {
    fn fields() -> &'static [FieldDef] {
        FIELDS
    }

    fn to_values(&self) -> FormValues {
        let mut values = FormValues::new();
        values.insert("first_name".into(), self.first_name.clone());
        values.insert("last_name".into(), self.last_name.clone());
        values.insert("email".into(), self.email.clone().unwrap_or_default());
        values.insert("phone".into(), self.phone.clone().unwrap_or_default());
        values.insert("date_of_birth".into(), format_date(self.date_of_birth));
        values.insert(
            "center_id".into(),
            self.center_id.as_ref().map(|id| id.0.clone()).unwrap_or_default(),
        );
        values.insert("status".into(), self.status.code().to_string());
        values
    }

    fn from_values(values: &FormValues) -> Self {
        Self {
            first_name: text(values, "first_name"),
            last_name: text(values, "last_name"),
            email: optional_text(values, "email"),
            phone: optional_text(values, "phone"),
            date_of_birth: optional_date(values, "date_of_birth"),
            center_id: optional_text(values, "center_id").map(CenterId::new),
            status: RecordStatus::from_code(&text(values, "status")).unwrap_or_default(),
        }
    }
}

impl From<&Student> for StudentDto {
    fn from(record: &Student) -> Self {
        Self {
            first_name: record.first_name.clone(),
            last_name: record.last_name.clone(),
            email: record.email.clone(),
            phone: record.phone.clone(),
            date_of_birth: record.date_of_birth,
            center_id: record.center_id.clone(),
            status: record.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_person_name_and_form_round_trip() {
        let student: Student = serde_json::from_value(json!({
            "id": "s-1",
            "firstName": "Ada",
            "lastName": "Lovelace",
            "dateOfBirth": "1999-12-10",
            "centerId": "center-2",
            "status": "ACTIVE"
        }))
        .unwrap();
        assert_eq!(student.description(), "Ada Lovelace");
        assert_eq!(Student::full_name(), "a005_student");

        let values = StudentDto::from(&student).to_values();
        assert_eq!(values.get("date_of_birth").map(String::as_str), Some("1999-12-10"));
        assert_eq!(StudentDto::parse(&values).unwrap(), StudentDto::from(&student));
    }
}
