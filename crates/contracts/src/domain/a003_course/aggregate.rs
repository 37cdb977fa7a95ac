use serde::{Deserialize, Serialize};

use crate::domain::common::{record_id, Entity, RecordMetadata};
use crate::shared::enums::RecordStatus;
use crate::shared::filter::{push_opt, ListFilter};
use crate::shared::form::{
    optional_number, optional_text, text, FieldDef, FieldKind, FormModel, FormValues,
    ValidationRules,
};
use crate::shared::list::SortState;
use crate::system::permissions::Module;

record_id! {
    /// Уникальный идентификатор курса
    CourseId
}

/// Курс (программа обучения)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: CourseId,
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub duration_weeks: Option<u32>,
    #[serde(default)]
    pub fee: Option<f64>,
    #[serde(default)]
    pub status: RecordStatus,
    #[serde(flatten)]
    pub metadata: RecordMetadata,
}

impl Entity for Course {
    type Id = CourseId;
    type Filter = CourseFilter;
    type Form = CourseDto;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn description(&self) -> String {
        self.name.clone()
    }

    fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "course"
    }

    fn module() -> Module {
        Module::Courses
    }

    fn element_name() -> &'static str {
        "Course"
    }

    fn list_name() -> &'static str {
        "Courses"
    }

    fn default_sort() -> Option<SortState> {
        Some(SortState::asc("name"))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseFilter {
    pub status: Option<RecordStatus>,
}

impl ListFilter for CourseFilter {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push_opt(&mut pairs, "status", self.status.map(|s| s.code()));
        pairs
    }
}

/// DTO для создания/обновления курса
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDto {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_weeks: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee: Option<f64>,
    pub status: RecordStatus,
}

const FIELDS: &[FieldDef] = &[
    FieldDef::new("name", "Name", FieldKind::Text)
        .rules(ValidationRules::required().max_length(200)),
    FieldDef::new("code", "Code", FieldKind::Text).rules(ValidationRules::none().max_length(32)),
    FieldDef::new("description", "Description", FieldKind::TextArea)
        .rules(ValidationRules::none().max_length(2000)),
    FieldDef::new("duration_weeks", "Duration (weeks)", FieldKind::Number)
        .rules(ValidationRules::none().range(1.0, 260.0)),
    FieldDef::new("fee", "Fee", FieldKind::Number).rules(ValidationRules::none().at_least(0.0)),
    FieldDef::new("status", "Status", FieldKind::Select(RecordStatus::OPTIONS)).required(),
];

impl FormModel for CourseDto {
    fn fields() -> &'static [FieldDef] {
        FIELDS
    }

    fn to_values(&self) -> FormValues {
        let mut values = FormValues::new();
        values.insert("name".into(), self.name.clone());
        values.insert("code".into(), self.code.clone().unwrap_or_default());
        values.insert("description".into(), self.description.clone().unwrap_or_default());
        values.insert(
            "duration_weeks".into(),
            self.duration_weeks.map(|w| w.to_string()).unwrap_or_default(),
        );
        values.insert(
            "fee".into(),
            self.fee.map(|f| f.to_string()).unwrap_or_default(),
        );
        values.insert("status".into(), self.status.code().to_string());
        values
    }

    fn from_values(values: &FormValues) -> Self {
        Self {
            name: text(values, "name"),
            code: optional_text(values, "code"),
            description: optional_text(values, "description"),
            duration_weeks: optional_number(values, "duration_weeks"),
            fee: optional_number(values, "fee"),
            status: RecordStatus::from_code(&text(values, "status")).unwrap_or_default(),
        }
    }
}

impl From<&Course> for CourseDto {
    fn from(record: &Course) -> Self {
        Self {
            name: record.name.clone(),
            code: record.code.clone(),
            description: record.description.clone(),
            duration_weeks: record.duration_weeks,
            fee: record.fee,
            status: record.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::FieldError;

    #[test]
    fn test_numeric_fields() {
        let mut values = CourseDto::default_values();
        values.insert("name".into(), "Data Science".into());
        values.insert("duration_weeks".into(), "0".into());
        values.insert("fee".into(), "abc".into());
        let errors = CourseDto::parse(&values).unwrap_err();
        assert_eq!(errors.get("duration_weeks"), Some(&FieldError::TooSmall(1.0)));
        assert_eq!(errors.get("fee"), Some(&FieldError::NotANumber));

        values.insert("duration_weeks".into(), "12".into());
        values.insert("fee".into(), "1499.5".into());
        let dto = CourseDto::parse(&values).unwrap();
        assert_eq!(dto.duration_weeks, Some(12));
        assert_eq!(dto.fee, Some(1499.5));
    }
}
