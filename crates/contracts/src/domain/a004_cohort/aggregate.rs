use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::a002_center::aggregate::CenterId;
use crate::domain::a003_course::aggregate::CourseId;
use crate::domain::common::{record_id, Entity, RecordMetadata};
use crate::shared::enums::labeled_enum;
use crate::shared::filter::{push_opt, ListFilter};
use crate::shared::form::{
    format_date, optional_date, optional_number, text, FieldDef, FieldError, FieldErrors,
    FieldKind, FormModel, FormValues, ValidationRules,
};
use crate::shared::list::{SortDirection, SortState};
use crate::system::permissions::Module;

record_id! {
    /// Уникальный идентификатор когорты (учебной группы)
    CohortId
}

labeled_enum! {
    /// Жизненный цикл когорты
    CohortStatus {
        Planned => ("PLANNED", "Planned", Informative),
        Ongoing => ("ONGOING", "Ongoing", Success),
        Completed => ("COMPLETED", "Completed", Subtle),
        Cancelled => ("CANCELLED", "Cancelled", Danger),
    }
}

/// Когорта: набор студентов курса в конкретном центре
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cohort {
    pub id: CohortId,
    pub name: String,
    pub course_id: CourseId,
    #[serde(default)]
    pub course_name: Option<String>,
    pub center_id: CenterId,
    #[serde(default)]
    pub center_name: Option<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub capacity: Option<u32>,
    #[serde(default)]
    pub enrolled_count: u32,
    #[serde(default)]
    pub status: CohortStatus,
    #[serde(flatten)]
    pub metadata: RecordMetadata,
}

impl Cohort {
    /// Свободные места; `None`, если вместимость не задана
    pub fn seats_left(&self) -> Option<u32> {
        self.capacity
            .map(|capacity| capacity.saturating_sub(self.enrolled_count))
    }
}

impl Entity for Cohort {
    type Id = CohortId;
    type Filter = CohortFilter;
    type Form = CohortDto;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn description(&self) -> String {
        self.name.clone()
    }

    fn aggregate_index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "cohort"
    }

    fn module() -> Module {
        Module::Cohorts
    }

    fn element_name() -> &'static str {
        "Cohort"
    }

    fn list_name() -> &'static str {
        "Cohorts"
    }

    fn default_sort() -> Option<SortState> {
        Some(SortState {
            field: "startDate".to_string(),
            direction: SortDirection::Desc,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CohortFilter {
    pub status: Option<CohortStatus>,
    pub center_id: Option<CenterId>,
}

impl ListFilter for CohortFilter {
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

/// DTO для создания/обновления когорты
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CohortDto {
    pub name: String,
    pub course_id: CourseId,
    pub center_id: CenterId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
    pub status: CohortStatus,
}

const FIELDS: &[FieldDef] = &[
    FieldDef::new("name", "Name", FieldKind::Text)
        .rules(ValidationRules::required().max_length(120)),
    FieldDef::new("course_id", "Course", FieldKind::Reference(Module::Courses)).required(),
    FieldDef::new("center_id", "Center", FieldKind::Reference(Module::Centers)).required(),
    FieldDef::new("start_date", "Start date", FieldKind::Date),
    FieldDef::new("end_date", "End date", FieldKind::Date),
    FieldDef::new("capacity", "Capacity", FieldKind::Number)
        .rules(ValidationRules::none().range(1.0, 1000.0)),
    FieldDef::new("status", "Status", FieldKind::Select(CohortStatus::OPTIONS)).required(),
];

impl FormModel for CohortDto {
    fn fields() -> &'static [FieldDef] {
        FIELDS
    }

    fn to_values(&self) -> FormValues {
        let mut values = FormValues::new();
        values.insert("name".into(), self.name.clone());
        values.insert("course_id".into(), self.course_id.0.clone());
        values.insert("center_id".into(), self.center_id.0.clone());
        values.insert("start_date".into(), format_date(self.start_date));
        values.insert("end_date".into(), format_date(self.end_date));
        values.insert(
            "capacity".into(),
            self.capacity.map(|c| c.to_string()).unwrap_or_default(),
        );
        values.insert("status".into(), self.status.code().to_string());
        values
    }

    fn from_values(values: &FormValues) -> Self {
        Self {
            name: text(values, "name"),
            course_id: CourseId::new(text(values, "course_id")),
            center_id: CenterId::new(text(values, "center_id")),
            start_date: optional_date(values, "start_date"),
            end_date: optional_date(values, "end_date"),
            capacity: optional_number(values, "capacity"),
            status: CohortStatus::from_code(&text(values, "status")).unwrap_or_default(),
        }
    }

    fn cross_validate(values: &FormValues, errors: &mut FieldErrors) {
        if let (Some(start), Some(end)) = (
            optional_date(values, "start_date"),
            optional_date(values, "end_date"),
        ) {
            if end < start {
                errors.insert(
                    "end_date",
                    FieldError::Custom("must not be before the start date".to_string()),
                );
            }
        }
    }
}

impl From<&Cohort> for CohortDto {
    fn from(record: &Cohort) -> Self {
        Self {
            name: record.name.clone(),
            course_id: record.course_id.clone(),
            center_id: record.center_id.clone(),
            start_date: record.start_date,
            end_date: record.end_date,
            capacity: record.capacity,
            status: record.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn values() -> FormValues {
        let mut values = CohortDto::default_values();
        values.insert("name".into(), "DS-2024-A".into());
        values.insert("course_id".into(), "course-1".into());
        values.insert("center_id".into(), "center-1".into());
        values
    }

    #[test]
    fn test_end_before_start_is_rejected() {
        let mut values = values();
        values.insert("start_date".into(), "2024-09-01".into());
        values.insert("end_date".into(), "2024-08-01".into());
        let errors = CohortDto::parse(&values).unwrap_err();
        assert!(matches!(errors.get("end_date"), Some(FieldError::Custom(_))));

        values.insert("end_date".into(), "2024-12-20".into());
        let dto = CohortDto::parse(&values).unwrap();
        assert_eq!(dto.end_date, NaiveDate::from_ymd_opt(2024, 12, 20));
    }

    #[test]
    fn test_dates_serialize_as_iso() {
        let mut values = values();
        values.insert("start_date".into(), "2024-09-01".into());
        let body = serde_json::to_value(CohortDto::parse(&values).unwrap()).unwrap();
        assert_eq!(
            body,
            json!({
                "name": "DS-2024-A",
                "courseId": "course-1",
                "centerId": "center-1",
                "startDate": "2024-09-01",
                "status": "PLANNED"
            })
        );
    }

    #[test]
    fn test_seats_left() {
        let cohort: Cohort = serde_json::from_value(json!({
            "id": "c1", "name": "A", "courseId": "x", "centerId": "y",
            "capacity": 20, "enrolledCount": 23, "status": "ONGOING"
        }))
        .unwrap();
        assert_eq!(cohort.seats_left(), Some(0));
        assert_eq!(cohort.status.tone(), crate::shared::enums::StatusTone::Success);
    }
}
