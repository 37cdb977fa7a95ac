use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::a004_cohort::aggregate::CohortId;
use crate::domain::a005_student::aggregate::StudentId;
use crate::domain::a007_enquiry::aggregate::EnquiryId;
use crate::domain::common::{record_id, Entity, RecordMetadata};
use crate::shared::enums::labeled_enum;
use crate::shared::filter::{push_opt, ListFilter};
use crate::shared::form::{
    format_date, optional_date, optional_text, text, FieldDef, FieldKind, FormModel, FormValues,
    ValidationRules,
};
use crate::shared::list::{SortDirection, SortState};
use crate::system::permissions::Module;

record_id! {
    /// Уникальный идентификатор зачисления
    EnrollmentId
}

labeled_enum! {
    EnrollmentStatus {
        Pending => ("PENDING", "Pending", Warning),
        Active => ("ACTIVE", "Active", Success),
        Completed => ("COMPLETED", "Completed", Informative),
        Dropped => ("DROPPED", "Dropped", Danger),
    }
}

/// Зачисление студента в когорту
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    pub id: EnrollmentId,
    pub student_id: StudentId,
    #[serde(default)]
    pub student_name: Option<String>,
    pub cohort_id: CohortId,
    #[serde(default)]
    pub cohort_name: Option<String>,
    /// Обращение, из которого создано зачисление
    #[serde(default)]
    pub enquiry_id: Option<EnquiryId>,
    #[serde(default)]
    pub enrolled_on: Option<NaiveDate>,
    #[serde(default)]
    pub status: EnrollmentStatus,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(flatten)]
    pub metadata: RecordMetadata,
}

impl Entity for Enrollment {
    type Id = EnrollmentId;
    type Filter = EnrollmentFilter;
    type Form = EnrollmentDto;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn description(&self) -> String {
        let student = self.student_name.as_deref().unwrap_or(self.student_id.0.as_str());
        let cohort = self.cohort_name.as_deref().unwrap_or(self.cohort_id.0.as_str());
        format!("{} → {}", student, cohort)
    }

    fn aggregate_index() -> &'static str {
        "a006"
    }

    fn collection_name() -> &'static str {
        "enrollment"
    }

    fn module() -> Module {
        Module::Enrollments
    }

    fn element_name() -> &'static str {
        "Enrollment"
    }

    fn list_name() -> &'static str {
        "Enrollments"
    }

    fn default_sort() -> Option<SortState> {
        Some(SortState {
            field: "enrolledOn".to_string(),
            direction: SortDirection::Desc,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnrollmentFilter {
    pub status: Option<EnrollmentStatus>,
    pub cohort_id: Option<CohortId>,
}

impl ListFilter for EnrollmentFilter {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push_opt(&mut pairs, "status", self.status.map(|s| s.code()));
        push_opt(
            &mut pairs,
            "cohortId",
            self.cohort_id.as_ref().map(|id| id.0.as_str()),
        );
        pairs
    }
}

/// DTO для создания/обновления зачисления
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentDto {
    pub student_id: StudentId,
    pub cohort_id: CohortId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enquiry_id: Option<EnquiryId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrolled_on: Option<NaiveDate>,
    pub status: EnrollmentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Form key that carries the source enquiry when converting.
pub const ENQUIRY_FIELD: &str = "enquiry_id";

const FIELDS: &[FieldDef] = &[
    FieldDef::new("student_id", "Student", FieldKind::Reference(Module::Students)).required(),
    FieldDef::new("cohort_id", "Cohort", FieldKind::Reference(Module::Cohorts)).required(),
    FieldDef::new(ENQUIRY_FIELD, "From enquiry", FieldKind::Reference(Module::Enquiries)),
    FieldDef::new("enrolled_on", "Enrolled on", FieldKind::Date),
    FieldDef::new("status", "Status", FieldKind::Select(EnrollmentStatus::OPTIONS)).required(),
    FieldDef::new("notes", "Notes", FieldKind::TextArea)
        .rules(ValidationRules::none().max_length(2000)),
];

impl FormModel for EnrollmentDto {
    fn fields() -> &'static [FieldDef] {
        FIELDS
    }

    fn to_values(&self) -> FormValues {
        let mut values = FormValues::new();
        values.insert("student_id".into(), self.student_id.0.clone());
        values.insert("cohort_id".into(), self.cohort_id.0.clone());
        values.insert(
            ENQUIRY_FIELD.into(),
            self.enquiry_id.as_ref().map(|id| id.0.clone()).unwrap_or_default(),
        );
        values.insert("enrolled_on".into(), format_date(self.enrolled_on));
        values.insert("status".into(), self.status.code().to_string());
        values.insert("notes".into(), self.notes.clone().unwrap_or_default());
        values
    }

    fn from_values(values: &FormValues) -> Self {
        Self {
            student_id: StudentId::new(text(values, "student_id")),
            cohort_id: CohortId::new(text(values, "cohort_id")),
            enquiry_id: optional_text(values, ENQUIRY_FIELD).map(EnquiryId::new),
            enrolled_on: optional_date(values, "enrolled_on"),
            status: EnrollmentStatus::from_code(&text(values, "status")).unwrap_or_default(),
            notes: optional_text(values, "notes"),
        }
    }
}

impl From<&Enrollment> for EnrollmentDto {
    fn from(record: &Enrollment) -> Self {
        Self {
            student_id: record.student_id.clone(),
            cohort_id: record.cohort_id.clone(),
            enquiry_id: record.enquiry_id.clone(),
            enrolled_on: record.enrolled_on,
            status: record.status,
            notes: record.notes.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_enquiry_seed_is_sent() {
        let mut values = EnrollmentDto::default_values();
        values.insert(ENQUIRY_FIELD.into(), "enq-42".into());
        values.insert("student_id".into(), "s-1".into());
        values.insert("cohort_id".into(), "c-1".into());
        let body = serde_json::to_value(EnrollmentDto::parse(&values).unwrap()).unwrap();
        assert_eq!(
            body,
            json!({
                "studentId": "s-1",
                "cohortId": "c-1",
                "enquiryId": "enq-42",
                "status": "PENDING"
            })
        );
    }

    #[test]
    fn test_description_falls_back_to_ids() {
        let enrollment: Enrollment = serde_json::from_value(json!({
            "id": "e-1", "studentId": "s-1", "cohortId": "c-1", "cohortName": "DS-A"
        }))
        .unwrap();
        assert_eq!(enrollment.description(), "s-1 → DS-A");
        assert_eq!(enrollment.status, EnrollmentStatus::Pending);
    }
}
