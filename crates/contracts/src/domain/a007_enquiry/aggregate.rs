use serde::{Deserialize, Serialize};

use crate::domain::a003_course::aggregate::CourseId;
use crate::domain::common::{record_id, Entity, RecordMetadata};
use crate::shared::enums::labeled_enum;
use crate::shared::filter::{push_opt, ListFilter};
use crate::shared::form::{
    optional_text, text, FieldDef, FieldError, FieldErrors, FieldKind, FormModel, FormValues,
    ValidationRules,
};
use crate::shared::list::{SortDirection, SortState};
use crate::system::permissions::Module;

record_id! {
    /// Уникальный идентификатор обращения
    EnquiryId
}

labeled_enum! {
    /// Канал, через который пришло обращение
    EnquirySource {
        WalkIn => ("WALK_IN", "Walk-in", Subtle),
        Website => ("WEBSITE", "Website", Informative),
        Phone => ("PHONE", "Phone", Informative),
        Referral => ("REFERRAL", "Referral", Success),
        SocialMedia => ("SOCIAL_MEDIA", "Social media", Informative),
    }
}

labeled_enum! {
    /// Статус обработки обращения
    EnquiryStatus {
        New => ("NEW", "New", Informative),
        Contacted => ("CONTACTED", "Contacted", Warning),
        Interested => ("INTERESTED", "Interested", Success),
        Converted => ("CONVERTED", "Converted", Success),
        Closed => ("CLOSED", "Closed", Subtle),
    }
}

/// Обращение потенциального студента
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enquiry {
    pub id: EnquiryId,
    pub full_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub course_id: Option<CourseId>,
    #[serde(default)]
    pub course_name: Option<String>,
    #[serde(default)]
    pub source: EnquirySource,
    #[serde(default)]
    pub status: EnquiryStatus,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(flatten)]
    pub metadata: RecordMetadata,
}

impl Enquiry {
    /// Converted or closed enquiries cannot be turned into an enrollment again.
    pub fn can_convert(&self) -> bool {
        !matches!(self.status, EnquiryStatus::Converted | EnquiryStatus::Closed)
    }
}

impl Entity for Enquiry {
    type Id = EnquiryId;
    type Filter = EnquiryFilter;
    type Form = EnquiryDto;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn description(&self) -> String {
        self.full_name.clone()
    }

    fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    fn aggregate_index() -> &'static str {
        "a007"
    }

    fn collection_name() -> &'static str {
        "enquiry"
    }

    fn module() -> Module {
        Module::Enquiries
    }

    fn element_name() -> &'static str {
        "Enquiry"
    }

    fn list_name() -> &'static str {
        "Enquiries"
    }

    fn default_sort() -> Option<SortState> {
        Some(SortState {
            field: "createdAt".to_string(),
            direction: SortDirection::Desc,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnquiryFilter {
    pub status: Option<EnquiryStatus>,
    pub source: Option<EnquirySource>,
}

impl ListFilter for EnquiryFilter {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push_opt(&mut pairs, "status", self.status.map(|s| s.code()));
        push_opt(&mut pairs, "source", self.source.map(|s| s.code()));
        pairs
    }
}

/// DTO для создания/обновления обращения
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnquiryDto {
    pub full_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_id: Option<CourseId>,
    pub source: EnquirySource,
    pub status: EnquiryStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

const FIELDS: &[FieldDef] = &[
    FieldDef::new("full_name", "Full name", FieldKind::Text)
        .rules(ValidationRules::required().max_length(200)),
    FieldDef::new("email", "Email", FieldKind::Email),
    FieldDef::new("phone", "Phone", FieldKind::Phone),
    FieldDef::new("course_id", "Course of interest", FieldKind::Reference(Module::Courses)),
    FieldDef::new("source", "Source", FieldKind::Select(EnquirySource::OPTIONS)).required(),
    FieldDef::new("status", "Status", FieldKind::Select(EnquiryStatus::OPTIONS)).required(),
    FieldDef::new("notes", "Notes", FieldKind::TextArea)
        .rules(ValidationRules::none().max_length(2000)),
];

impl FormModel for EnquiryDto {
    fn fields() -> &'static [FieldDef] {
        FIELDS
    }

    fn to_values(&self) -> FormValues {
        let mut values = FormValues::new();
        values.insert("full_name".into(), self.full_name.clone());
        values.insert("email".into(), self.email.clone().unwrap_or_default());
        values.insert("phone".into(), self.phone.clone().unwrap_or_default());
        values.insert(
            "course_id".into(),
            self.course_id.as_ref().map(|id| id.0.clone()).unwrap_or_default(),
        );
        values.insert("source".into(), self.source.code().to_string());
        values.insert("status".into(), self.status.code().to_string());
        values.insert("notes".into(), self.notes.clone().unwrap_or_default());
        values
    }

    fn from_values(values: &FormValues) -> Self {
        Self {
            full_name: text(values, "full_name"),
            email: optional_text(values, "email"),
            phone: optional_text(values, "phone"),
            course_id: optional_text(values, "course_id").map(CourseId::new),
            source: EnquirySource::from_code(&text(values, "source")).unwrap_or_default(),
            status: EnquiryStatus::from_code(&text(values, "status")).unwrap_or_default(),
            notes: optional_text(values, "notes"),
        }
    }

    fn cross_validate(values: &FormValues, errors: &mut FieldErrors) {
        if optional_text(values, "email").is_none() && optional_text(values, "phone").is_none() {
            errors.insert(
                "phone",
                FieldError::Custom("email or phone is required".to_string()),
            );
        }
    }
}

impl From<&Enquiry> for EnquiryDto {
    fn from(record: &Enquiry) -> Self {
        Self {
            full_name: record.full_name.clone(),
            email: record.email.clone(),
            phone: record.phone.clone(),
            course_id: record.course_id.clone(),
            source: record.source,
            status: record.status,
            notes: record.notes.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_is_required() {
        let mut values = EnquiryDto::default_values();
        values.insert("full_name".into(), "Grace Hopper".into());
        let errors = EnquiryDto::parse(&values).unwrap_err();
        assert!(matches!(errors.get("phone"), Some(FieldError::Custom(_))));

        values.insert("email".into(), "grace@navy.mil".into());
        let dto = EnquiryDto::parse(&values).unwrap();
        assert_eq!(dto.source, EnquirySource::WalkIn);
        assert_eq!(dto.status, EnquiryStatus::New);
    }

    #[test]
    fn test_filter_pairs() {
        let filter = EnquiryFilter {
            status: Some(EnquiryStatus::Contacted),
            source: Some(EnquirySource::SocialMedia),
        };
        assert_eq!(
            filter.query_pairs(),
            vec![
                ("status", "CONTACTED".to_string()),
                ("source", "SOCIAL_MEDIA".to_string()),
            ]
        );
    }
}
