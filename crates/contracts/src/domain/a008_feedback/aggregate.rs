use serde::{Deserialize, Serialize};

use crate::domain::a003_course::aggregate::CourseId;
use crate::domain::a005_student::aggregate::StudentId;
use crate::domain::common::{record_id, Entity, RecordMetadata};
use crate::shared::filter::{push_opt, ListFilter};
use crate::shared::form::{
    optional_number, optional_text, text, FieldDef, FieldKind, FormModel, FormValues,
    ValidationRules,
};
use crate::shared::list::{SortDirection, SortState};
use crate::system::permissions::Module;

record_id! {
    /// Уникальный идентификатор отзыва
    FeedbackId
}

pub const MAX_RATING: u8 = 5;

/// `(code, label)` options of the rating select and filter
pub const RATING_OPTIONS: &[(&str, &str)] = &[
    ("5", "★★★★★"),
    ("4", "★★★★"),
    ("3", "★★★"),
    ("2", "★★"),
    ("1", "★"),
];

/// Отзыв студента о курсе
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub id: FeedbackId,
    pub student_id: StudentId,
    #[serde(default)]
    pub student_name: Option<String>,
    pub course_id: CourseId,
    #[serde(default)]
    pub course_name: Option<String>,
    pub rating: u8,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(flatten)]
    pub metadata: RecordMetadata,
}

impl Feedback {
    pub fn stars(&self) -> String {
        let filled = self.rating.min(MAX_RATING) as usize;
        format!(
            "{}{}",
            "★".repeat(filled),
            "☆".repeat(MAX_RATING as usize - filled)
        )
    }
}

impl Entity for Feedback {
    type Id = FeedbackId;
    type Filter = FeedbackFilter;
    type Form = FeedbackDto;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn description(&self) -> String {
        let course = self.course_name.as_deref().unwrap_or(self.course_id.0.as_str());
        format!("{}/{} for {}", self.rating, MAX_RATING, course)
    }

    fn aggregate_index() -> &'static str {
        "a008"
    }

    fn collection_name() -> &'static str {
        "feedback"
    }

    fn module() -> Module {
        Module::Feedback
    }

    fn element_name() -> &'static str {
        "Feedback"
    }

    fn list_name() -> &'static str {
        "Feedback"
    }

    fn default_sort() -> Option<SortState> {
        Some(SortState {
            field: "createdAt".to_string(),
            direction: SortDirection::Desc,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedbackFilter {
    pub rating: Option<u8>,
    pub course_id: Option<CourseId>,
}

impl ListFilter for FeedbackFilter {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(rating) = self.rating {
            pairs.push(("rating", rating.to_string()));
        }
        push_opt(
            &mut pairs,
            "courseId",
            self.course_id.as_ref().map(|id| id.0.as_str()),
        );
        pairs
    }
}

/// DTO для создания/обновления отзыва
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackDto {
    pub student_id: StudentId,
    pub course_id: CourseId,
    pub rating: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

const FIELDS: &[FieldDef] = &[
    FieldDef::new("student_id", "Student", FieldKind::Reference(Module::Students)).required(),
    FieldDef::new("course_id", "Course", FieldKind::Reference(Module::Courses)).required(),
    FieldDef::new("rating", "Rating", FieldKind::Select(RATING_OPTIONS)).required(),
    FieldDef::new("comment", "Comment", FieldKind::TextArea)
        .rules(ValidationRules::none().max_length(2000)),
];

impl FormModel for FeedbackDto {
    fn fields() -> &'static [FieldDef] {
        FIELDS
    }

    fn to_values(&self) -> FormValues {
        let mut values = FormValues::new();
        values.insert("student_id".into(), self.student_id.0.clone());
        values.insert("course_id".into(), self.course_id.0.clone());
        let rating = if self.rating == 0 {
            String::new()
        } else {
            self.rating.to_string()
        };
        values.insert("rating".into(), rating);
        values.insert("comment".into(), self.comment.clone().unwrap_or_default());
        values
    }

    fn from_values(values: &FormValues) -> Self {
        Self {
            student_id: StudentId::new(text(values, "student_id")),
            course_id: CourseId::new(text(values, "course_id")),
            rating: optional_number(values, "rating").unwrap_or_default(),
            comment: optional_text(values, "comment"),
        }
    }
}

impl From<&Feedback> for FeedbackDto {
    fn from(record: &Feedback) -> Self {
        Self {
            student_id: record.student_id.clone(),
            course_id: record.course_id.clone(),
            rating: record.rating,
            comment: record.comment.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::FieldError;

    #[test]
    fn test_rating_bounds() {
        let mut values = FeedbackDto::default_values();
        values.insert("student_id".into(), "s-1".into());
        values.insert("course_id".into(), "c-1".into());
        assert_eq!(
            FeedbackDto::parse(&values).unwrap_err().get("rating"),
            Some(&FieldError::Required)
        );

        values.insert("rating".into(), "6".into());
        assert_eq!(
            FeedbackDto::parse(&values).unwrap_err().get("rating"),
            Some(&FieldError::UnknownOption)
        );

        values.insert("rating".into(), "4".into());
        assert_eq!(FeedbackDto::parse(&values).unwrap().rating, 4);
    }

    #[test]
    fn test_stars() {
        let feedback = Feedback {
            id: FeedbackId::new("f-1"),
            student_id: StudentId::new("s-1"),
            student_name: None,
            course_id: CourseId::new("c-1"),
            course_name: Some("Rust 101".into()),
            rating: 3,
            comment: None,
            metadata: RecordMetadata::default(),
        };
        assert_eq!(feedback.stars(), "★★★☆☆");
        assert_eq!(feedback.description(), "3/5 for Rust 101");
    }
}
