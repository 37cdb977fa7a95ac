//! Form schema for the create/edit/view modals.
//!
//! A form works on raw string values keyed by field. Validation runs against
//! the schema before anything is sent; a valid set of values is then parsed
//! into the entity DTO.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Debug;
use std::str::FromStr;
use thiserror::Error;

use crate::system::permissions::Module;

pub type FormValues = BTreeMap<String, String>;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Validation rules for a field
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

impl ValidationRules {
    /// Create empty validation rules (all optional, no constraints)
    pub const fn none() -> Self {
        Self {
            required: false,
            min: None,
            max: None,
            min_length: None,
            max_length: None,
        }
    }

    /// Create validation rules for required field
    pub const fn required() -> Self {
        Self {
            required: true,
            ..Self::none()
        }
    }

    pub const fn max_length(self, max: usize) -> Self {
        Self {
            max_length: Some(max),
            ..self
        }
    }

    pub const fn min_length(self, min: usize) -> Self {
        Self {
            min_length: Some(min),
            ..self
        }
    }

    pub const fn range(self, min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            ..self
        }
    }

    pub const fn at_least(self, min: f64) -> Self {
        Self {
            min: Some(min),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    Text,
    Email,
    Phone,
    Number,
    Date,
    /// `(code, label)` options
    Select(&'static [(&'static str, &'static str)]),
    /// Id of a record of another module, picked from that module's list
    Reference(Module),
    TextArea,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldDef {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub rules: ValidationRules,
    pub placeholder: Option<&'static str>,
}

impl FieldDef {
    pub const fn new(key: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            key,
            label,
            kind,
            rules: ValidationRules::none(),
            placeholder: None,
        }
    }

    pub const fn rules(self, rules: ValidationRules) -> Self {
        Self { rules, ..self }
    }

    pub const fn required(self) -> Self {
        Self {
            rules: ValidationRules {
                required: true,
                ..self.rules
            },
            ..self
        }
    }

    pub const fn placeholder(self, placeholder: &'static str) -> Self {
        Self {
            placeholder: Some(placeholder),
            ..self
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldError {
    #[error("required")]
    Required,
    #[error("invalid email address")]
    InvalidEmail,
    #[error("invalid phone number")]
    InvalidPhone,
    #[error("must be a number")]
    NotANumber,
    #[error("must be at least {0}")]
    TooSmall(f64),
    #[error("must be at most {0}")]
    TooLarge(f64),
    #[error("must be at least {0} characters")]
    TooShort(usize),
    #[error("must be at most {0} characters")]
    TooLong(usize),
    #[error("invalid date, expected YYYY-MM-DD")]
    InvalidDate,
    #[error("unknown option")]
    UnknownOption,
    #[error("{0}")]
    Custom(String),
}

/// Field-level validation result, keyed by field key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors(BTreeMap<String, FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps the first error reported for a field.
    pub fn insert(&mut self, key: &str, error: FieldError) {
        self.0.entry(key.to_string()).or_insert(error);
    }

    pub fn get(&self, key: &str) -> Option<&FieldError> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldError)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn clear_field(&mut self, key: &str) {
        self.0.remove(key);
    }
}

/// Checks every field of the schema against the values.
pub fn validate_values(fields: &[FieldDef], values: &FormValues) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for field in fields {
        let value = values.get(field.key).map(|v| v.trim()).unwrap_or("");
        if let Err(error) = validate_field(field, value) {
            errors.insert(field.key, error);
        }
    }
    errors
}

fn validate_field(field: &FieldDef, value: &str) -> Result<(), FieldError> {
    let rules = &field.rules;
    if value.is_empty() {
        return if rules.required {
            Err(FieldError::Required)
        } else {
            Ok(())
        };
    }

    let length = value.chars().count();
    if let Some(min) = rules.min_length {
        if length < min {
            return Err(FieldError::TooShort(min));
        }
    }
    if let Some(max) = rules.max_length {
        if length > max {
            return Err(FieldError::TooLong(max));
        }
    }

    match field.kind {
        FieldKind::Text | FieldKind::TextArea | FieldKind::Reference(_) => Ok(()),
        FieldKind::Email => {
            if is_email(value) {
                Ok(())
            } else {
                Err(FieldError::InvalidEmail)
            }
        }
        FieldKind::Phone => {
            let digits = value.chars().filter(|c| c.is_ascii_digit()).count();
            let allowed = value
                .chars()
                .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | ' ' | '(' | ')'));
            if allowed && (7..=15).contains(&digits) {
                Ok(())
            } else {
                Err(FieldError::InvalidPhone)
            }
        }
        FieldKind::Number => {
            let number: f64 = value.parse().map_err(|_| FieldError::NotANumber)?;
            if !number.is_finite() {
                return Err(FieldError::NotANumber);
            }
            if let Some(min) = rules.min {
                if number < min {
                    return Err(FieldError::TooSmall(min));
                }
            }
            if let Some(max) = rules.max {
                if number > max {
                    return Err(FieldError::TooLarge(max));
                }
            }
            Ok(())
        }
        FieldKind::Date => NaiveDate::parse_from_str(value, DATE_FORMAT)
            .map(|_| ())
            .map_err(|_| FieldError::InvalidDate),
        FieldKind::Select(options) => {
            if options.iter().any(|(code, _)| *code == value) {
                Ok(())
            } else {
                Err(FieldError::UnknownOption)
            }
        }
    }
}

fn is_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !value.contains(char::is_whitespace)
        && domain
            .split_once('.')
            .map(|(host, tld)| !host.is_empty() && !tld.is_empty())
            .unwrap_or(false)
}

/// Blank input means "absent": it is never sent as an empty string.
pub fn normalize_optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

pub fn text(values: &FormValues, key: &str) -> String {
    values
        .get(key)
        .map(|v| v.trim().to_string())
        .unwrap_or_default()
}

pub fn optional_text(values: &FormValues, key: &str) -> Option<String> {
    values.get(key).and_then(|v| normalize_optional(v))
}

pub fn optional_number<N: FromStr>(values: &FormValues, key: &str) -> Option<N> {
    values.get(key).and_then(|v| v.trim().parse().ok())
}

pub fn optional_date(values: &FormValues, key: &str) -> Option<NaiveDate> {
    values
        .get(key)
        .and_then(|v| NaiveDate::parse_from_str(v.trim(), DATE_FORMAT).ok())
}

pub fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

/// DTO bound to a form schema.
pub trait FormModel: Clone + Debug + Default + Serialize + Send + Sync + 'static {
    fn fields() -> &'static [FieldDef];

    fn to_values(&self) -> FormValues;

    /// Builds the DTO from values that already passed `validate_values`.
    fn from_values(values: &FormValues) -> Self;

    /// Rules spanning several fields (date ranges and the like).
    fn cross_validate(_values: &FormValues, _errors: &mut FieldErrors) {}

    fn default_values() -> FormValues {
        Self::default().to_values()
    }

    fn parse(values: &FormValues) -> Result<Self, FieldErrors> {
        let mut errors = validate_values(Self::fields(), values);
        Self::cross_validate(values, &mut errors);
        if errors.is_empty() {
            Ok(Self::from_values(values))
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELDS: &[FieldDef] = &[
        FieldDef::new("name", "Name", FieldKind::Text).required(),
        FieldDef::new("email", "Email", FieldKind::Email),
        FieldDef::new("phone", "Phone", FieldKind::Phone),
        FieldDef::new("capacity", "Capacity", FieldKind::Number)
            .rules(ValidationRules::none().range(1.0, 500.0)),
        FieldDef::new("starts", "Starts", FieldKind::Date),
        FieldDef::new(
            "status",
            "Status",
            FieldKind::Select(&[("ACTIVE", "Active"), ("INACTIVE", "Inactive")]),
        )
        .required(),
    ];

    fn values(pairs: &[(&str, &str)]) -> FormValues {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_required_blank_is_rejected() {
        let errors = validate_values(FIELDS, &values(&[("name", "   "), ("status", "ACTIVE")]));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("name"), Some(&FieldError::Required));
        assert_eq!(errors.get("name").unwrap().to_string(), "required");
    }

    #[test]
    fn test_optional_blank_is_accepted() {
        let errors = validate_values(
            FIELDS,
            &values(&[("name", "Acme"), ("email", ""), ("status", "ACTIVE")]),
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn test_kind_checks() {
        let errors = validate_values(
            FIELDS,
            &values(&[
                ("name", "Acme"),
                ("email", "acme.example.com"),
                ("phone", "12ab"),
                ("capacity", "0"),
                ("starts", "15.03.2024"),
                ("status", "DELETED"),
            ]),
        );
        assert_eq!(errors.get("email"), Some(&FieldError::InvalidEmail));
        assert_eq!(errors.get("phone"), Some(&FieldError::InvalidPhone));
        assert_eq!(errors.get("capacity"), Some(&FieldError::TooSmall(1.0)));
        assert_eq!(errors.get("starts"), Some(&FieldError::InvalidDate));
        assert_eq!(errors.get("status"), Some(&FieldError::UnknownOption));
    }

    #[test]
    fn test_valid_values() {
        let errors = validate_values(
            FIELDS,
            &values(&[
                ("name", "Acme"),
                ("email", "office@acme.io"),
                ("phone", "+1 (555) 010-2030"),
                ("capacity", "30"),
                ("starts", "2024-03-15"),
                ("status", "INACTIVE"),
            ]),
        );
        assert!(errors.is_empty(), "{:?}", errors);
    }

    #[test]
    fn test_normalize_optional() {
        assert_eq!(normalize_optional(""), None);
        assert_eq!(normalize_optional("  \t"), None);
        assert_eq!(normalize_optional(" x "), Some("x".to_string()));
    }
}
