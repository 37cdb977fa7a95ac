//! State of the create/edit/view modal.

use contracts::domain::common::Entity;
use contracts::shared::form::{FieldErrors, FormModel, FormValues};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Create,
    Edit,
    View,
}

impl FormMode {
    pub fn resolve(has_record: bool, read_only: bool) -> Self {
        match (has_record, read_only) {
            (_, true) => FormMode::View,
            (true, false) => FormMode::Edit,
            (false, false) => FormMode::Create,
        }
    }

    pub fn is_editable(&self) -> bool {
        !matches!(self, FormMode::View)
    }

    pub fn title_prefix(&self) -> &'static str {
        match self {
            FormMode::Create => "New",
            FormMode::Edit => "Edit",
            FormMode::View => "View",
        }
    }
}

/// Validated request produced by a submit.
#[derive(Debug, Clone)]
pub enum Submission<E: Entity> {
    Create(E::Form),
    Update { id: E::Id, body: E::Form },
}

#[derive(Debug, Clone)]
pub struct FormState<E: Entity> {
    open: bool,
    mode: FormMode,
    record_id: Option<E::Id>,
    values: FormValues,
    errors: FieldErrors,
    submitting: bool,
}

impl<E: Entity> Default for FormState<E> {
    fn default() -> Self {
        Self {
            open: false,
            mode: FormMode::Create,
            record_id: None,
            values: FormValues::new(),
            errors: FieldErrors::new(),
            submitting: false,
        }
    }
}

impl<E: Entity> FormState<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn value(&self, key: &str) -> String {
        self.values.get(key).cloned().unwrap_or_default()
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Opens the modal with fresh values, also when it is already open on
    /// another record. `seed` overrides the defaults of a new record (used by
    /// cross-entity navigation).
    pub fn open(&mut self, record: Option<&E>, read_only: bool, seed: FormValues) {
        self.open = true;
        self.mode = FormMode::resolve(record.is_some(), read_only);
        self.load(record, seed);
    }

    fn load(&mut self, record: Option<&E>, seed: FormValues) {
        self.record_id = record.map(|r| r.id().clone());
        self.values = match record {
            Some(record) => E::Form::from(record).to_values(),
            None => {
                let mut values = E::Form::default_values();
                values.extend(seed);
                values
            }
        };
        self.errors = FieldErrors::new();
        self.submitting = false;
    }

    pub fn set_value(&mut self, key: &str, value: String) {
        if !self.mode.is_editable() || self.submitting {
            return;
        }
        self.values.insert(key.to_string(), value);
        self.errors.clear_field(key);
    }

    /// Validates the values. On success the state moves to submitting and
    /// the request to send is returned; otherwise the errors are kept.
    pub fn submit(&mut self) -> Option<Submission<E>> {
        if !self.open || !self.mode.is_editable() || self.submitting {
            return None;
        }
        match E::Form::parse(&self.values) {
            Ok(body) => {
                self.errors = FieldErrors::new();
                let submission = match (&self.mode, &self.record_id) {
                    (FormMode::Edit, Some(id)) => Submission::Update {
                        id: id.clone(),
                        body,
                    },
                    _ => Submission::Create(body),
                };
                self.submitting = true;
                Some(submission)
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }

    /// The caller refetches the list before calling this.
    pub fn submit_succeeded(&mut self) {
        self.close();
    }

    /// Keeps the modal open with the entered values.
    pub fn submit_failed(&mut self) {
        self.submitting = false;
    }

    pub fn close(&mut self) {
        *self = Self::default();
    }

    pub fn title(&self) -> String {
        format!("{} {}", self.mode.title_prefix(), E::element_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::RecordId;
    use contracts::domain::a001_organization::aggregate::{Organization, OrganizationDto};
    use contracts::domain::a009_audit_log::aggregate::AuditLog;
    use contracts::shared::form::FieldError;

    fn organization(id: &str, name: &str) -> Organization {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "name": name,
            "status": "ACTIVE",
            "createdAt": "2024-03-01T10:00:00Z"
        }))
        .unwrap()
    }

    #[test]
    fn test_mode_resolution() {
        assert_eq!(FormMode::resolve(false, false), FormMode::Create);
        assert_eq!(FormMode::resolve(true, false), FormMode::Edit);
        assert_eq!(FormMode::resolve(true, true), FormMode::View);
        assert_eq!(FormMode::resolve(false, true), FormMode::View);
    }

    #[test]
    fn test_empty_required_field_blocks_submit() {
        let record = organization("org-1", "Acme");
        let mut form: FormState<Organization> = FormState::new();
        form.open(Some(&record), false, FormValues::new());
        assert_eq!(form.mode(), FormMode::Edit);
        assert_eq!(form.value("name"), "Acme");

        form.set_value("name", String::new());
        assert!(form.submit().is_none());
        assert!(!form.is_submitting());
        assert_eq!(form.errors().get("name"), Some(&FieldError::Required));
        assert_eq!(form.errors().get("name").unwrap().to_string(), "required");

        form.set_value("name", "Acme Ltd".to_string());
        assert!(form.errors().get("name").is_none());
    }

    #[test]
    fn test_edit_submit_targets_record() {
        let record = organization("org-1", "Acme");
        let mut form: FormState<Organization> = FormState::new();
        form.open(Some(&record), false, FormValues::new());
        form.set_value("code", "ACM".to_string());

        match form.submit() {
            Some(Submission::Update { id, body }) => {
                assert_eq!(id.as_str(), "org-1");
                assert_eq!(body.code.as_deref(), Some("ACM"));
            }
            other => panic!("unexpected submission: {:?}", other),
        }
        assert!(form.is_submitting());
        // A second click while submitting is ignored.
        assert!(form.submit().is_none());
    }

    #[test]
    fn test_failed_submit_keeps_values() {
        let mut form: FormState<Organization> = FormState::new();
        form.open(None, false, FormValues::new());
        form.set_value("name", "Acme".to_string());
        form.set_value("code", "DUP".to_string());
        assert!(matches!(form.submit(), Some(Submission::Create(_))));

        form.submit_failed();
        assert!(form.is_open());
        assert!(!form.is_submitting());
        assert_eq!(form.value("code"), "DUP");

        assert!(form.submit().is_some());
        form.submit_succeeded();
        assert!(!form.is_open());
        assert!(form.values().is_empty());
    }

    #[test]
    fn test_reopen_resets_values() {
        let first = organization("org-1", "Acme");
        let second = organization("org-2", "Globex");
        let mut form: FormState<Organization> = FormState::new();

        form.open(Some(&first), false, FormValues::new());
        form.set_value("name", "typed but not saved".to_string());
        form.close();
        form.open(Some(&first), false, FormValues::new());
        assert_eq!(form.value("name"), "Acme");

        form.set_value("name", "edited".to_string());
        // Another record while still open: nothing of the previous one survives.
        form.open(Some(&second), false, FormValues::new());
        assert_eq!(form.value("name"), "Globex");
        match form.submit() {
            Some(Submission::Update { id, body }) => {
                assert_eq!(id.as_str(), "org-2");
                assert_eq!(body.name, "Globex");
            }
            other => panic!("unexpected submission: {:?}", other),
        }
    }

    #[test]
    fn test_create_seed_overrides_defaults() {
        let mut form: FormState<Organization> = FormState::new();
        let seed: FormValues = [("name".to_string(), "Seeded".to_string())].into();
        form.open(None, false, seed);
        assert_eq!(form.mode(), FormMode::Create);
        assert_eq!(form.value("name"), "Seeded");
        assert_eq!(form.value("status"), "ACTIVE");
        assert_eq!(form.title(), format!("New {}", Organization::element_name()));
    }

    #[test]
    fn test_view_mode_is_read_only() {
        let log: AuditLog = serde_json::from_value(serde_json::json!({
            "id": "log-1",
            "actor": "admin",
            "action": "DELETE",
            "module": "students",
            "recordId": "stu-9",
            "createdAt": "2024-03-01T10:00:00Z"
        }))
        .unwrap();
        let mut form: FormState<AuditLog> = FormState::new();
        form.open(Some(&log), AuditLog::is_read_only(), FormValues::new());
        assert_eq!(form.mode(), FormMode::View);
        form.set_value("actor", "someone else".to_string());
        assert_eq!(form.value("actor"), "admin");
        assert!(form.submit().is_none());
    }

    #[test]
    fn test_blank_optional_is_not_sent() {
        let mut form: FormState<Organization> = FormState::new();
        form.open(None, false, FormValues::new());
        form.set_value("name", "Acme".to_string());
        form.set_value("email", "   ".to_string());
        let Some(Submission::Create(body)) = form.submit() else {
            panic!("expected create submission");
        };
        let _: &OrganizationDto = &body;
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"name": "Acme", "status": "ACTIVE"})
        );
    }
}
