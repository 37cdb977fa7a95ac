//! Tab labels - заголовки табов по ключу.

use contracts::domain::common::RecordId;

use super::registry::TabRoute;

/// Читаемый заголовок таба для данного ключа. Fallback: сам ключ.
pub fn tab_label_for_key(key: &str) -> String {
    match TabRoute::parse(key) {
        Some(TabRoute::List(module)) => module.label().to_string(),
        Some(TabRoute::EnrollmentFromEnquiry(id)) => detail_tab_label("New enrollment", id.as_str()),
        None => key.to_string(),
    }
}

/// Заголовок таба записи: «<entity> · <identifier>».
pub fn detail_tab_label(entity_label: &str, identifier: &str) -> String {
    format!("{} · {}", entity_label, identifier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(tab_label_for_key("a009_audit_log"), "Audit logs");
        assert_eq!(
            tab_label_for_key("a006_enrollment_from_enquiry_enq-7"),
            "New enrollment · enq-7"
        );
        assert_eq!(tab_label_for_key("nope"), "nope");
    }
}
