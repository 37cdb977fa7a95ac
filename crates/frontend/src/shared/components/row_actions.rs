//! Per-row action menu and the page toolbar actions.
//!
//! Which actions exist is decided from the permission set: an action the
//! role may not perform is left out of the menu rather than disabled.

use contracts::domain::common::{Entity, RecordId};
use contracts::system::permissions::{ActionKind, PermissionSet};
use leptos::prelude::*;
use std::sync::Arc;

use crate::shared::icons::icon;

/// Entity-specific action appended after the built-in ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CustomAction {
    pub key: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    View,
    Edit,
    Delete,
    CopyId,
    CopyCode,
    CopyEmail,
    Custom(CustomAction),
}

impl RowAction {
    pub fn label(&self) -> &'static str {
        match self {
            RowAction::View => "View",
            RowAction::Edit => "Edit",
            RowAction::Delete => "Delete",
            RowAction::CopyId => "Copy ID",
            RowAction::CopyCode => "Copy code",
            RowAction::CopyEmail => "Copy email",
            RowAction::Custom(custom) => custom.label,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            RowAction::View => "eye",
            RowAction::Edit => "edit",
            RowAction::Delete => "delete",
            RowAction::CopyId | RowAction::CopyCode | RowAction::CopyEmail => "copy",
            RowAction::Custom(custom) => custom.icon,
        }
    }

    pub fn is_destructive(&self) -> bool {
        matches!(self, RowAction::Delete)
    }

    /// Text put on the clipboard by the copy actions.
    pub fn copy_text<E: Entity>(&self, record: &E) -> Option<String> {
        match self {
            RowAction::CopyId => Some(record.id().as_str().to_string()),
            RowAction::CopyCode => record.code().map(str::to_string),
            RowAction::CopyEmail => record.email().map(str::to_string),
            _ => None,
        }
    }
}

/// Actions offered for `record`, in menu order.
///
/// View, Edit and Delete follow Read, Update and Delete. Copy actions only
/// need the value to exist. Custom actions are always offered.
pub fn visible_actions<E: Entity>(
    record: &E,
    permissions: &PermissionSet,
    custom: &[CustomAction],
) -> Vec<RowAction> {
    let read_only = E::is_read_only();
    let mut actions = Vec::new();
    if permissions.allows(ActionKind::Read) {
        actions.push(RowAction::View);
    }
    if !read_only && permissions.allows(ActionKind::Update) {
        actions.push(RowAction::Edit);
    }
    actions.push(RowAction::CopyId);
    if record.code().is_some_and(|c| !c.trim().is_empty()) {
        actions.push(RowAction::CopyCode);
    }
    if record.email().is_some_and(|e| !e.trim().is_empty()) {
        actions.push(RowAction::CopyEmail);
    }
    actions.extend(custom.iter().copied().map(RowAction::Custom));
    if !read_only && permissions.allows(ActionKind::Delete) {
        actions.push(RowAction::Delete);
    }
    actions
}

/// Buttons of the page header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ToolbarActions {
    pub create: bool,
    pub export: bool,
}

pub fn toolbar_actions<E: Entity>(permissions: &PermissionSet) -> ToolbarActions {
    ToolbarActions {
        create: !E::is_read_only() && permissions.allows(ActionKind::Create),
        export: permissions.allows(ActionKind::Export),
    }
}

/// Kebab menu of one row.
#[component]
pub fn RowActionMenu(
    actions: Vec<RowAction>,
    on_action: Arc<dyn Fn(RowAction) + Send + Sync>,
) -> impl IntoView {
    let open = RwSignal::new(false);
    let actions = StoredValue::new(actions);

    view! {
        <div class="row-actions" on:click=|e| e.stop_propagation()>
            <button
                class="button button--icon row-actions__toggle"
                title="Actions"
                on:click=move |_| open.update(|o| *o = !*o)
            >
                {icon("more-vertical")}
            </button>
            <Show when=move || open.get()>
                <div class="row-actions__backdrop" on:click=move |_| open.set(false)></div>
                <div class="row-actions__menu">
                    {actions
                        .get_value()
                        .into_iter()
                        .map(|action| {
                            let on_action = on_action.clone();
                            view! {
                                <button
                                    class="row-actions__item"
                                    class:row-actions__item--danger=action.is_destructive()
                                    on:click=move |_| {
                                        open.set(false);
                                        on_action(action);
                                    }
                                >
                                    {icon(action.icon())}
                                    <span>{action.label()}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_organization::aggregate::Organization;
    use contracts::domain::a007_enquiry::aggregate::Enquiry;
    use contracts::domain::a009_audit_log::aggregate::AuditLog;
    use serde_json::json;

    fn permissions(actions: &[ActionKind]) -> PermissionSet {
        actions.iter().copied().collect()
    }

    fn organization(code: Option<&str>) -> Organization {
        serde_json::from_value(json!({
            "id": "org-1",
            "name": "Acme",
            "code": code,
            "status": "ACTIVE"
        }))
        .unwrap()
    }

    #[test]
    fn test_actions_follow_permissions() {
        let org = organization(Some("ACM"));
        let read_only = visible_actions(&org, &permissions(&[ActionKind::Read]), &[]);
        assert_eq!(
            read_only,
            vec![RowAction::View, RowAction::CopyId, RowAction::CopyCode]
        );

        let full = visible_actions(
            &org,
            &permissions(&[ActionKind::Read, ActionKind::Update, ActionKind::Delete]),
            &[],
        );
        assert!(full.contains(&RowAction::Edit));
        assert_eq!(full.last(), Some(&RowAction::Delete));
    }

    #[test]
    fn test_no_permissions_leaves_copy_actions() {
        let org = organization(None);
        assert_eq!(
            visible_actions(&org, &PermissionSet::none(), &[]),
            vec![RowAction::CopyId]
        );
        assert_eq!(RowAction::CopyId.copy_text(&org), Some("org-1".to_string()));
        assert_eq!(RowAction::CopyCode.copy_text(&org), None);
    }

    #[test]
    fn test_custom_actions_and_read_only_entities() {
        let enquiry: Enquiry = serde_json::from_value(json!({
            "id": "enq-7",
            "fullName": "Jane Doe",
            "email": "jane@example.com",
            "source": "WEBSITE",
            "status": "INTERESTED"
        }))
        .unwrap();
        let convert = CustomAction {
            key: "convert",
            label: "Convert to enrollment",
            icon: "user-plus",
        };
        let actions = visible_actions(&enquiry, &PermissionSet::none(), &[convert]);
        assert!(actions.contains(&RowAction::CopyEmail));
        assert!(actions.contains(&RowAction::Custom(convert)));

        let log: AuditLog = serde_json::from_value(json!({
            "id": "log-1",
            "actor": "admin",
            "action": "CREATE",
            "module": "courses",
            "createdAt": "2024-03-01T10:00:00Z"
        }))
        .unwrap();
        let all: PermissionSet = ActionKind::ALL.into_iter().collect();
        assert_eq!(
            visible_actions(&log, &all, &[]),
            vec![RowAction::View, RowAction::CopyId]
        );
        assert_eq!(
            toolbar_actions::<AuditLog>(&all),
            ToolbarActions {
                create: false,
                export: true
            }
        );
    }

    #[test]
    fn test_toolbar_actions() {
        assert_eq!(
            toolbar_actions::<Organization>(&permissions(&[ActionKind::Read])),
            ToolbarActions::default()
        );
        assert_eq!(
            toolbar_actions::<Organization>(&permissions(&[ActionKind::Create])),
            ToolbarActions {
                create: true,
                export: false
            }
        );
    }
}
