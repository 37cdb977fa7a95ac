use contracts::domain::a009_audit_log::aggregate::{AuditAction, AuditLog};
use contracts::shared::enums::StatusTone;
use contracts::system::permissions::Module;
use leptos::prelude::*;

use crate::shared::components::{Cell, ColumnDef, EntityListPage, FilterSelect};
use crate::shared::list_state::ListHandle;
use crate::shared::notifications::use_notifications;

fn action(log: &AuditLog) -> Cell {
    match log.action_kind() {
        Some(kind) => Cell::badge(kind.label(), kind.tone()),
        None => Cell::badge(&log.action, StatusTone::Subtle),
    }
}

fn columns() -> Vec<ColumnDef<AuditLog>> {
    vec![
        ColumnDef::new("createdAt", "When", |l: &AuditLog| Cell::DateTime(Some(l.created_at)))
            .sortable()
            .width(170),
        ColumnDef::new("actor", "User", |l: &AuditLog| Cell::text(l.actor.clone()))
            .sortable()
            .width(160),
        ColumnDef::new("action", "Action", action).sortable().width(110),
        ColumnDef::new("module", "Module", |l: &AuditLog| Cell::text(l.module_label()))
            .sortable()
            .width(140),
        ColumnDef::new("recordId", "Record", |l: &AuditLog| {
            Cell::opt_text(l.record_id.as_deref())
        })
        .truncate(24),
        ColumnDef::new("details", "Details", |l: &AuditLog| Cell::opt_text(l.details.as_deref()))
            .truncate(60),
    ]
}

/// Журнал аудита: только просмотр
#[component]
pub fn AuditLogList() -> impl IntoView {
    let handle = ListHandle::<AuditLog>::new(use_notifications());

    let module = Signal::derive(move || {
        handle
            .filter()
            .module
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    });
    let action = Signal::derive(move || {
        handle
            .filter()
            .action
            .map(|a| a.code().to_string())
            .unwrap_or_default()
    });

    view! {
        <EntityListPage handle=handle columns=columns()>
            <FilterSelect
                label="Module"
                value=module
                options=Module::OPTIONS
                on_change=Callback::new(move |code: String| {
                    handle.update_filter(|f| f.module = Module::from_code(&code))
                })
            />
            <FilterSelect
                label="Action"
                value=action
                options=AuditAction::OPTIONS
                on_change=Callback::new(move |code: String| {
                    handle.update_filter(|f| f.action = AuditAction::from_code(&code))
                })
            />
        </EntityListPage>
    }
}
