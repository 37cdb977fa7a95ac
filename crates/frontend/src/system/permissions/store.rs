use contracts::system::permissions::{Module, PermissionSet, Role};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api::fetch_permissions;
use super::cache::PermissionCache;
use crate::shared::notifications::{use_notifications, NotificationService};
use crate::system::auth::context::use_auth;

#[derive(Clone, Copy)]
pub struct PermissionStore {
    cache: RwSignal<PermissionCache>,
}

impl PermissionStore {
    pub fn new() -> Self {
        Self {
            cache: RwSignal::new(PermissionCache::new()),
        }
    }

    pub fn get(&self, module: Module) -> PermissionSet {
        self.cache.with(|c| c.get(module))
    }

    /// Starts a lookup for `module` under `role` unless one is cached or in flight.
    fn ensure(&self, module: Module, role: Option<Role>, notifications: NotificationService) {
        let lookup = self.cache.try_update(|c| {
            c.set_role(role);
            c.begin(module)
        });
        let Some(Some(role)) = lookup else {
            return;
        };
        let cache = self.cache;
        spawn_local(async move {
            let set = match fetch_permissions(&role, module).await {
                Ok(set) => {
                    log::debug!("permissions {}@{}: {:?}", role.as_str(), module.as_str(), set);
                    set
                }
                Err(e) => {
                    notifications.error(format!(
                        "Could not load permissions for {}: {}",
                        module.label(),
                        e.user_message()
                    ));
                    PermissionSet::none()
                }
            };
            let _ = cache.try_update(|c| c.resolve(&role, module, set));
        });
    }
}

impl Default for PermissionStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Permission set of the signed-in role on `module`, empty until resolved.
pub fn use_module_permissions(module: Module) -> Signal<PermissionSet> {
    let store = use_context::<PermissionStore>().expect("PermissionStore not found in context");
    let auth = use_auth();
    let notifications = use_notifications();

    Effect::new(move |_| {
        let role = auth.role();
        store.ensure(module, role, notifications);
    });

    Signal::derive(move || store.get(module))
}
