//! Per-role cache of resolved permission sets.

use std::collections::HashMap;

use contracts::system::permissions::{Module, PermissionSet, Role};

#[derive(Debug, Clone, PartialEq)]
enum Entry {
    /// Lookup in flight.
    Pending,
    Ready(PermissionSet),
}

/// Lookups are keyed by module for the current role; changing the role
/// drops everything resolved for the previous one.
#[derive(Debug, Clone, Default)]
pub struct PermissionCache {
    role: Option<Role>,
    entries: HashMap<Module, Entry>,
}

impl PermissionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn role(&self) -> Option<&Role> {
        self.role.as_ref()
    }

    /// Returns true when the role actually changed.
    pub fn set_role(&mut self, role: Option<Role>) -> bool {
        if self.role == role {
            return false;
        }
        self.role = role;
        self.entries.clear();
        true
    }

    /// Allowed actions; empty until the lookup has resolved.
    pub fn get(&self, module: Module) -> PermissionSet {
        match self.entries.get(&module) {
            Some(Entry::Ready(set)) => set.clone(),
            _ => PermissionSet::none(),
        }
    }

    pub fn is_resolved(&self, module: Module) -> bool {
        matches!(self.entries.get(&module), Some(Entry::Ready(_)))
    }

    /// Marks the module as pending and returns the role to look it up for,
    /// or `None` when there is nothing to fetch.
    pub fn begin(&mut self, module: Module) -> Option<Role> {
        let role = self.role.clone()?;
        if self.entries.contains_key(&module) {
            return None;
        }
        self.entries.insert(module, Entry::Pending);
        Some(role)
    }

    /// Stores a lookup result unless the role changed while it was in flight.
    pub fn resolve(&mut self, role: &Role, module: Module, set: PermissionSet) -> bool {
        if self.role.as_ref() != Some(role) {
            return false;
        }
        self.entries.insert(module, Entry::Ready(set));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::permissions::ActionKind;

    fn read_only() -> PermissionSet {
        [ActionKind::Read].into_iter().collect()
    }

    #[test]
    fn test_lookup_once_per_module() {
        let mut cache = PermissionCache::new();
        assert_eq!(cache.begin(Module::Students), None);

        cache.set_role(Some(Role::new("COUNSELOR")));
        assert_eq!(cache.begin(Module::Students), Some(Role::new("COUNSELOR")));
        assert_eq!(cache.begin(Module::Students), None);
        assert!(cache.get(Module::Students).is_empty());

        assert!(cache.resolve(&Role::new("COUNSELOR"), Module::Students, read_only()));
        assert!(cache.is_resolved(Module::Students));
        assert!(cache.get(Module::Students).allows(ActionKind::Read));
        assert!(!cache.get(Module::Students).allows(ActionKind::Delete));
        assert_eq!(cache.begin(Module::Students), None);
    }

    #[test]
    fn test_role_change_discards_results() {
        let mut cache = PermissionCache::new();
        cache.set_role(Some(Role::new("ADMIN")));
        cache.begin(Module::Courses);
        assert!(!cache.set_role(Some(Role::new("ADMIN"))));

        assert!(cache.set_role(Some(Role::new("COUNSELOR"))));
        // Answer for the previous role arrives late.
        assert!(!cache.resolve(&Role::new("ADMIN"), Module::Courses, read_only()));
        assert!(cache.get(Module::Courses).is_empty());
        assert_eq!(cache.begin(Module::Courses), Some(Role::new("COUNSELOR")));
    }

    #[test]
    fn test_sign_out_clears() {
        let mut cache = PermissionCache::new();
        cache.set_role(Some(Role::new("ADMIN")));
        cache.begin(Module::Feedback);
        cache.resolve(&Role::new("ADMIN"), Module::Feedback, read_only());
        cache.set_role(None);
        assert!(cache.get(Module::Feedback).is_empty());
        assert_eq!(cache.role(), None);
    }
}
