//! Client side of the role permission lookup.

pub mod api;
pub mod cache;
pub mod store;

pub use store::{use_module_permissions, PermissionStore};
