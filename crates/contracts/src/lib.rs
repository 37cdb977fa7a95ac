//! Shared contracts between the admin dashboard and the platform REST API.
//!
//! Everything here is plain data: wire envelopes, list queries, permission
//! sets and the entity records with their forms and filters.

pub mod domain;
pub mod shared;
pub mod system;
