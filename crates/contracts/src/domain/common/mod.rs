//! Common types and traits for all entities

pub mod entity;
pub mod record_id;
pub mod record_metadata;

// Re-exports
pub use entity::Entity;
pub(crate) use record_id::record_id;
pub use record_id::RecordId;
pub use record_metadata::RecordMetadata;
