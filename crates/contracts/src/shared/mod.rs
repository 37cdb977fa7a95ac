pub mod api;
pub mod enums;
pub mod filter;
pub mod form;
pub mod list;
