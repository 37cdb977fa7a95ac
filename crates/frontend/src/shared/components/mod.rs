pub mod column;
pub mod confirm_dialog;
pub mod data_table;
pub mod entity_form;
pub mod entity_list;
pub mod filter_select;
pub mod pagination_controls;
pub mod reference_select;
pub mod row_actions;
pub mod table;
pub mod ui;

pub use column::{Cell, ColumnDef};
pub use entity_list::EntityListPage;
pub use filter_select::FilterSelect;
