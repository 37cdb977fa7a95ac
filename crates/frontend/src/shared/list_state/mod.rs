//! List page state: pure state machines plus the reactive handle that drives them.

pub mod controller;
pub mod debounce;
pub mod delete_flow;
pub mod form_state;
pub mod handle;

pub use controller::{CommitOutcome, FetchTicket, ListController};
pub use debounce::SearchDebouncer;
pub use delete_flow::{DeleteFlow, DeleteOutcome, DeleteStage};
pub use form_state::{FormMode, FormState, Submission};
pub use handle::ListHandle;
