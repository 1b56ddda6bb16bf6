//! # Transaction Entry Domain
//!
//! Contains all non-UI logic for the transaction entry form.
//!
//! - **Storage**: the contract the form expects from the backing store, plus
//!   an in-memory implementation
//! - **Reference data**: one-shot loading of the source/category pick lists
//! - **Transaction form**: field state, status messages and the submit flow
//! - **Session**: the refresh signal shared with sibling views
//!
//! Nothing in here knows about the DOM, so the same flow can be driven from
//! the Yew frontend or straight from tests.

pub mod errors;
pub mod reference_data;
pub mod session;
pub mod storage;
pub mod transaction_form;

pub use errors::StoreError;
pub use reference_data::{ReferenceData, ReferenceDataLoader};
pub use session::RefreshSignal;
pub use storage::{ReferenceStorage, TransactionStorage};
pub use transaction_form::{
    FormState, FormStatus, SubmissionGuard, SubmissionTicket, SubmitOutcome,
    TransactionFormController, SUCCESS_MESSAGE,
};
