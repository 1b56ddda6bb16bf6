//! # Transaction Form
//!
//! Field state, status messages and the submit flow of the "add transaction"
//! form.
//!
//! The controller runs on a single-threaded event loop and is shared by the
//! UI callbacks, so it works through `&self` with interior mutability. A
//! [`SubmissionGuard`] keeps at most one insert in flight: clicking "Add+"
//! again while the store is still answering does nothing.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use shared::{FieldValues, TransactionField};
use tracing::{debug, error, info};

use crate::errors::StoreError;
use crate::session::RefreshSignal;
use crate::storage::TransactionStorage;

pub const SUCCESS_MESSAGE: &str = "Transaction added!";

/// Feedback shown above the form. Error and success can't both be shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    /// Store rejected the last submit; holds its message
    Failed(String),
    Added,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub values: FieldValues,
    pub status: FormStatus,
    pub submitting: bool,
}

impl FormState {
    /// Error text, empty when no error is shown
    pub fn error(&self) -> &str {
        match &self.status {
            FormStatus::Failed(message) => message,
            _ => "",
        }
    }

    /// Success text, empty when no success is shown
    pub fn success(&self) -> &str {
        match self.status {
            FormStatus::Added => SUCCESS_MESSAGE,
            _ => "",
        }
    }

    pub fn error_banner(&self) -> Option<String> {
        match &self.status {
            FormStatus::Failed(message) => Some(format!("Error! {}.", message)),
            _ => None,
        }
    }

    /// Store one keystroke/selection. Any value is accepted; an error banner
    /// is dismissed, a success banner stays.
    pub fn on_field_change(&mut self, field: TransactionField, value: String) {
        if matches!(self.status, FormStatus::Failed(_)) {
            self.status = FormStatus::Idle;
        }
        self.values.set(field, value);
    }
}

/// Shared "a submit is in flight" flag
#[derive(Debug, Clone, Default)]
pub struct SubmissionGuard {
    in_flight: Rc<Cell<bool>>,
}

impl SubmissionGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the guard; `None` while another ticket is alive
    pub fn try_acquire(&self) -> Option<SubmissionTicket> {
        if self.in_flight.replace(true) {
            return None;
        }
        Some(SubmissionTicket {
            in_flight: self.in_flight.clone(),
        })
    }
}

/// Releases the guard when dropped
#[derive(Debug)]
pub struct SubmissionTicket {
    in_flight: Rc<Cell<bool>>,
}

impl Drop for SubmissionTicket {
    fn drop(&mut self) {
        self.in_flight.set(false);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Added,
    Rejected(StoreError),
    /// Another submit was still waiting on the store
    AlreadySubmitting,
}

type Observer = Box<dyn Fn(&FormState)>;

pub struct TransactionFormController<S, R> {
    store: S,
    refresh: R,
    state: RefCell<FormState>,
    guard: SubmissionGuard,
    observer: Option<Observer>,
}

impl<S: TransactionStorage, R: RefreshSignal> TransactionFormController<S, R> {
    pub fn new(store: S, refresh: R) -> Self {
        Self {
            store,
            refresh,
            state: RefCell::new(FormState::default()),
            guard: SubmissionGuard::new(),
            observer: None,
        }
    }

    /// Called with a snapshot after every state change
    pub fn with_observer(mut self, observer: impl Fn(&FormState) + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    pub fn state(&self) -> FormState {
        self.state.borrow().clone()
    }

    pub fn on_field_change(&self, field: TransactionField, value: impl Into<String>) {
        let value = value.into();
        self.update(|state| state.on_field_change(field, value));
    }

    /// Send the current field values to the store.
    ///
    /// On success the fields are cleared, the success banner is shown and the
    /// session refresh flag is flipped once. On failure the fields are kept
    /// for correction and the store's message is shown.
    pub async fn submit(&self) -> SubmitOutcome {
        let Some(_ticket) = self.guard.try_acquire() else {
            debug!("submit ignored, previous transaction still pending");
            return SubmitOutcome::AlreadySubmitting;
        };

        self.update(|state| {
            state.status = FormStatus::Idle;
            state.submitting = true;
        });
        let record = self.state.borrow().values.clone();

        match self.store.insert_transaction(&record).await {
            Ok(()) => {
                info!(
                    "transaction added: amount={} source={} category={}",
                    record.amount, record.source_id, record.category_id
                );
                self.update(|state| {
                    state.values = FieldValues::default();
                    state.status = FormStatus::Added;
                    state.submitting = false;
                });
                self.refresh.toggle();
                SubmitOutcome::Added
            }
            Err(e) => {
                error!("Failed to add transaction: {:?}", e);
                self.update(|state| {
                    state.status = FormStatus::Failed(e.to_string());
                    state.submitting = false;
                });
                SubmitOutcome::Rejected(e)
            }
        }
    }

    fn update(&self, apply: impl FnOnce(&mut FormState)) {
        let snapshot = {
            let mut state = self.state.borrow_mut();
            apply(&mut state);
            state.clone()
        };
        if let Some(observer) = &self.observer {
            observer(&snapshot);
        }
    }
}
