use shared::TransactionField;
use transaction_entry_domain::{FormState, TransactionFormController};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::context::session::{SessionContext, SessionRefresh};
use crate::services::api::StoreClient;

pub struct UseTransactionFormResult {
    pub state: FormState,
    pub actions: UseTransactionFormActions,
}

#[derive(Clone)]
pub struct UseTransactionFormActions {
    pub on_field_change: Callback<(TransactionField, String)>,
    pub on_submit: Callback<()>,
}

#[hook]
pub fn use_transaction_form(store: &StoreClient) -> UseTransactionFormResult {
    let session = use_context::<SessionContext>();
    let snapshot = use_state(FormState::default);

    // The controller lives as long as the form; it pushes every change into
    // `snapshot` to trigger a re-render.
    let controller = {
        let store = store.clone();
        let refresh = SessionRefresh::new(session.as_ref());
        let snapshot = snapshot.clone();

        use_memo((), move |_| {
            TransactionFormController::new(store, refresh)
                .with_observer(move |state| snapshot.set(state.clone()))
        })
    };

    let on_field_change = {
        let controller = controller.clone();
        Callback::from(move |(field, value): (TransactionField, String)| {
            controller.on_field_change(field, value);
        })
    };

    let on_submit = {
        let controller = controller.clone();
        Callback::from(move |_| {
            let controller = controller.clone();
            spawn_local(async move {
                controller.submit().await;
            });
        })
    };

    UseTransactionFormResult {
        state: (*snapshot).clone(),
        actions: UseTransactionFormActions {
            on_field_change,
            on_submit,
        },
    }
}
