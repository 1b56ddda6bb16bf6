use yew::prelude::*;

use crate::components::forms::add_transaction_form::AddTransactionForm;
use crate::components::status_banner::StatusBanner;
use crate::hooks::use_reference_data::use_reference_data;
use crate::hooks::use_transaction_form::use_transaction_form;
use crate::services::api::StoreClient;

#[derive(Properties, PartialEq)]
pub struct TransactionEntryProps {
    pub store: StoreClient,
}

/// Status banners plus the form, wired to the store
#[function_component(TransactionEntry)]
pub fn transaction_entry(props: &TransactionEntryProps) -> Html {
    let reference_data = use_reference_data(&props.store);
    let form = use_transaction_form(&props.store);

    html! {
        <section class="transaction-entry">
            <StatusBanner
                error={form.state.error_banner()}
                success={form.state.success().to_string()}
            />
            <AddTransactionForm
                values={form.state.values.clone()}
                source_options={reference_data.source_options()}
                category_options={reference_data.category_options()}
                submitting={form.state.submitting}
                on_field_change={form.actions.on_field_change.clone()}
                on_submit={form.actions.on_submit.clone()}
            />
        </section>
    }
}
