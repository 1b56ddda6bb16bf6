mod components;
mod context;
mod hooks;
mod services;

use yew::prelude::*;

use components::refresh_indicator::RefreshIndicator;
use components::transaction_entry::TransactionEntry;
use context::session::SessionProvider;
use services::api::StoreClient;
use services::{config, logging};

#[function_component(App)]
fn app() -> Html {
    let store = use_memo((), |_| StoreClient::new());

    html! {
        <SessionProvider>
            <main class="transactions-page">
                <h1>{"Add Transaction"}</h1>
                <TransactionEntry store={(*store).clone()} />
                <RefreshIndicator />
            </main>
        </SessionProvider>
    }
}

fn main() {
    logging::init_logging(config::log_filter());
    tracing::info!("starting transaction entry");
    yew::Renderer::<App>::new().render();
}
