use shared::{Category, Source};
use transaction_entry_domain::{ReferenceData, ReferenceDataLoader};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::StoreClient;

/// Fetch the source and category pick lists once, on mount.
///
/// Each list is stored as soon as its own request finishes.
#[hook]
pub fn use_reference_data(store: &StoreClient) -> ReferenceData {
    let sources = use_state(|| Option::<Vec<Source>>::None);
    let categories = use_state(|| Option::<Vec<Category>>::None);

    use_effect_with((), {
        let loader = ReferenceDataLoader::new(store.clone());
        let sources = sources.clone();
        let categories = categories.clone();

        move |_| {
            let source_loader = loader.clone();
            spawn_local(async move {
                sources.set(source_loader.load_sources().await);
            });

            spawn_local(async move {
                categories.set(loader.load_categories().await);
            });

            || ()
        }
    });

    ReferenceData {
        sources: (*sources).clone(),
        categories: (*categories).clone(),
    }
}
