use yew::prelude::*;

use crate::context::session::SessionContext;

/// Sibling view that reacts to the session refresh flag
#[function_component(RefreshIndicator)]
pub fn refresh_indicator() -> Html {
    let Some(session) = use_context::<SessionContext>() else {
        return html! {};
    };

    html! {
        <p class="refresh-indicator">
            {match session.refresh_count {
                0 => "No transactions added this session".to_string(),
                1 => "Transactions refreshed once".to_string(),
                n => format!("Transactions refreshed {} times", n),
            }}
        </p>
    }
}
