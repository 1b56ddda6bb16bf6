use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusBannerProps {
    /// Full error text, e.g. "Error! constraint violation."
    pub error: Option<String>,
    /// Empty when there is nothing to celebrate
    pub success: String,
}

#[function_component(StatusBanner)]
pub fn status_banner(props: &StatusBannerProps) -> Html {
    html! {
        <>
            {if let Some(error) = props.error.as_ref() {
                html! {
                    <div role="alert" class="alert alert-error">
                        <span>{error}</span>
                    </div>
                }
            } else { html! {} }}

            {if !props.success.is_empty() {
                html! {
                    <div role="alert" class="alert alert-success">
                        <span>{&props.success}</span>
                    </div>
                }
            } else { html! {} }}
        </>
    }
}
