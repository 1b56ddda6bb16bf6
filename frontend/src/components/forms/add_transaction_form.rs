use shared::{FieldValues, TransactionField, UnknownField};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AddTransactionFormProps {
    // Form state
    pub values: FieldValues,
    pub source_options: Vec<(String, String)>,
    pub category_options: Vec<(String, String)>,
    pub submitting: bool,

    // Event handlers
    pub on_field_change: Callback<(TransactionField, String)>,
    pub on_submit: Callback<()>,
}

/// Pair a changed element's `name` attribute with its new value
fn field_change(name: &str, value: String) -> Result<(TransactionField, String), UnknownField> {
    Ok((name.parse()?, value))
}

/// Shared change handler: the target's `name` picks the field, for both
/// `<input>` and `<select>`
fn field_handler(on_field_change: &Callback<(TransactionField, String)>) -> Callback<Event> {
    let on_field_change = on_field_change.clone();
    Callback::from(move |e: Event| {
        let (name, value) = match e.target_dyn_into::<HtmlSelectElement>() {
            Some(select) => (select.name(), select.value()),
            None => {
                let input: HtmlInputElement = e.target_unchecked_into();
                (input.name(), input.value())
            }
        };

        match field_change(&name, value) {
            Ok(change) => on_field_change.emit(change),
            Err(e) => tracing::warn!("ignoring change event: {}", e),
        }
    })
}

fn pick_list(options: &[(String, String)], selected: &str) -> Html {
    html! {
        <>
            <option disabled={true} selected={selected.is_empty()} value="">
                {"Pick one"}
            </option>
            {for options.iter().map(|(id, label)| {
                html! {
                    <option key={id.clone()} value={id.clone()} selected={id == selected}>
                        {label}
                    </option>
                }
            })}
        </>
    }
}

#[function_component(AddTransactionForm)]
pub fn add_transaction_form(props: &AddTransactionFormProps) -> Html {
    let values = &props.values;
    let on_change = field_handler(&props.on_field_change);

    html! {
        <div class="add-transaction-form">
            <div class="form-row">
                <label class="form-control">
                    <span class="label-text">{"Amount"}</span>
                    <input
                        type="number"
                        step="0.01"
                        placeholder="+/-1000.00"
                        name={TransactionField::Amount.as_str()}
                        value={values.amount.clone()}
                        onchange={on_change.clone()}
                    />
                </label>
                <label class="form-control">
                    <span class="label-text">{"Source"}</span>
                    <select
                        name={TransactionField::SourceId.as_str()}
                        onchange={on_change.clone()}
                    >
                        {pick_list(&props.source_options, &values.source_id)}
                    </select>
                </label>
                <label class="form-control">
                    <span class="label-text">{"Category"}</span>
                    <select
                        name={TransactionField::CategoryId.as_str()}
                        onchange={on_change.clone()}
                    >
                        {pick_list(&props.category_options, &values.category_id)}
                    </select>
                </label>
            </div>

            <div class="form-row">
                <label class="form-control">
                    <span class="label-text">{"Date"}</span>
                    <input
                        type="text"
                        placeholder="MM-DD-YYYY"
                        name={TransactionField::Date.as_str()}
                        value={values.date.clone()}
                        onchange={on_change.clone()}
                    />
                </label>
                <label class="form-control">
                    <span class="label-text">{"Description"}</span>
                    <input
                        type="text"
                        placeholder="A little bit more"
                        name={TransactionField::Description.as_str()}
                        value={values.description.clone()}
                        onchange={on_change.clone()}
                    />
                </label>
                <button
                    type="button"
                    class="btn"
                    disabled={props.submitting}
                    onclick={props.on_submit.reform(|_: MouseEvent| ())}
                >
                    {"Add+"}
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_attribute_selects_the_field() {
        assert_eq!(
            field_change("category_id", "c2".to_string()),
            Ok((TransactionField::CategoryId, "c2".to_string()))
        );
        assert_eq!(
            field_change("amount", "-50.00".to_string()),
            Ok((TransactionField::Amount, "-50.00".to_string()))
        );
    }

    #[test]
    fn test_every_rendered_name_maps_back_to_its_field() {
        for field in TransactionField::ALL {
            let (parsed, _) = field_change(field.as_str(), String::new()).unwrap();
            assert_eq!(parsed, field);
        }
    }

    #[test]
    fn test_unknown_name_is_rejected() {
        assert_eq!(
            field_change("balance", "10".to_string()),
            Err(UnknownField("balance".to_string()))
        );
    }
}
