pub mod use_reference_data;
pub mod use_transaction_form;
