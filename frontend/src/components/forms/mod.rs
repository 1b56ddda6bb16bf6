pub mod add_transaction_form;
