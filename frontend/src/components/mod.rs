pub mod forms;
pub mod refresh_indicator;
pub mod status_banner;
pub mod transaction_entry;
