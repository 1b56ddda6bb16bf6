use shared::Table;

const DEFAULT_BASE_URL: &str = "http://localhost:3000";
const DEFAULT_LOG_FILTER: &str = "info";

/// Where the backing store lives.
///
/// Baked in at build time from `TRANSACTION_STORE_URL` and
/// `TRANSACTION_STORE_KEY`; the browser has no process environment to read.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    pub base_url: String,
    pub api_key: Option<String>,
}

impl StoreConfig {
    pub fn new() -> Self {
        Self::from_values(
            option_env!("TRANSACTION_STORE_URL"),
            option_env!("TRANSACTION_STORE_KEY"),
        )
    }

    fn from_values(base_url: Option<&str>, api_key: Option<&str>) -> Self {
        let base_url = base_url
            .map(|url| url.trim().trim_end_matches('/'))
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_BASE_URL)
            .to_string();
        let api_key = api_key
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(str::to_string);

        Self { base_url, api_key }
    }

    /// REST endpoint for one collection
    pub fn table_url(&self, table: Table) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// `tracing` filter directive, from `TRANSACTION_ENTRY_LOG`
pub fn log_filter() -> &'static str {
    option_env!("TRANSACTION_ENTRY_LOG").unwrap_or(DEFAULT_LOG_FILTER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_values_fall_back_to_local_store() {
        let config = StoreConfig::from_values(None, None);

        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.api_key, None);
    }

    #[test]
    fn test_blank_values_count_as_missing() {
        let config = StoreConfig::from_values(Some("  "), Some(""));

        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.api_key, None);
    }

    #[test]
    fn test_trailing_slash_is_dropped_from_table_url() {
        let config = StoreConfig::from_values(Some("https://abc.example.co/"), Some("anon-key"));

        assert_eq!(config.table_url(Table::Transaction), "https://abc.example.co/rest/v1/transaction");
        assert_eq!(config.api_key.as_deref(), Some("anon-key"));
    }
}
