use async_trait::async_trait;
use gloo::net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use shared::{Category, FieldValues, Source, Table};
use transaction_entry_domain::{ReferenceStorage, StoreError, TransactionStorage};

use super::config::StoreConfig;

/// Error body returned by the store on non-2xx responses
#[derive(Debug, Deserialize)]
struct StoreErrorBody {
    message: String,
    #[serde(default)]
    code: Option<String>,
}

/// REST client for the backing store
#[derive(Debug, Clone, PartialEq)]
pub struct StoreClient {
    config: StoreConfig,
}

impl StoreClient {
    /// Create a client from the build-time configuration
    pub fn new() -> Self {
        Self::with_config(StoreConfig::new())
    }

    pub fn with_config(config: StoreConfig) -> Self {
        Self { config }
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.config.api_key {
            Some(key) => builder
                .header("apikey", key)
                .header("Authorization", &format!("Bearer {}", key)),
            None => builder,
        }
    }

    /// Every row of `table`
    pub async fn select<T: DeserializeOwned>(&self, table: Table) -> Result<Vec<T>, StoreError> {
        let url = format!("{}?select=*", self.config.table_url(table));

        let response = self
            .authorize(Request::get(&url))
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(error_from_response(response).await);
        }

        response
            .json::<Vec<T>>()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))
    }

    /// Insert one row into `table`, discarding the stored representation
    pub async fn insert<T: Serialize>(&self, table: Table, record: &T) -> Result<(), StoreError> {
        let url = self.config.table_url(table);

        let response = self
            .authorize(Request::post(&url))
            .header("Prefer", "return=minimal")
            .json(record)
            .map_err(|e| StoreError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        if response.ok() {
            Ok(())
        } else {
            Err(error_from_response(response).await)
        }
    }
}

impl Default for StoreClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl ReferenceStorage for StoreClient {
    async fn list_sources(&self) -> Result<Vec<Source>, StoreError> {
        self.select(Table::Source).await
    }

    async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        self.select(Table::Category).await
    }
}

#[async_trait(?Send)]
impl TransactionStorage for StoreClient {
    async fn insert_transaction(&self, record: &FieldValues) -> Result<(), StoreError> {
        self.insert(Table::Transaction, record).await
    }
}

async fn error_from_response(response: Response) -> StoreError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    error_from_body(status, &body)
}

/// Turn a failed response into the message shown to the user: the store's
/// `message` when the body has one, else the raw body, else the status.
fn error_from_body(status: u16, body: &str) -> StoreError {
    if let Ok(parsed) = serde_json::from_str::<StoreErrorBody>(body) {
        return StoreError::Rejected {
            message: parsed.message,
            code: parsed.code,
        };
    }

    let text = body.trim();
    if text.is_empty() {
        StoreError::rejected(format!("Server error {}", status))
    } else {
        StoreError::rejected(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_message_is_used_when_present() {
        let body = r#"{"code":"23503","details":"Key (source_id)=(s9) is not present.","hint":null,"message":"constraint violation"}"#;

        assert_eq!(
            error_from_body(409, body),
            StoreError::Rejected {
                message: "constraint violation".to_string(),
                code: Some("23503".to_string()),
            }
        );
    }

    #[test]
    fn test_plain_text_body_is_passed_through() {
        assert_eq!(
            error_from_body(502, "Bad Gateway\n"),
            StoreError::rejected("Bad Gateway")
        );
    }

    #[test]
    fn test_empty_body_falls_back_to_status() {
        assert_eq!(error_from_body(500, ""), StoreError::rejected("Server error 500"));
    }
}
