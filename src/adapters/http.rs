use crate::domain::model::AnimalRecord;
use crate::domain::ports::AnimalSource;
use crate::utils::error::{AnimalError, Result};
use async_trait::async_trait;
use reqwest::Client;

pub const DEFAULT_API_ENDPOINT: &str = "https://api.api-ninjas.com/v1/animals";
pub const API_KEY_HEADER: &str = "X-Api-Key";

/// Animal lookup over the API Ninjas `animals` endpoint.
///
/// One GET per search, no retry. A non-success status is logged and
/// reported as "no results"; transport failures propagate.
pub struct ApiNinjasSource {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl ApiNinjasSource {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl AnimalSource for ApiNinjasSource {
    async fn fetch(&self, search_term: &str) -> Result<Option<Vec<AnimalRecord>>> {
        tracing::debug!("Making API request to: {} (name={})", self.endpoint, search_term);

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("name", search_term)])
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            let failure = AnimalError::HttpFailure {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            };
            tracing::error!("❌ {}", failure);
            tracing::warn!("💡 {}", failure.recovery_suggestion());
            return Ok(None);
        }

        let body = response.bytes().await?;
        let animals: Vec<AnimalRecord> = serde_json::from_slice(&body)?;
        tracing::info!("✅ API returned {} animal(s) for '{}'", animals.len(), search_term);

        Ok(Some(animals))
    }
}
