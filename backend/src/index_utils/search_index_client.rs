use anyhow::Context;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::{debug, info, warn};

use crate::index_utils::required_env;

/// Body of a query request, in the index's own naming.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexQueryParams {
    pub query: String,
    pub facet_filters: common::facet_filter::FacetFilters,
    pub attributes_to_retrieve: Vec<String>,
    pub attributes_to_highlight: Vec<String>,
    pub hits_per_page: u64,
    pub page: u64,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSearchResult<T> {
    pub hits: Vec<T>,
    #[serde(default)]
    pub nb_hits: u64,
    #[serde(default)]
    pub page: u64,
    #[serde(default)]
    pub nb_pages: u64,
    #[serde(default)]
    pub hits_per_page: u64,
    #[serde(rename = "processingTimeMS", default)]
    pub processing_time_ms: u64,
}

/// Anything that answers index queries with the raw JSON response body.
pub trait SearchIndex: Send + Sync {
    fn query(&self, params: &IndexQueryParams) -> impl Future<Output = anyhow::Result<String>> + Send;
}

pub async fn search_index<T: DeserializeOwned + std::fmt::Debug>(
    index: &impl SearchIndex,
    params: &IndexQueryParams,
) -> anyhow::Result<RawSearchResult<T>> {
    let response_txt = index.query(params).await?;
    let response: RawSearchResult<T> = serde_json::from_str(&response_txt).context("unexpected index response")?;
    Ok(response)
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchIndexConfig {
    pub app_id: String,
    pub api_key: String,
    pub index_name: String,
    pub base_url: String,
}

impl SearchIndexConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let app_id = required_env("ALGOLIA_APP_ID")?;
        let api_key = required_env("ALGOLIA_API_KEY")?;
        let index_name = required_env("ALGOLIA_COLLECTIVE_OFFERS_INDEX")?;
        let base_url = std::env::var("ALGOLIA_URL").unwrap_or(format!("https://{app_id}-dsn.algolia.net"));
        Ok(Self { app_id, api_key, index_name, base_url })
    }

    pub fn query_url(&self) -> String {
        format!("{}/1/indexes/{}/query", self.base_url.trim_end_matches('/'), self.index_name)
    }
}

#[derive(Debug, Clone)]
pub struct SearchIndexClient {
    config: SearchIndexConfig,
    http: reqwest::Client,
}

impl SearchIndexClient {
    pub fn new(config: SearchIndexConfig, http: reqwest::Client) -> Self {
        Self { config, http }
    }

    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self::new(SearchIndexConfig::from_env()?, reqwest::Client::new()))
    }

    pub fn config(&self) -> &SearchIndexConfig {
        &self.config
    }
}

impl SearchIndex for SearchIndexClient {
    async fn query(&self, params: &IndexQueryParams) -> anyhow::Result<String> {
        debug!("index query params: {:?}", params);
        let t0 = std::time::Instant::now();
        let response = self
            .http
            .post(self.config.query_url())
            .header("X-Algolia-Application-Id", &self.config.app_id)
            .header("X-Algolia-API-Key", &self.config.api_key)
            .json(params)
            .send()
            .await?;
        let status = response.status();
        let response_txt = response.text().await?;
        if status.is_client_error() || status.is_server_error() {
            warn!("index {} answered {}", self.config.index_name, status);
            anyhow::bail!("Error: {}: {}", status, response_txt);
        }
        let dt_ms = t0.elapsed().as_millis() as u32;
        info!("index {} answered in {}ms (len = {})", self.config.index_name, dt_ms, response_txt.len());
        Ok(response_txt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_url_joins_base_and_index() {
        let config = SearchIndexConfig {
            app_id: "APP".to_string(),
            api_key: "KEY".to_string(),
            index_name: "collective-offers".to_string(),
            base_url: "http://127.0.0.1:7700/".to_string(),
        };
        assert_eq!(config.query_url(), "http://127.0.0.1:7700/1/indexes/collective-offers/query");
    }

    #[test]
    fn raw_result_reads_index_field_names() {
        let raw = r#"{"hits":[{"objectID":"1"}],"nbHits":1,"page":0,"nbPages":1,"hitsPerPage":8,"processingTimeMS":3,"query":""}"#;
        let parsed: RawSearchResult<serde_json::Value> = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.nb_hits, 1);
        assert_eq!(parsed.nb_pages, 1);
        assert_eq!(parsed.processing_time_ms, 3);
        assert_eq!(parsed.hits.len(), 1);
    }
}
