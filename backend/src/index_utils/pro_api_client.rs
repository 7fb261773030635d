use anyhow::Context;
use serde::de::DeserializeOwned;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq)]
pub struct ProApiConfig {
    pub base_url: String,
    /// Adage iframe token, sent as a bearer token.
    pub token: Option<String>,
}

impl ProApiConfig {
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("PRO_API_URL").unwrap_or("http://localhost:5001".to_string()),
            token: std::env::var("ADAGE_IFRAME_TOKEN").ok().filter(|t| !t.trim().is_empty()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProApiClient {
    config: ProApiConfig,
    http: reqwest::Client,
}

impl ProApiClient {
    pub fn new(config: ProApiConfig, http: reqwest::Client) -> Self {
        Self { config, http }
    }

    pub fn from_env() -> Self {
        Self::new(ProApiConfig::from_env(), reqwest::Client::new())
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> anyhow::Result<T> {
        let url = format!("{}{}", self.config.base_url.trim_end_matches('/'), path);
        let mut request = self.http.get(&url);
        if let Some(token) = &self.config.token {
            request = request.bearer_auth(token);
        }
        let response = request.send().await?;
        let status = response.status();
        let response_txt = response.text().await?;
        if status.is_client_error() || status.is_server_error() {
            warn!("pro api GET {} answered {}", path, status);
            anyhow::bail!("Error: {}: {}", status, response_txt);
        }
        info!("pro api GET {}: len = {}", path, response_txt.len());
        serde_json::from_str(&response_txt).with_context(|| format!("unexpected pro api response for {path}"))
    }
}
