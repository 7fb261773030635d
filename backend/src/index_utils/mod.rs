//! Clients for the search index and the pro API.

pub mod search_index_client;
pub mod pro_api_client;

pub(crate) fn required_env(name: &str) -> anyhow::Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => anyhow::bail!("missing environment variable {name}"),
    }
}
