//! Wikidata label source
//!
//! Endpoint: https://query.wikidata.org/sparql
//! Usage policy: https://meta.wikimedia.org/wiki/User-Agent_policy

use namefold_core::{LabelSource, Result};

use crate::config::WikidataConfig;
use crate::http::{HttpClient, HttpError};
use crate::query::country_labels_query;
use crate::response::parse_label_bindings;

pub struct WikidataSource {
    client: HttpClient,
    config: WikidataConfig,
}

impl WikidataSource {
    /// Build a source with its own HTTP client. The config is expected to
    /// have passed [`WikidataConfig::validate`].
    pub fn new(config: WikidataConfig) -> std::result::Result<Self, HttpError> {
        let client = HttpClient::new(&config.user_agent, config.timeout())?;
        Ok(Self { client, config })
    }
}

impl LabelSource for WikidataSource {
    async fn fetch_labels(&self, entity: &str) -> Result<Vec<String>> {
        let query = country_labels_query(entity, &self.config.language, &self.config.instance_of);
        tracing::debug!("Querying {} for labels of {:?}", self.config.endpoint, entity);

        let response = self
            .client
            .get_with_params(
                &self.config.endpoint,
                &[("query", query.as_str()), ("format", "json")],
            )
            .await?;

        let labels = parse_label_bindings(&response.body)?;
        tracing::debug!(
            "Fetched {} labels for {:?} (HTTP {})",
            labels.len(),
            entity,
            response.status
        );
        Ok(labels)
    }
}
