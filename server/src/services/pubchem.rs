//! PubChem PUG REST synonym lookup for expanded search.
//!
//! DESIGN
//! ======
//! Search depends on the [`SynonymSource`] trait rather than the HTTP client
//! so tests can substitute canned synonyms. PubChem answers unknown names
//! with a `Fault` document instead of `InformationList`; that parses as "no
//! synonyms", not an error.

use reqwest::Url;
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum PubChemError {
    #[error("invalid PubChem base url: {0}")]
    BaseUrl(String),
    #[error("PubChem request failed: {0}")]
    Http(#[from] reqwest::Error),
}

#[async_trait::async_trait]
pub trait SynonymSource: Send + Sync {
    /// Known synonyms for a substance name. Unknown names yield an empty list.
    ///
    /// # Errors
    ///
    /// Returns a [`PubChemError`] when the upstream service cannot be reached.
    async fn synonyms(&self, name: &str) -> Result<Vec<String>, PubChemError>;
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct SynonymResponse {
    information_list: Option<InformationList>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct InformationList {
    #[serde(default)]
    information: Vec<Information>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Information {
    #[serde(default)]
    synonym: Vec<String>,
}

/// Flatten every substance's synonym list out of a PUG REST response body.
pub(crate) fn parse_synonyms(body: &serde_json::Value) -> Vec<String> {
    let parsed: SynonymResponse = serde_json::from_value(body.clone()).unwrap_or_default();
    parsed
        .information_list
        .map(|list| list.information.into_iter().flat_map(|i| i.synonym).collect())
        .unwrap_or_default()
}

/// `{base}/rest/pug/substance/name/{name}/synonyms/json`, with `name` percent-encoded.
pub(crate) fn synonyms_url(base: &str, name: &str) -> Result<Url, PubChemError> {
    let mut url = Url::parse(base).map_err(|e| PubChemError::BaseUrl(e.to_string()))?;
    url.path_segments_mut()
        .map_err(|()| PubChemError::BaseUrl(base.to_owned()))?
        .pop_if_empty()
        .extend(["rest", "pug", "substance", "name", name, "synonyms", "json"]);
    Ok(url)
}

pub struct PubChemClient {
    http: reqwest::Client,
    base_url: String,
}

impl PubChemClient {
    #[must_use]
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self { http, base_url: base_url.into() }
    }
}

#[async_trait::async_trait]
impl SynonymSource for PubChemClient {
    async fn synonyms(&self, name: &str) -> Result<Vec<String>, PubChemError> {
        let url = synonyms_url(&self.base_url, name)?;
        let body: serde_json::Value = self.http.get(url).send().await?.json().await?;
        let synonyms = parse_synonyms(&body);
        tracing::debug!(%name, count = synonyms.len(), "pubchem synonyms fetched");
        Ok(synonyms)
    }
}

#[cfg(test)]
#[path = "pubchem_test.rs"]
mod tests;
