//! PubChem PUG REST enrichment for the chemical view.
//!
//! The browser calls PubChem directly; nothing here touches the inventory
//! server. Lookups are best-effort: a miss or network failure leaves the
//! panel empty.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "pubchem_test.rs"]
mod pubchem_test;

#[cfg(any(test, feature = "hydrate"))]
use serde::Deserialize;

#[cfg(any(test, feature = "hydrate"))]
const PUG_REST: &str = "https://pubchem.ncbi.nlm.nih.gov/rest/pug/compound/name";

/// Description and structure image of one compound.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompoundSummary {
    pub title: Option<String>,
    pub description: Option<String>,
    pub source: Option<String>,
    pub image_url: String,
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct DescriptionResponse {
    information_list: InformationList,
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct InformationList {
    #[serde(default)]
    information: Vec<Information>,
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Information {
    title: Option<String>,
    description: Option<String>,
    description_source_name: Option<String>,
}

#[cfg(any(test, feature = "hydrate"))]
/// `encoded_name` must already be URI-component encoded.
fn description_url(encoded_name: &str) -> String {
    format!("{PUG_REST}/{encoded_name}/description/JSON")
}

#[cfg(any(test, feature = "hydrate"))]
fn image_url(encoded_name: &str) -> String {
    format!("{PUG_REST}/{encoded_name}/PNG")
}

#[cfg(any(test, feature = "hydrate"))]
/// Merge the information records: the title comes from whichever record
/// carries one, the description from the first record that has text.
fn summarize(body: &serde_json::Value, image_url: String) -> Option<CompoundSummary> {
    let parsed: DescriptionResponse = serde_json::from_value(body.clone()).ok()?;
    let records = parsed.information_list.information;
    let title = records.iter().find_map(|r| r.title.clone());
    let described = records.iter().find(|r| r.description.as_deref().is_some_and(|d| !d.trim().is_empty()));
    Some(CompoundSummary {
        title,
        description: described.and_then(|r| r.description.clone()),
        source: described.and_then(|r| r.description_source_name.clone()),
        image_url,
    })
}

/// Look up `name` on PubChem. `None` when the compound is unknown or the
/// request fails.
pub async fn fetch_summary(name: &str) -> Option<CompoundSummary> {
    #[cfg(feature = "hydrate")]
    {
        let encoded = String::from(js_sys::encode_uri_component(name.trim()));
        let resp = gloo_net::http::Request::get(&description_url(&encoded))
            .send()
            .await
            .map_err(|e| log::warn!("pubchem request failed: {e}"))
            .ok()?;
        if !resp.ok() {
            return None;
        }
        let body = resp.json::<serde_json::Value>().await.ok()?;
        summarize(&body, image_url(&encoded))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = name;
        None
    }
}
