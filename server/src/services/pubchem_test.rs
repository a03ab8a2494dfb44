use super::*;
use serde_json::json;

#[test]
fn parse_synonyms_flattens_every_substance() {
    let body = json!({
        "InformationList": {
            "Information": [
                { "SID": 1, "Synonym": ["acetone", "propanone"] },
                { "SID": 2, "Synonym": ["dimethyl ketone"] },
                { "SID": 3 }
            ]
        }
    });
    assert_eq!(parse_synonyms(&body), vec!["acetone", "propanone", "dimethyl ketone"]);
}

#[test]
fn parse_synonyms_fault_is_empty() {
    let body = json!({ "Fault": { "Code": "PUGREST.NotFound", "Message": "No matching records" } });
    assert!(parse_synonyms(&body).is_empty());
}

#[test]
fn parse_synonyms_garbage_is_empty() {
    assert!(parse_synonyms(&json!([1, 2, 3])).is_empty());
    assert!(parse_synonyms(&json!({ "InformationList": "nope" })).is_empty());
}

#[test]
fn synonyms_url_encodes_name() {
    let url = synonyms_url("https://pubchem.ncbi.nlm.nih.gov", "sodium chloride").unwrap();
    assert_eq!(
        url.as_str(),
        "https://pubchem.ncbi.nlm.nih.gov/rest/pug/substance/name/sodium%20chloride/synonyms/json"
    );
}

#[test]
fn synonyms_url_tolerates_trailing_slash() {
    let url = synonyms_url("http://localhost:9000/", "acetone").unwrap();
    assert_eq!(url.as_str(), "http://localhost:9000/rest/pug/substance/name/acetone/synonyms/json");
}

#[test]
fn synonyms_url_rejects_bad_base() {
    assert!(matches!(synonyms_url("not a url", "x"), Err(PubChemError::BaseUrl(_))));
}

struct Canned(Vec<&'static str>);

#[async_trait::async_trait]
impl SynonymSource for Canned {
    async fn synonyms(&self, _name: &str) -> Result<Vec<String>, PubChemError> {
        Ok(self.0.iter().map(|s| (*s).to_owned()).collect())
    }
}

#[tokio::test]
async fn synonym_source_is_object_safe() {
    let source: Box<dyn SynonymSource> = Box::new(Canned(vec!["propanone"]));
    assert_eq!(source.synonyms("acetone").await.unwrap(), vec!["propanone"]);
}
