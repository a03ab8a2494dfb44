use super::*;

#[test]
fn urls_use_the_name_namespace() {
    assert_eq!(
        description_url("acetic%20acid"),
        "https://pubchem.ncbi.nlm.nih.gov/rest/pug/compound/name/acetic%20acid/description/JSON"
    );
    assert_eq!(image_url("acetone"), "https://pubchem.ncbi.nlm.nih.gov/rest/pug/compound/name/acetone/PNG");
}

#[test]
fn summarize_merges_title_and_description() {
    let body = serde_json::json!({
        "InformationList": {
            "Information": [
                { "CID": 180, "Title": "Acetone" },
                { "CID": 180, "Description": "Acetone is a methyl ketone.", "DescriptionSourceName": "ChEBI" },
                { "CID": 180, "Description": "Second description.", "DescriptionSourceName": "LOTUS" }
            ]
        }
    });
    let summary = summarize(&body, "img".to_owned()).unwrap();
    assert_eq!(summary.title.as_deref(), Some("Acetone"));
    assert_eq!(summary.description.as_deref(), Some("Acetone is a methyl ketone."));
    assert_eq!(summary.source.as_deref(), Some("ChEBI"));
    assert_eq!(summary.image_url, "img");
}

#[test]
fn summarize_without_description() {
    let body = serde_json::json!({ "InformationList": { "Information": [{ "CID": 1, "Title": "X" }] } });
    let summary = summarize(&body, String::new()).unwrap();
    assert_eq!(summary.description, None);
    assert_eq!(summary.source, None);
}

#[test]
fn summarize_rejects_fault_bodies() {
    let body = serde_json::json!({ "Fault": { "Code": "PUGREST.NotFound" } });
    assert_eq!(summarize(&body, String::new()), None);
}
