use super::*;
use crate::services::session::SessionUser;
use crate::state::test_helpers::test_app_state;
use records::AccessLevel;

fn visitor() -> AuthUser {
    AuthUser {
        user: SessionUser {
            id: 1,
            name: "Vera".to_owned(),
            email: "vera@example.com".to_owned(),
            access: AccessLevel::Visitor,
        },
        token: "tok".to_owned(),
    }
}

async fn lookup(product_number: Option<&str>) -> (StatusCode, serde_json::Value) {
    let params = ProductNumberQuery { product_number: product_number.map(ToOwned::to_owned) };
    let response = product_number_lookup(State(test_app_state()), visitor(), Query(params)).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn product_lookup_without_param_is_a_plain_miss() {
    let (status, body) = lookup(None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({}));
}

#[tokio::test]
async fn product_lookup_with_empty_param_is_a_plain_miss() {
    let (status, body) = lookup(Some("")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({}));
}

#[test]
fn chemicals_query_defaults_to_live_bottles() {
    let uri: axum::http::Uri = "/api/get_chemicals".parse().unwrap();
    assert!(!Query::<ChemicalsQuery>::try_from_uri(&uri).unwrap().0.dead);
}
