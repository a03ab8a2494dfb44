use super::*;
use crate::state::test_helpers::test_app_state;

#[tokio::test]
async fn healthz_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[tokio::test]
async fn api_router_builds_without_conflicts() {
    // Overlapping paths or duplicate method routes panic during assembly.
    let _router = api_routes(test_app_state());
}
