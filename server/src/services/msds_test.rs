use super::*;

#[test]
fn settings_key_is_stable() {
    assert_eq!(MSDS_URL_KEY, "msds_url");
}

#[test]
fn error_messages_match_api_contract() {
    assert_eq!(MsdsError::MissingUrl.to_string(), "Missing 'url' in request payload.");
    assert_eq!(MsdsError::ItemNotFound.to_string(), "Invalid 'inventory_id'. Item not found.");
}

#[cfg(feature = "live-db-tests")]
mod live {
    use super::*;

    #[tokio::test]
    async fn url_round_trips_through_settings() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL for live tests");
        let pool = crate::db::init_pool(&url, 2).await.expect("pool");

        set_msds_url(&pool, Some(" https://msds.example.edu/log ")).await.unwrap();
        assert_eq!(msds_url(&pool).await.unwrap(), "https://msds.example.edu/log");
        assert!(matches!(set_msds_url(&pool, None).await, Err(MsdsError::MissingUrl)));
    }

    #[tokio::test]
    async fn flag_on_unknown_bottle_is_not_found() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL for live tests");
        let pool = crate::db::init_pool(&url, 2).await.expect("pool");
        let id = serde_json::json!(i32::MAX);
        assert!(matches!(set_msds_flag(&pool, Some(&id), true).await, Err(MsdsError::ItemNotFound)));
    }
}
