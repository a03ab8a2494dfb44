use super::*;

#[test]
fn normalize_name_trims() {
    assert_eq!(normalize_name("  Sigma-Aldrich ").unwrap(), "Sigma-Aldrich");
}

#[test]
fn normalize_name_rejects_blank() {
    assert!(matches!(normalize_name(""), Err(ManufacturerError::NameRequired)));
    assert!(matches!(normalize_name(" \t "), Err(ManufacturerError::NameRequired)));
}

#[test]
fn error_messages_match_api_contract() {
    assert_eq!(ManufacturerError::NameRequired.to_string(), "Manufacturer name is required");
    assert_eq!(ManufacturerError::Duplicate.to_string(), "Manufacturer already exists");
    assert_eq!(ManufacturerError::NoIds.to_string(), "No manufacturer IDs provided.");
}

#[cfg(feature = "live-db-tests")]
mod live {
    use super::*;

    async fn pool() -> PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL for live tests");
        crate::db::init_pool(&url, 2).await.expect("pool")
    }

    #[tokio::test]
    async fn delete_removes_exactly_selected_rows() {
        let pool = pool().await;
        let keep = add_manufacturer(&pool, "Live Keep Co").await.unwrap();
        let a = add_manufacturer(&pool, "Live Drop A").await.unwrap();
        let b = add_manufacturer(&pool, "Live Drop B").await.unwrap();

        let deleted = delete_manufacturers(&pool, &[a, b, i32::MAX]).await.unwrap();
        assert_eq!(deleted, 2);

        let remaining = list_manufacturers(&pool, false).await.unwrap();
        assert!(remaining.iter().any(|m| m.id == keep));
        assert!(!remaining.iter().any(|m| m.id == a || m.id == b));

        delete_manufacturers(&pool, &[keep]).await.unwrap();
    }

    #[tokio::test]
    async fn duplicate_name_is_case_insensitive() {
        let pool = pool().await;
        let id = add_manufacturer(&pool, "Live Case Co").await.unwrap();
        assert!(matches!(add_manufacturer(&pool, "live case co").await, Err(ManufacturerError::Duplicate)));
        delete_manufacturers(&pool, &[id]).await.unwrap();
    }
}
