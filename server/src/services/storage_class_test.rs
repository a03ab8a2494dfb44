use super::*;

#[test]
fn normalize_name_trims_and_rejects_blank() {
    assert_eq!(normalize_name(" Corrosive ").unwrap(), "Corrosive");
    assert!(matches!(normalize_name("  "), Err(StorageClassError::NameRequired)));
}

#[test]
fn unknown_class_name_is_fixed() {
    assert_eq!(UNKNOWN, "Unknown");
}

#[test]
fn error_messages_match_api_contract() {
    assert_eq!(StorageClassError::NameRequired.to_string(), "Name is required");
    assert_eq!(StorageClassError::Duplicate.to_string(), "Storage class already exists");
    assert_eq!(StorageClassError::NotFound(3).to_string(), "Storage class not found");
    assert_eq!(StorageClassError::DeleteUnknown.to_string(), "Cannot delete the Unknown storage class");
}

#[cfg(feature = "live-db-tests")]
mod live {
    use super::*;
    use crate::services::chemical;
    use records::NewChemical;

    async fn pool() -> PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL for live tests");
        crate::db::init_pool(&url, 2).await.expect("pool")
    }

    #[tokio::test]
    async fn delete_moves_chemicals_to_unknown() {
        let pool = pool().await;
        let tag = std::process::id();
        let class = create_storage_class(&pool, &format!("Live Oxidizer {tag}")).await.unwrap();
        let chemical_id = chemical::add_chemical(
            &pool,
            &NewChemical {
                chemical_name: format!("Live Peroxide {tag}"),
                storage_class_id: Some(class.id),
                ..NewChemical::default()
            },
        )
        .await
        .unwrap();

        delete_storage_class(&pool, class.id).await.unwrap();

        let classes = list_storage_classes(&pool).await.unwrap();
        assert!(!classes.iter().any(|c| c.id == class.id));
        let unknown = classes.iter().find(|c| c.name == UNKNOWN).unwrap();

        let chemicals = chemical::list_chemicals(&pool, false).await.unwrap();
        let moved = chemicals.iter().find(|c| c.id == chemical_id).unwrap();
        assert_eq!(moved.storage_class_id, unknown.id);
        assert_eq!(moved.storage_class, UNKNOWN);

        assert!(matches!(delete_storage_class(&pool, unknown.id).await, Err(StorageClassError::DeleteUnknown)));
        chemical::delete_chemical(&pool, chemical_id).await.unwrap();
    }
}
