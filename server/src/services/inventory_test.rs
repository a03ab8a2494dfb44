use super::*;
use serde_json::json;

#[test]
fn parse_inventory_id_missing_vs_invalid() {
    assert!(matches!(parse_inventory_id(None), Err(InventoryError::MissingId)));
    assert!(matches!(parse_inventory_id(Some(&json!(null))), Err(InventoryError::MissingId)));
    assert!(matches!(parse_inventory_id(Some(&json!("abc"))), Err(InventoryError::InvalidId)));
    assert!(matches!(parse_inventory_id(Some(&json!([1]))), Err(InventoryError::InvalidId)));
}

#[test]
fn parse_inventory_id_accepts_number_and_string() {
    assert_eq!(parse_inventory_id(Some(&json!(42))).unwrap(), 42);
    assert_eq!(parse_inventory_id(Some(&json!("42"))).unwrap(), 42);
}

#[test]
fn distinct_count_ignores_duplicates() {
    assert_eq!(distinct_count(&[]), 0);
    assert_eq!(distinct_count(&[3, 1, 3, 2, 1]), 3);
}

#[test]
fn clean_trims_and_drops_blank() {
    assert_eq!(clean(Some("  A123 ")), Some("A123"));
    assert_eq!(clean(Some("   ")), None);
    assert_eq!(clean(None), None);
}

#[test]
fn error_messages_match_api_contract() {
    assert_eq!(InventoryError::MissingId.to_string(), "Missing inventory_id");
    assert_eq!(InventoryError::InvalidId.to_string(), "Invalid inventory_id");
    assert_eq!(InventoryError::BottleNotFound(1).to_string(), "Bottle not found");
    assert_eq!(InventoryError::NotFound(1).to_string(), "Inventory not found");
    assert_eq!(InventoryError::DuplicateSticker(1001).to_string(), "Sticker number already exists");
    assert_eq!(
        InventoryError::NotInSubLocation.to_string(),
        "Some inventory IDs are not in the specified sub-location"
    );
    assert_eq!(InventoryError::InvalidSubLocation.to_string(), "Invalid new_sub_location_id");
}

#[cfg(feature = "live-db-tests")]
mod live {
    use super::*;
    use crate::services::{chemical, location, manufacturer, storage_class};
    use records::{LocationInput, NewChemical, SubLocationInput};
    use time::macros::date;

    const STAMP: Stamp<'static> = Stamp { who: "Live Tester", today: date!(2025 - 03 - 06) };

    async fn pool() -> PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL for live tests");
        crate::db::init_pool(&url, 2).await.expect("pool")
    }

    /// One chemical from one manufacturer, with two shelves in one room.
    /// `block` keeps sticker numbers apart between concurrently running tests.
    struct Shelves {
        tag: String,
        storage_class_id: i32,
        chemical_id: i32,
        manufacturer_id: i32,
        location_id: i32,
        shelf_a: i32,
        shelf_b: i32,
        next_sticker: i64,
    }

    impl Shelves {
        async fn create(pool: &PgPool, label: &str, block: i64) -> Self {
            let tag = format!("{label} {}", std::process::id());
            let storage_class_id = storage_class::create_storage_class(pool, &format!("Class {tag}")).await.unwrap().id;
            let manufacturer_id = manufacturer::add_manufacturer(pool, &format!("Maker {tag}")).await.unwrap();
            let chemical_id = chemical::add_chemical(
                pool,
                &NewChemical {
                    chemical_name: format!("Chem {tag}"),
                    storage_class_id: Some(storage_class_id),
                    manufacturer_id: Some(manufacturer_id),
                    product_number: Some(format!("PN-{tag}")),
                    ..NewChemical::default()
                },
            )
            .await
            .unwrap();
            let location_id = location::create_location(
                pool,
                &LocationInput { building: "Live Hall".into(), room: tag.clone() },
            )
            .await
            .unwrap();
            let shelf = |name: &str| SubLocationInput { name: name.into(), location_id: Some(location_id) };
            let shelf_a = location::create_sublocation(pool, &shelf("Shelf A")).await.unwrap();
            let shelf_b = location::create_sublocation(pool, &shelf("Shelf B")).await.unwrap();
            let next_sticker = 900_000_000 + i64::from(std::process::id() % 100_000) * 1_000 + block * 100;
            Self { tag, storage_class_id, chemical_id, manufacturer_id, location_id, shelf_a, shelf_b, next_sticker }
        }

        async fn bottle(&mut self, pool: &PgPool, sub_location_id: i32) -> i32 {
            self.next_sticker += 1;
            let input = NewBottle {
                sticker_number: Some(self.next_sticker),
                chemical_id: Some(self.chemical_id),
                manufacturer_id: Some(self.manufacturer_id),
                sub_location_id: Some(sub_location_id),
                ..NewBottle::default()
            };
            add_bottle(pool, &input, STAMP).await.unwrap()
        }

        async fn drop_all(self, pool: &PgPool) {
            location::delete_location(pool, self.location_id).await.unwrap();
            chemical::delete_chemical(pool, self.chemical_id).await.unwrap();
            manufacturer::delete_manufacturers(pool, &[self.manufacturer_id]).await.unwrap();
            storage_class::delete_storage_class(pool, self.storage_class_id).await.unwrap();
        }
    }

    async fn live_ids(pool: &PgPool, sub_location_id: i32) -> Vec<i32> {
        let mut ids: Vec<i32> = by_sublocation(pool, sub_location_id)
            .await
            .unwrap()
            .into_iter()
            .map(|b| b.inventory_id)
            .collect();
        ids.sort_unstable();
        ids
    }

    #[tokio::test]
    async fn mark_many_dead_with_a_foreign_bottle_changes_nothing() {
        let pool = pool().await;
        let mut shelves = Shelves::create(&pool, "Batch", 0).await;
        let a1 = shelves.bottle(&pool, shelves.shelf_a).await;
        let a2 = shelves.bottle(&pool, shelves.shelf_a).await;
        let b1 = shelves.bottle(&pool, shelves.shelf_b).await;

        let result = mark_many_dead(&pool, shelves.shelf_a, &[a1, a2, b1], STAMP).await;
        assert!(matches!(result, Err(InventoryError::NotInSubLocation)));
        assert_eq!(live_ids(&pool, shelves.shelf_a).await, vec![a1, a2]);
        assert_eq!(live_ids(&pool, shelves.shelf_b).await, vec![b1]);

        assert_eq!(mark_many_dead(&pool, shelves.shelf_a, &[a1, a2], STAMP).await.unwrap(), 2);
        assert!(live_ids(&pool, shelves.shelf_a).await.is_empty());

        shelves.drop_all(&pool).await;
    }

    #[tokio::test]
    async fn mark_dead_and_alive_repeat_as_no_ops() {
        let pool = pool().await;
        let mut shelves = Shelves::create(&pool, "Toggle", 1).await;
        let id = shelves.bottle(&pool, shelves.shelf_a).await;
        let raw = serde_json::json!(id);

        assert_eq!(set_dead(&pool, Some(&raw), true, STAMP).await.unwrap(), id);
        assert_eq!(set_dead(&pool, Some(&raw), true, STAMP).await.unwrap(), id);
        assert!(live_ids(&pool, shelves.shelf_a).await.is_empty());

        assert_eq!(set_dead(&pool, Some(&raw), false, STAMP).await.unwrap(), id);
        assert_eq!(set_dead(&pool, Some(&raw), false, STAMP).await.unwrap(), id);
        assert_eq!(live_ids(&pool, shelves.shelf_a).await, vec![id]);

        shelves.drop_all(&pool).await;
    }

    #[tokio::test]
    async fn bottle_added_from_product_lookup_lands_on_its_shelf() {
        let pool = pool().await;
        let shelves = Shelves::create(&pool, "Product", 2).await;
        let product_number = format!("pn-{}", shelves.tag);

        let found = chemical::product_number_lookup(&pool, &product_number).await.unwrap().unwrap();
        assert_eq!(found.chemical_id, shelves.chemical_id);
        assert_eq!(found.manufacturer.id, shelves.manufacturer_id);

        let input = NewBottle {
            sticker_number: Some(shelves.next_sticker + 50),
            chemical_id: Some(found.chemical_id),
            manufacturer_id: Some(found.manufacturer.id),
            sub_location_id: Some(shelves.shelf_b),
            product_number: Some(found.product_number.clone()),
            msds: true,
        };
        let id = add_bottle(&pool, &input, STAMP).await.unwrap();

        let chemicals = chemical::list_chemicals(&pool, false).await.unwrap();
        let listed = chemicals.iter().find(|c| c.id == shelves.chemical_id).unwrap();
        assert_eq!(listed.quantity, 1);
        let bottle = &listed.inventory[0];
        assert_eq!(bottle.id, id);
        assert_eq!(bottle.sticker, shelves.next_sticker + 50);
        assert_eq!(bottle.sub_location_id, shelves.shelf_b);
        assert_eq!(bottle.manufacturer_id, shelves.manufacturer_id);
        assert_eq!(bottle.product_number.as_deref(), Some(found.product_number.as_str()));
        assert_eq!(bottle.who_updated.as_deref(), Some("Live Tester"));
        assert_eq!(bottle.last_updated, Some(date!(2025 - 03 - 06)));
        assert!(bottle.msds);

        let joins: i64 = sqlx::query("SELECT count(*) AS n FROM chemical_manufacturers WHERE chemical_id = $1")
            .bind(shelves.chemical_id)
            .fetch_one(&pool)
            .await
            .unwrap()
            .get("n");
        assert_eq!(joins, 1);

        shelves.drop_all(&pool).await;
    }
}
