//! Store-level integration tests
//!
//! Exercise the accessors against a real PostgreSQL schema. Each test owns
//! a disjoint id range and deletes its items up front, so reruns and
//! parallel execution stay independent; dependents disappear with their
//! item through the schema's cascades.

mod common;

use chrono::{NaiveDate, NaiveDateTime};
use itemdb_backend::models::average::AverageCreate;
use itemdb_backend::models::category::CategoryCreate;
use itemdb_backend::models::daily::DailyCreate;
use itemdb_backend::models::item::{ItemCreate, ItemUpdate};
use itemdb_backend::models::latest::LatestCreate;
use itemdb_backend::models::material::MaterialCreate;
use itemdb_backend::models::production::ProductionCreate;
use itemdb_backend::models::skill::SkillCreate;
use itemdb_backend::store::{self, StoreError};

use crate::common::setup_test_db;

fn item_input(id: i32, name: &str) -> ItemCreate {
    ItemCreate {
        id,
        name: name.to_owned(),
        market: 1000,
        limit: 5000,
        members: true,
        high_alch: 10,
        low_alch: 5,
    }
}

fn ts(date: (i32, u32, u32), hour: u32, min: u32, sec: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(date.0, date.1, date.2)
        .unwrap()
        .and_hms_opt(hour, min, sec)
        .unwrap()
}

#[tokio::test]
async fn test_create_and_get_item_roundtrip() {
    let Some(db) = setup_test_db().await else { return };
    store::item::delete_item(&db, 9101).await.unwrap();

    let created = store::item::create_item(&db, item_input(9101, "Test Cannonball 9101"))
        .await
        .unwrap();
    assert_eq!(created.id, 9101);
    assert_eq!(created.name, "Test Cannonball 9101");
    assert_eq!(created.market, 1000);
    assert!(created.members);

    let fetched = store::item::get_item(&db, 9101).await.unwrap().unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_create_item_duplicate_id_is_constraint_violation() {
    let Some(db) = setup_test_db().await else { return };
    store::item::delete_item(&db, 9102).await.unwrap();

    store::item::create_item(&db, item_input(9102, "Test Cannonball 9102"))
        .await
        .unwrap();

    let duplicate = store::item::create_item(&db, item_input(9102, "Other Name 9102")).await;
    assert!(matches!(duplicate, Err(StoreError::Constraint(_))));
}

#[tokio::test]
async fn test_get_missing_item_is_none() {
    let Some(db) = setup_test_db().await else { return };

    assert!(store::item::get_item(&db, 9_999_901).await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_missing_rows_is_noop() {
    let Some(db) = setup_test_db().await else { return };

    store::item::delete_item(&db, 9_999_902).await.unwrap();
    store::category::delete_category(&db, 9_999_902).await.unwrap();
    store::latest::delete_latest(&db, 9_999_902).await.unwrap();
    store::average::delete_average(&db, 9_999_902).await.unwrap();
    store::daily::delete_daily(&db, 9_999_902).await.unwrap();
    store::production::delete_production(&db, 9_999_902).await.unwrap();
    store::material::delete_material(&db, 9_999_902).await.unwrap();
    store::skill::delete_skill(&db, 9_999_902).await.unwrap();
}

#[tokio::test]
async fn test_update_item_changes_row_and_noops_on_missing_id() {
    let Some(db) = setup_test_db().await else { return };
    store::item::delete_item(&db, 9104).await.unwrap();

    store::item::create_item(&db, item_input(9104, "Test Cannonball 9104"))
        .await
        .unwrap();

    let update = ItemUpdate {
        id: 9104,
        name: "Test Cannonball 9104".to_owned(),
        market: 1,
        limit: 5000,
        members: true,
        high_alch: 10,
        low_alch: 5,
    };
    store::item::update_item(&db, update.clone()).await.unwrap();

    let fetched = store::item::get_item(&db, 9104).await.unwrap().unwrap();
    assert_eq!(fetched.market, 1);

    // Missing id matches zero rows; still Ok
    let missing = ItemUpdate {
        id: 9_999_904,
        name: "Nobody 9104".to_owned(),
        ..update
    };
    store::item::update_item(&db, missing).await.unwrap();
}

#[tokio::test]
async fn test_categories_by_item_and_items_full() {
    let Some(db) = setup_test_db().await else { return };
    store::item::delete_item(&db, 9106).await.unwrap();

    store::item::create_item(&db, item_input(9106, "Test Cannonball 9106"))
        .await
        .unwrap();
    for name in ["Ammo 9106", "Smithing 9106"] {
        store::category::create_category(
            &db,
            CategoryCreate {
                item_id: 9106,
                name: name.to_owned(),
            },
        )
        .await
        .unwrap();
    }

    let cats = store::category::get_categories_by_item(&db, 9106)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(cats.len(), 2);
    assert_eq!(cats[0].name, "Ammo 9106");

    // Missing parent yields None, not a fault
    assert!(store::category::get_categories_by_item(&db, 9_999_906)
        .await
        .unwrap()
        .is_none());

    // The eager-loaded listing carries the same two categories
    let full = store::item::get_items_full(&db).await.unwrap();
    let entry = full.iter().find(|f| f.item.id == 9106).unwrap();
    assert_eq!(entry.categories.len(), 2);

    // Dangling category insert is rejected
    let dangling = store::category::create_category(
        &db,
        CategoryCreate {
            item_id: 9_999_906,
            name: "Dangling 9106".to_owned(),
        },
    )
    .await;
    assert!(matches!(dangling, Err(StoreError::Constraint(_))));
}

#[tokio::test]
async fn test_daily_duplicate_date_is_constraint_violation() {
    let Some(db) = setup_test_db().await else { return };
    store::item::delete_item(&db, 9107).await.unwrap();

    store::item::create_item(&db, item_input(9107, "Test Cannonball 9107"))
        .await
        .unwrap();

    let date = NaiveDate::from_ymd_opt(2031, 1, 7);
    let first = store::daily::create_daily(
        &db,
        DailyCreate {
            item_id: 9107,
            price: 25,
            volume: 1000,
            date,
        },
    )
    .await
    .unwrap();
    assert_eq!(first.date, date.unwrap());

    let second = store::daily::create_daily(
        &db,
        DailyCreate {
            item_id: 9107,
            price: 50,
            volume: 1500,
            date,
        },
    )
    .await;
    assert!(matches!(second, Err(StoreError::Constraint(_))));
}

#[tokio::test]
async fn test_latest_all_dedupes_to_newest_per_item() {
    let Some(db) = setup_test_db().await else { return };
    store::item::delete_item(&db, 9108).await.unwrap();
    store::item::delete_item(&db, 9109).await.unwrap();

    store::item::create_item(&db, item_input(9108, "Test Cannonball 9108"))
        .await
        .unwrap();
    store::item::create_item(&db, item_input(9109, "Test Cannonball 9109"))
        .await
        .unwrap();

    // Far-future timestamps so these rows sort ahead of anything else
    for (item_id, min) in [(9108, 0), (9108, 5), (9109, 3)] {
        store::latest::create_latest(
            &db,
            LatestCreate {
                item_id,
                low_price: 180,
                high_price: 200,
                timestamp: ts((2099, 1, 1), 10, min, 0),
            },
        )
        .await
        .unwrap();
    }

    let rows = store::latest::get_latest_all(&db, 100).await.unwrap();
    assert_eq!(rows[0].item_id, 9108);
    assert_eq!(rows[0].timestamp, ts((2099, 1, 1), 10, 5, 0));
    assert_eq!(rows[1].item_id, 9109);
    assert_eq!(rows[1].timestamp, ts((2099, 1, 1), 10, 3, 0));
    // The superseded 10:00 observation for 9108 is not in the listing
    assert!(!rows
        .iter()
        .any(|r| r.item_id == 9108 && r.timestamp == ts((2099, 1, 1), 10, 0, 0)));

    let capped = store::latest::get_latest_all(&db, 1).await.unwrap();
    assert_eq!(capped.len(), 1);
    assert_eq!(capped[0].item_id, 9108);
}

#[tokio::test]
async fn test_latest_and_average_timestamps_floored_to_minute() {
    let Some(db) = setup_test_db().await else { return };
    store::item::delete_item(&db, 9110).await.unwrap();

    store::item::create_item(&db, item_input(9110, "Test Cannonball 9110"))
        .await
        .unwrap();

    let latest = store::latest::create_latest(
        &db,
        LatestCreate {
            item_id: 9110,
            low_price: 1,
            high_price: 10,
            timestamp: ts((2031, 3, 1), 10, 15, 42),
        },
    )
    .await
    .unwrap();
    assert_eq!(latest.timestamp, ts((2031, 3, 1), 10, 15, 0));

    let average = store::average::create_average(
        &db,
        AverageCreate {
            item_id: 9110,
            low_price: 1,
            high_price: 10,
            low_volume: 10,
            high_volume: 25,
            timestamp: ts((2031, 3, 1), 11, 20, 7),
        },
    )
    .await
    .unwrap();
    assert_eq!(average.timestamp, ts((2031, 3, 1), 11, 20, 0));

    // A second observation in the same minute lands on the same bucket and
    // trips the unique timestamp constraint
    let same_bucket = store::average::create_average(
        &db,
        AverageCreate {
            item_id: 9110,
            low_price: 2,
            high_price: 12,
            low_volume: 11,
            high_volume: 26,
            timestamp: ts((2031, 3, 1), 11, 20, 55),
        },
    )
    .await;
    assert!(matches!(same_bucket, Err(StoreError::Constraint(_))));

    let by_item = store::average::get_average_by_item(&db, 9110)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(by_item.len(), 1);
    assert_eq!(by_item[0].low_price, 1);
}

#[tokio::test]
async fn test_production_full_loads_materials_and_skills() {
    let Some(db) = setup_test_db().await else { return };
    store::item::delete_item(&db, 9111).await.unwrap();
    store::item::delete_item(&db, 9112).await.unwrap();

    store::item::create_item(&db, item_input(9111, "Test Cannonball 9111"))
        .await
        .unwrap();
    store::item::create_item(&db, item_input(9112, "Steel bar 9112"))
        .await
        .unwrap();

    let production = store::production::create_production(
        &db,
        ProductionCreate {
            item_id: 9111,
            ticks: 2,
            facilities: "Furnace".to_owned(),
            members: true,
            cost: 1,
            quantity: 4,
        },
    )
    .await
    .unwrap();

    store::material::create_material(
        &db,
        MaterialCreate {
            production_id: production.id,
            name: "Steel bar 9112".to_owned(),
            quantity: 1,
        },
    )
    .await
    .unwrap();
    store::skill::create_skill(
        &db,
        SkillCreate {
            production_id: production.id,
            experience: 25,
            level: 35,
            name: "Smithing".to_owned(),
            boostable: false,
        },
    )
    .await
    .unwrap();

    let full = store::production::get_production_full(&db, production.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(full.production.ticks, 2);
    assert_eq!(full.materials.len(), 1);
    assert_eq!(full.materials[0].name, "Steel bar 9112");
    assert_eq!(full.skills.len(), 1);
    assert_eq!(full.skills[0].name, "Smithing");

    let by_item = store::production::get_productions_by_item(&db, 9111)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(by_item.len(), 1);

    // Materials must reference an existing item name
    let dangling = store::material::create_material(
        &db,
        MaterialCreate {
            production_id: production.id,
            name: "No Such Item 9111".to_owned(),
            quantity: 1,
        },
    )
    .await;
    assert!(matches!(dangling, Err(StoreError::Constraint(_))));

    assert!(store::production::get_production_full(&db, 9_999_911)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_item_delete_cascades_to_dependents() {
    let Some(db) = setup_test_db().await else { return };
    store::item::delete_item(&db, 9113).await.unwrap();

    store::item::create_item(&db, item_input(9113, "Test Cannonball 9113"))
        .await
        .unwrap();
    let category = store::category::create_category(
        &db,
        CategoryCreate {
            item_id: 9113,
            name: "Ammo 9113".to_owned(),
        },
    )
    .await
    .unwrap();
    let latest = store::latest::create_latest(
        &db,
        LatestCreate {
            item_id: 9113,
            low_price: 180,
            high_price: 200,
            timestamp: ts((2031, 4, 1), 9, 30, 0),
        },
    )
    .await
    .unwrap();
    let production = store::production::create_production(
        &db,
        ProductionCreate {
            item_id: 9113,
            ticks: 2,
            facilities: "Furnace".to_owned(),
            members: true,
            cost: 1,
            quantity: 4,
        },
    )
    .await
    .unwrap();
    let skill = store::skill::create_skill(
        &db,
        SkillCreate {
            production_id: production.id,
            experience: 25,
            level: 35,
            name: "Smithing".to_owned(),
            boostable: false,
        },
    )
    .await
    .unwrap();

    store::item::delete_item(&db, 9113).await.unwrap();

    assert!(store::item::get_item(&db, 9113).await.unwrap().is_none());
    assert!(store::category::get_category(&db, category.id)
        .await
        .unwrap()
        .is_none());
    assert!(store::latest::get_latest(&db, latest.id)
        .await
        .unwrap()
        .is_none());
    assert!(store::production::get_production(&db, production.id)
        .await
        .unwrap()
        .is_none());
    assert!(store::skill::get_skill(&db, skill.id)
        .await
        .unwrap()
        .is_none());
}
