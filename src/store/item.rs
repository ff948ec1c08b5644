//! Item accessors

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, LoaderTrait, ModelTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};

use super::StoreError;
use crate::entities::items;
use crate::entities::prelude::{
    AveragePrices, Categories, DailyPrices, Items, LatestPrices, Productions,
};
use crate::models::item::{ItemCreate, ItemFull, ItemUpdate};

/// Insert a new item. The id comes from the caller; a duplicate id or name
/// fails with [`StoreError::Constraint`].
pub async fn create_item(
    db: &DatabaseConnection,
    input: ItemCreate,
) -> Result<items::Model, StoreError> {
    let row = items::ActiveModel {
        id: Set(input.id),
        name: Set(input.name),
        market: Set(input.market),
        limit: Set(input.limit),
        members: Set(input.members),
        high_alch: Set(input.high_alch),
        low_alch: Set(input.low_alch),
        ..Default::default()
    };
    Ok(row.insert(db).await?)
}

pub async fn get_item(
    db: &DatabaseConnection,
    item_id: i32,
) -> Result<Option<items::Model>, StoreError> {
    Ok(Items::find_by_id(item_id).one(db).await?)
}

pub async fn get_items(
    db: &DatabaseConnection,
    limit: u64,
) -> Result<Vec<items::Model>, StoreError> {
    Ok(Items::find()
        .order_by_asc(items::Column::Id)
        .limit(limit)
        .all(db)
        .await?)
}

/// Every item with all dependent collections eager-loaded through the
/// SeaORM loader (one query per relation, not one per item).
pub async fn get_items_full(db: &DatabaseConnection) -> Result<Vec<ItemFull>, StoreError> {
    let items = Items::find().order_by_asc(items::Column::Id).all(db).await?;

    let mut categories = items.load_many(Categories, db).await?;
    let mut latest = items.load_many(LatestPrices, db).await?;
    let mut average = items.load_many(AveragePrices, db).await?;
    let mut daily = items.load_many(DailyPrices, db).await?;
    let mut productions = items.load_many(Productions, db).await?;

    let mut full = Vec::with_capacity(items.len());
    for (idx, item) in items.into_iter().enumerate() {
        full.push(ItemFull {
            item,
            categories: std::mem::take(&mut categories[idx]),
            latest: std::mem::take(&mut latest[idx]),
            average: std::mem::take(&mut average[idx]),
            daily: std::mem::take(&mut daily[idx]),
            productions: std::mem::take(&mut productions[idx]),
        });
    }
    Ok(full)
}

/// Row-level update keyed on the id. A missing id matches zero rows and
/// stays a silent no-op.
pub async fn update_item(db: &DatabaseConnection, input: ItemUpdate) -> Result<(), StoreError> {
    Items::update_many()
        .set(items::ActiveModel {
            name: Set(input.name),
            market: Set(input.market),
            limit: Set(input.limit),
            members: Set(input.members),
            high_alch: Set(input.high_alch),
            low_alch: Set(input.low_alch),
            updated: Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .filter(items::Column::Id.eq(input.id))
        .exec(db)
        .await?;
    Ok(())
}

/// Fetch-first delete; absent rows are a no-op. Dependents go with the row
/// through the schema's ON DELETE CASCADE constraints.
pub async fn delete_item(db: &DatabaseConnection, item_id: i32) -> Result<(), StoreError> {
    let Some(item) = Items::find_by_id(item_id).one(db).await? else {
        return Ok(());
    };
    item.delete(db).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn ts() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn cannonball() -> items::Model {
        items::Model {
            id: 2,
            name: "Cannonball".to_owned(),
            market: 1000,
            limit: 5000,
            members: true,
            high_alch: 10,
            low_alch: 5,
            created: ts(),
            updated: ts(),
        }
    }

    #[tokio::test]
    async fn test_get_item_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![cannonball()]])
            .into_connection();

        let found = get_item(&db, 2).await.unwrap();
        assert_eq!(found, Some(cannonball()));
    }

    #[tokio::test]
    async fn test_get_item_missing_is_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<items::Model>::new()])
            .into_connection();

        assert!(get_item(&db, 9999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_item_returns_persisted_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 2,
                rows_affected: 1,
            }])
            .append_query_results([vec![cannonball()]])
            .into_connection();

        let input = ItemCreate {
            id: 2,
            name: "Cannonball".to_owned(),
            market: 1000,
            limit: 5000,
            members: true,
            high_alch: 10,
            low_alch: 5,
        };
        let created = create_item(&db, input).await.unwrap();
        assert_eq!(created.id, 2);
        assert_eq!(created.name, "Cannonball");
    }

    #[tokio::test]
    async fn test_delete_item_missing_is_noop() {
        // Only the lookup result is appended; a delete attempt would find
        // no exec result and the mock would error out.
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<items::Model>::new()])
            .into_connection();

        assert!(delete_item(&db, 9999).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_item_removes_found_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![cannonball()]])
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        assert!(delete_item(&db, 2).await.is_ok());
    }
}
