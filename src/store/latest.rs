//! Latest price accessors
//!
//! Timestamps are floored to the minute before insert. The list accessor
//! deduplicates to the most recent observation per item.

use std::collections::HashSet;

use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryOrder, Set,
};

use super::{truncate_to_minute, StoreError};
use crate::entities::latest_prices;
use crate::entities::prelude::{Items, LatestPrices};
use crate::models::latest::LatestCreate;

pub async fn create_latest(
    db: &DatabaseConnection,
    input: LatestCreate,
) -> Result<latest_prices::Model, StoreError> {
    let row = latest_prices::ActiveModel {
        item_id: Set(input.item_id),
        low_price: Set(input.low_price),
        high_price: Set(input.high_price),
        timestamp: Set(truncate_to_minute(input.timestamp, 1)),
        ..Default::default()
    };
    Ok(row.insert(db).await?)
}

pub async fn get_latest(
    db: &DatabaseConnection,
    latest_id: i32,
) -> Result<Option<latest_prices::Model>, StoreError> {
    Ok(LatestPrices::find_by_id(latest_id).one(db).await?)
}

/// Up to `limit` rows, one per distinct item (its most recent observation),
/// ordered by descending timestamp.
pub async fn get_latest_all(
    db: &DatabaseConnection,
    limit: u64,
) -> Result<Vec<latest_prices::Model>, StoreError> {
    let rows = LatestPrices::find()
        .order_by_desc(latest_prices::Column::Timestamp)
        .order_by_desc(latest_prices::Column::Id)
        .all(db)
        .await?;
    Ok(newest_per_item(rows, limit))
}

/// Keep the first row seen per item. Rows must already be sorted newest
/// first.
fn newest_per_item(rows: Vec<latest_prices::Model>, limit: u64) -> Vec<latest_prices::Model> {
    let mut seen = HashSet::new();
    rows.into_iter()
        .filter(|row| seen.insert(row.item_id))
        .take(limit as usize)
        .collect()
}

/// Two-step lookup: a missing parent item yields `Ok(None)`.
pub async fn get_latest_by_item(
    db: &DatabaseConnection,
    item_id: i32,
) -> Result<Option<Vec<latest_prices::Model>>, StoreError> {
    let Some(item) = Items::find_by_id(item_id).one(db).await? else {
        return Ok(None);
    };
    let rows = item
        .find_related(LatestPrices)
        .order_by_desc(latest_prices::Column::Timestamp)
        .all(db)
        .await?;
    Ok(Some(rows))
}

pub async fn delete_latest(db: &DatabaseConnection, latest_id: i32) -> Result<(), StoreError> {
    let Some(latest) = LatestPrices::find_by_id(latest_id).one(db).await? else {
        return Ok(());
    };
    latest.delete(db).await?;
    Ok(())
}
