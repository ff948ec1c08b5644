//! Average price accessors

use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryOrder, QuerySelect, Set,
};

use super::{truncate_to_minute, StoreError};
use crate::entities::average_prices;
use crate::entities::prelude::{AveragePrices, Items};
use crate::models::average::AverageCreate;

/// Insert a new averaged observation. The timestamp is floored to the
/// minute first; a duplicate bucket fails with [`StoreError::Constraint`].
pub async fn create_average(
    db: &DatabaseConnection,
    input: AverageCreate,
) -> Result<average_prices::Model, StoreError> {
    let row = average_prices::ActiveModel {
        item_id: Set(input.item_id),
        low_price: Set(input.low_price),
        high_price: Set(input.high_price),
        low_volume: Set(input.low_volume),
        high_volume: Set(input.high_volume),
        timestamp: Set(truncate_to_minute(input.timestamp, 1)),
        ..Default::default()
    };
    Ok(row.insert(db).await?)
}

pub async fn get_average(
    db: &DatabaseConnection,
    average_id: i32,
) -> Result<Option<average_prices::Model>, StoreError> {
    Ok(AveragePrices::find_by_id(average_id).one(db).await?)
}

pub async fn get_average_all(
    db: &DatabaseConnection,
    limit: u64,
) -> Result<Vec<average_prices::Model>, StoreError> {
    Ok(AveragePrices::find()
        .order_by_desc(average_prices::Column::Timestamp)
        .limit(limit)
        .all(db)
        .await?)
}

/// Two-step lookup: a missing parent item yields `Ok(None)`.
pub async fn get_average_by_item(
    db: &DatabaseConnection,
    item_id: i32,
) -> Result<Option<Vec<average_prices::Model>>, StoreError> {
    let Some(item) = Items::find_by_id(item_id).one(db).await? else {
        return Ok(None);
    };
    let rows = item
        .find_related(AveragePrices)
        .order_by_desc(average_prices::Column::Timestamp)
        .all(db)
        .await?;
    Ok(Some(rows))
}

pub async fn delete_average(db: &DatabaseConnection, average_id: i32) -> Result<(), StoreError> {
    let Some(average) = AveragePrices::find_by_id(average_id).one(db).await? else {
        return Ok(());
    };
    average.delete(db).await?;
    Ok(())
}
