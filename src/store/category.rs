//! Category accessors

use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryOrder, Set,
};

use super::StoreError;
use crate::entities::categories;
use crate::entities::prelude::{Categories, Items};
use crate::models::category::CategoryCreate;

/// Insert a new category. A dangling item_id fails with
/// [`StoreError::Constraint`].
pub async fn create_category(
    db: &DatabaseConnection,
    input: CategoryCreate,
) -> Result<categories::Model, StoreError> {
    let row = categories::ActiveModel {
        item_id: Set(input.item_id),
        name: Set(input.name),
        ..Default::default()
    };
    Ok(row.insert(db).await?)
}

pub async fn get_category(
    db: &DatabaseConnection,
    cat_id: i32,
) -> Result<Option<categories::Model>, StoreError> {
    Ok(Categories::find_by_id(cat_id).one(db).await?)
}

/// Two-step lookup: a missing parent item yields `Ok(None)` instead of a
/// fault while dereferencing the relation.
pub async fn get_categories_by_item(
    db: &DatabaseConnection,
    item_id: i32,
) -> Result<Option<Vec<categories::Model>>, StoreError> {
    let Some(item) = Items::find_by_id(item_id).one(db).await? else {
        return Ok(None);
    };
    let rows = item
        .find_related(Categories)
        .order_by_asc(categories::Column::Id)
        .all(db)
        .await?;
    Ok(Some(rows))
}

pub async fn delete_category(db: &DatabaseConnection, cat_id: i32) -> Result<(), StoreError> {
    let Some(category) = Categories::find_by_id(cat_id).one(db).await? else {
        return Ok(());
    };
    category.delete(db).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::items;
    use chrono::{NaiveDate, NaiveDateTime};
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn ts() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn item_row() -> items::Model {
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

    fn cat_row(id: i32, name: &str) -> categories::Model {
        categories::Model {
            id,
            item_id: 2,
            name: name.to_owned(),
            created: ts(),
            updated: ts(),
        }
    }

    #[tokio::test]
    async fn test_get_categories_by_item_missing_parent_is_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<items::Model>::new()])
            .into_connection();

        let result = get_categories_by_item(&db, 9999).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_get_categories_by_item_returns_children() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![item_row()]])
            .append_query_results([vec![cat_row(1, "Ammo"), cat_row(2, "Smithing")]])
            .into_connection();

        let cats = get_categories_by_item(&db, 2).await.unwrap().unwrap();
        assert_eq!(cats.len(), 2);
        assert_eq!(cats[0].name, "Ammo");
    }
}
