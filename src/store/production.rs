//! Production recipe accessors

use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryOrder, Set,
};

use super::StoreError;
use crate::entities::prelude::{Items, Materials, Productions, Skills};
use crate::entities::{materials, productions, skills};
use crate::models::production::{ProductionCreate, ProductionFull};

pub async fn create_production(
    db: &DatabaseConnection,
    input: ProductionCreate,
) -> Result<productions::Model, StoreError> {
    let row = productions::ActiveModel {
        item_id: Set(input.item_id),
        ticks: Set(input.ticks),
        facilities: Set(input.facilities),
        members: Set(input.members),
        cost: Set(input.cost),
        quantity: Set(input.quantity),
        ..Default::default()
    };
    Ok(row.insert(db).await?)
}

pub async fn get_production(
    db: &DatabaseConnection,
    production_id: i32,
) -> Result<Option<productions::Model>, StoreError> {
    Ok(Productions::find_by_id(production_id).one(db).await?)
}

/// The recipe with its material and skill requirements eager-loaded.
/// A missing recipe yields `Ok(None)`.
pub async fn get_production_full(
    db: &DatabaseConnection,
    production_id: i32,
) -> Result<Option<ProductionFull>, StoreError> {
    let Some(production) = Productions::find_by_id(production_id).one(db).await? else {
        return Ok(None);
    };
    let materials = production
        .find_related(Materials)
        .order_by_asc(materials::Column::Id)
        .all(db)
        .await?;
    let skills = production
        .find_related(Skills)
        .order_by_asc(skills::Column::Id)
        .all(db)
        .await?;
    Ok(Some(ProductionFull {
        production,
        materials,
        skills,
    }))
}

/// Two-step lookup: a missing parent item yields `Ok(None)`.
pub async fn get_productions_by_item(
    db: &DatabaseConnection,
    item_id: i32,
) -> Result<Option<Vec<productions::Model>>, StoreError> {
    let Some(item) = Items::find_by_id(item_id).one(db).await? else {
        return Ok(None);
    };
    let rows = item
        .find_related(Productions)
        .order_by_asc(productions::Column::Id)
        .all(db)
        .await?;
    Ok(Some(rows))
}

/// Fetch-first delete; materials and skills go with the recipe through the
/// schema's ON DELETE CASCADE constraints.
pub async fn delete_production(
    db: &DatabaseConnection,
    production_id: i32,
) -> Result<(), StoreError> {
    let Some(production) = Productions::find_by_id(production_id).one(db).await? else {
        return Ok(());
    };
    production.delete(db).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn ts() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn recipe() -> productions::Model {
        productions::Model {
            id: 1,
            item_id: 2,
            ticks: 2,
            facilities: "Furnace".to_owned(),
            members: true,
            cost: 1,
            quantity: 4,
            created: ts(),
            updated: ts(),
        }
    }

    #[tokio::test]
    async fn test_get_production_full_missing_is_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<productions::Model>::new()])
            .into_connection();

        assert!(get_production_full(&db, 9999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_production_full_loads_requirements() {
        let material = materials::Model {
            id: 1,
            production_id: 1,
            name: "Steel bar".to_owned(),
            quantity: 1,
            created: ts(),
            updated: ts(),
        };
        let skill = skills::Model {
            id: 1,
            production_id: 1,
            experience: 25,
            level: 35,
            name: "Smithing".to_owned(),
            boostable: false,
            created: ts(),
            updated: ts(),
        };
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![recipe()]])
            .append_query_results([vec![material]])
            .append_query_results([vec![skill]])
            .into_connection();

        let full = get_production_full(&db, 1).await.unwrap().unwrap();
        assert_eq!(full.production.id, 1);
        assert_eq!(full.materials.len(), 1);
        assert_eq!(full.materials[0].name, "Steel bar");
        assert_eq!(full.skills.len(), 1);
        assert_eq!(full.skills[0].name, "Smithing");
    }
}
