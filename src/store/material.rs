//! Material accessors

use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryOrder, Set,
};

use super::StoreError;
use crate::entities::materials;
use crate::entities::prelude::{Materials, Productions};
use crate::models::material::MaterialCreate;

/// Insert a new material. A dangling production_id or an unknown item name
/// fails with [`StoreError::Constraint`].
pub async fn create_material(
    db: &DatabaseConnection,
    input: MaterialCreate,
) -> Result<materials::Model, StoreError> {
    let row = materials::ActiveModel {
        production_id: Set(input.production_id),
        name: Set(input.name),
        quantity: Set(input.quantity),
        ..Default::default()
    };
    Ok(row.insert(db).await?)
}

pub async fn get_material(
    db: &DatabaseConnection,
    material_id: i32,
) -> Result<Option<materials::Model>, StoreError> {
    Ok(Materials::find_by_id(material_id).one(db).await?)
}

/// Two-step lookup: a missing parent recipe yields `Ok(None)`.
pub async fn get_materials_by_production(
    db: &DatabaseConnection,
    production_id: i32,
) -> Result<Option<Vec<materials::Model>>, StoreError> {
    let Some(production) = Productions::find_by_id(production_id).one(db).await? else {
        return Ok(None);
    };
    let rows = production
        .find_related(Materials)
        .order_by_asc(materials::Column::Id)
        .all(db)
        .await?;
    Ok(Some(rows))
}

pub async fn delete_material(db: &DatabaseConnection, material_id: i32) -> Result<(), StoreError> {
    let Some(material) = Materials::find_by_id(material_id).one(db).await? else {
        return Ok(());
    };
    material.delete(db).await?;
    Ok(())
}
