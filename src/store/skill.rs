//! Skill accessors

use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryOrder, Set,
};

use super::StoreError;
use crate::entities::prelude::{Productions, Skills};
use crate::entities::skills;
use crate::models::skill::SkillCreate;

pub async fn create_skill(
    db: &DatabaseConnection,
    input: SkillCreate,
) -> Result<skills::Model, StoreError> {
    let row = skills::ActiveModel {
        production_id: Set(input.production_id),
        experience: Set(input.experience),
        level: Set(input.level),
        name: Set(input.name),
        boostable: Set(input.boostable),
        ..Default::default()
    };
    Ok(row.insert(db).await?)
}

pub async fn get_skill(
    db: &DatabaseConnection,
    skill_id: i32,
) -> Result<Option<skills::Model>, StoreError> {
    Ok(Skills::find_by_id(skill_id).one(db).await?)
}

/// Two-step lookup: a missing parent recipe yields `Ok(None)`.
pub async fn get_skills_by_production(
    db: &DatabaseConnection,
    production_id: i32,
) -> Result<Option<Vec<skills::Model>>, StoreError> {
    let Some(production) = Productions::find_by_id(production_id).one(db).await? else {
        return Ok(None);
    };
    let rows = production
        .find_related(Skills)
        .order_by_asc(skills::Column::Id)
        .all(db)
        .await?;
    Ok(Some(rows))
}

pub async fn delete_skill(db: &DatabaseConnection, skill_id: i32) -> Result<(), StoreError> {
    let Some(skill) = Skills::find_by_id(skill_id).one(db).await? else {
        return Ok(());
    };
    skill.delete(db).await?;
    Ok(())
}
