pub use sea_orm_migration::prelude::*;

mod m20250406_000001_create_items;
mod m20250406_000002_create_categories;
mod m20250412_000001_create_latest_prices;
mod m20250412_000002_create_average_prices;
mod m20250412_000003_create_daily_prices;
mod m20250503_000001_create_productions;
mod m20250503_000002_create_materials;
mod m20250503_000003_create_skills;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250406_000001_create_items::Migration),
            Box::new(m20250406_000002_create_categories::Migration),
            Box::new(m20250412_000001_create_latest_prices::Migration),
            Box::new(m20250412_000002_create_average_prices::Migration),
            Box::new(m20250412_000003_create_daily_prices::Migration),
            Box::new(m20250503_000001_create_productions::Migration),
            Box::new(m20250503_000002_create_materials::Migration),
            Box::new(m20250503_000003_create_skills::Migration),
        ]
    }
}
