use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};
use std::env;

/// Connect to the database named by TEST_DATABASE_URL and bring the schema
/// up to date. Returns None when the variable is unset so the suite stays
/// green on machines without a database.
pub async fn setup_test_db() -> Option<DatabaseConnection> {
    let Ok(database_url) = env::var("TEST_DATABASE_URL") else {
        eprintln!("TEST_DATABASE_URL not set, skipping database test");
        return None;
    };

    let db = Database::connect(&database_url)
        .await
        .expect("failed to connect to test database");

    Migrator::up(&db, None)
        .await
        .expect("failed to migrate test database");

    Some(db)
}
