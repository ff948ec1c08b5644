// src/lib.rs

use sea_orm::DatabaseConnection;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

pub mod entities {
    pub mod prelude;

    pub mod average_prices;
    pub mod categories;
    pub mod daily_prices;
    pub mod items;
    pub mod latest_prices;
    pub mod materials;
    pub mod productions;
    pub mod skills;
}

pub mod handlers;
pub mod models;
pub mod routes;
pub mod store;
