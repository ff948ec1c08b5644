//! Router assembly
//!
//! One route per store accessor; shared by the binary and the integration
//! tests.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{handlers, AppState};

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route(
            "/items/",
            get(handlers::item::get_items)
                .post(handlers::item::create_item)
                .put(handlers::item::update_item),
        )
        .route("/items/full/", get(handlers::item::get_items_full))
        .route(
            "/items/{item_id}/",
            get(handlers::item::get_item).delete(handlers::item::delete_item),
        )
        .route(
            "/items/{item_id}/categories/",
            get(handlers::category::get_categories_by_item),
        )
        .route(
            "/items/{item_id}/latest/",
            get(handlers::latest::get_latest_by_item),
        )
        .route(
            "/items/{item_id}/average/",
            get(handlers::average::get_average_by_item),
        )
        .route(
            "/items/{item_id}/daily/",
            get(handlers::daily::get_daily_by_item),
        )
        .route(
            "/items/{item_id}/productions/",
            get(handlers::production::get_productions_by_item),
        )
        .route("/categories/", post(handlers::category::create_category))
        .route(
            "/categories/{cat_id}/",
            get(handlers::category::get_category).delete(handlers::category::delete_category),
        )
        .route(
            "/latest/",
            get(handlers::latest::get_latest_all).post(handlers::latest::create_latest),
        )
        .route(
            "/latest/{latest_id}/",
            get(handlers::latest::get_latest).delete(handlers::latest::delete_latest),
        )
        .route(
            "/average/",
            get(handlers::average::get_average_all).post(handlers::average::create_average),
        )
        .route(
            "/average/{average_id}/",
            get(handlers::average::get_average).delete(handlers::average::delete_average),
        )
        .route(
            "/daily/",
            get(handlers::daily::get_daily_all).post(handlers::daily::create_daily),
        )
        .route(
            "/daily/{daily_id}/",
            get(handlers::daily::get_daily).delete(handlers::daily::delete_daily),
        )
        .route(
            "/productions/",
            post(handlers::production::create_production),
        )
        .route(
            "/productions/{production_id}/",
            get(handlers::production::get_production)
                .delete(handlers::production::delete_production),
        )
        .route(
            "/productions/{production_id}/full/",
            get(handlers::production::get_production_full),
        )
        .route(
            "/productions/{production_id}/materials/",
            get(handlers::material::get_materials_by_production),
        )
        .route(
            "/productions/{production_id}/skills/",
            get(handlers::skill::get_skills_by_production),
        )
        .route("/materials/", post(handlers::material::create_material))
        .route(
            "/materials/{material_id}/",
            get(handlers::material::get_material).delete(handlers::material::delete_material),
        )
        .route("/skills/", post(handlers::skill::create_skill))
        .route(
            "/skills/{skill_id}/",
            get(handlers::skill::get_skill).delete(handlers::skill::delete_skill),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn root() -> &'static str {
    "itemdb backend"
}
