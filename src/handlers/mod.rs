pub mod average;
pub mod category;
pub mod daily;
pub mod item;
pub mod latest;
pub mod material;
pub mod production;
pub mod skill;

use axum::{http::StatusCode, Json};

use crate::models::item::ErrorResponse;
use crate::store::StoreError;

/// Map a store error onto the HTTP surface: constraint breaches are the
/// client's fault (409), everything else a 500.
pub(crate) fn store_error(err: StoreError) -> (StatusCode, Json<ErrorResponse>) {
    let status = match &err {
        StoreError::Constraint(_) => StatusCode::CONFLICT,
        StoreError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}

pub(crate) fn not_found(what: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: format!("{what} not found"),
        }),
    )
}
