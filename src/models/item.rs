//! Item request/response models
//!
//! Also carries the shared `ErrorResponse` and list `ListQuery` types used
//! across the handler modules.

use serde::{Deserialize, Serialize};

use crate::entities::{average_prices, categories, daily_prices, items, latest_prices, productions};

/// Default row cap for list endpoints
pub const DEFAULT_LIMIT: u64 = 100;

#[derive(Debug, Clone, Deserialize)]
pub struct ItemCreate {
    /// Caller-assigned item id
    pub id: i32,
    pub name: String,
    pub market: i32,
    pub limit: i32,
    pub members: bool,
    pub high_alch: i32,
    pub low_alch: i32,
}

/// Full-row update keyed on `id`. Updating a missing id is a silent no-op.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemUpdate {
    pub id: i32,
    pub name: String,
    pub market: i32,
    pub limit: i32,
    pub members: bool,
    pub high_alch: i32,
    pub low_alch: i32,
}

/// Query parameters for list endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct ListQuery {
    /// Maximum number of rows to return (default: 100)
    pub limit: Option<u64>,
}

impl ListQuery {
    pub fn limit(&self) -> u64 {
        self.limit.unwrap_or(DEFAULT_LIMIT)
    }
}

/// An item with every dependent collection eager-loaded
#[derive(Debug, Clone, Serialize)]
pub struct ItemFull {
    #[serde(flatten)]
    pub item: items::Model,
    pub categories: Vec<categories::Model>,
    pub latest: Vec<latest_prices::Model>,
    pub average: Vec<average_prices::Model>,
    pub daily: Vec<daily_prices::Model>,
    pub productions: Vec<productions::Model>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_query_default_limit() {
        let query = ListQuery { limit: None };
        assert_eq!(query.limit(), DEFAULT_LIMIT);
    }

    #[test]
    fn test_list_query_explicit_limit() {
        let query = ListQuery { limit: Some(5) };
        assert_eq!(query.limit(), 5);
    }
}
