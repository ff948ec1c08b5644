use chrono::NaiveDateTime;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct LatestCreate {
    pub item_id: i32,
    pub low_price: i64,
    pub high_price: i64,
    /// Floored to the minute before persisting
    pub timestamp: NaiveDateTime,
}
