use chrono::NaiveDateTime;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AverageCreate {
    pub item_id: i32,
    pub low_price: i64,
    pub high_price: i64,
    pub low_volume: i64,
    pub high_volume: i64,
    /// Floored to the minute before persisting; unique across the table
    pub timestamp: NaiveDateTime,
}
