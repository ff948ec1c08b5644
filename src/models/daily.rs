use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct DailyCreate {
    pub item_id: i32,
    pub price: i64,
    pub volume: i64,
    /// Defaults to the current date when omitted; unique across the table
    pub date: Option<NaiveDate>,
}
