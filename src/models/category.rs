use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryCreate {
    pub item_id: i32,
    pub name: String,
}
