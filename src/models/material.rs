use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct MaterialCreate {
    pub production_id: i32,
    /// Consumed item's display name; must match an existing items.name
    pub name: String,
    pub quantity: i32,
}
