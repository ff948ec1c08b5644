use serde::{Deserialize, Serialize};

use crate::entities::{materials, productions, skills};

#[derive(Debug, Clone, Deserialize)]
pub struct ProductionCreate {
    pub item_id: i32,
    pub ticks: i32,
    pub facilities: String,
    pub members: bool,
    pub cost: i64,
    pub quantity: i32,
}

/// A recipe with its material and skill requirements eager-loaded
#[derive(Debug, Clone, Serialize)]
pub struct ProductionFull {
    #[serde(flatten)]
    pub production: productions::Model,
    pub materials: Vec<materials::Model>,
    pub skills: Vec<skills::Model>,
}
