use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct SkillCreate {
    pub production_id: i32,
    pub experience: i32,
    pub level: i32,
    pub name: String,
    pub boostable: bool,
}
