use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategoryCreate {
    pub name: Option<String>,
    pub color: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub color: Option<String>,
}
