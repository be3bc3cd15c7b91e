use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TodoCreate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<String>,
    /// Category id.
    pub category: Option<String>,
    pub due_date: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TodoPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<String>,
    pub category: Option<String>,
    pub due_date: Option<String>,
}
