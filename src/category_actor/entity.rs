use std::convert::Infallible;

use chrono::{DateTime, Utc};

use crate::actor_framework::Entity;
use crate::domain::{Category, DEFAULT_CATEGORY_COLOR};
use crate::error::StoreResult;
use crate::validation::{non_blank, required};

use super::dtos::{CategoryCreate, CategoryPatch};

impl Entity for Category {
    type CreatePayload = CategoryCreate;
    type Patch = CategoryPatch;
    type Action = Infallible;
    type ActionResult = ();

    const KIND: &'static str = "Category";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_create(id: String, created_at: DateTime<Utc>, params: CategoryCreate) -> StoreResult<Self> {
        Ok(Self {
            id,
            name: required("name", params.name)?,
            color: non_blank(params.color).unwrap_or_else(|| DEFAULT_CATEGORY_COLOR.to_string()),
            created_at,
        })
    }

    fn on_update(&mut self, patch: CategoryPatch) -> StoreResult<()> {
        if let Some(name) = non_blank(patch.name) {
            self.name = name;
        }
        if let Some(color) = non_blank(patch.color) {
            self.color = color;
        }
        Ok(())
    }

    fn handle_action(&mut self, action: Infallible) -> StoreResult<()> {
        match action {}
    }

    fn unique_keys(&self) -> Vec<(&'static str, String)> {
        vec![("name", self.name.to_lowercase())]
    }
}
