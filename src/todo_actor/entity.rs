use chrono::{DateTime, Utc};

use crate::actor_framework::Entity;
use crate::domain::{parse_due_date, Priority, Todo};
use crate::error::{StoreError, StoreResult};
use crate::validation::{non_blank, required};

use super::actions::TodoAction;
use super::dtos::{TodoCreate, TodoPatch};

fn parse_priority(raw: Option<String>) -> StoreResult<Option<Priority>> {
    non_blank(raw)
        .map(|p| p.parse::<Priority>().map_err(StoreError::Validation))
        .transpose()
}

fn parse_due(raw: Option<String>) -> StoreResult<Option<DateTime<Utc>>> {
    non_blank(raw)
        .map(|d| parse_due_date(&d).map_err(StoreError::Validation))
        .transpose()
}

impl Entity for Todo {
    type CreatePayload = TodoCreate;
    type Patch = TodoPatch;
    type Action = TodoAction;
    type ActionResult = Todo;

    const KIND: &'static str = "Todo";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_create(id: String, created_at: DateTime<Utc>, params: TodoCreate) -> StoreResult<Self> {
        Ok(Self {
            id,
            title: required("title", params.title)?,
            description: non_blank(params.description).unwrap_or_default(),
            priority: parse_priority(params.priority)?.unwrap_or_default(),
            category: non_blank(params.category),
            completed: false,
            completed_at: None,
            due_date: parse_due(params.due_date)?,
            created_at,
        })
    }

    fn on_update(&mut self, patch: TodoPatch) -> StoreResult<()> {
        // Parse everything first so a bad field leaves the todo untouched.
        let priority = parse_priority(patch.priority)?;
        let due_date = parse_due(patch.due_date)?;

        if let Some(title) = non_blank(patch.title) {
            self.title = title;
        }
        if let Some(description) = non_blank(patch.description) {
            self.description = description;
        }
        if let Some(priority) = priority {
            self.priority = priority;
        }
        if let Some(category) = non_blank(patch.category) {
            self.category = Some(category);
        }
        if let Some(due_date) = due_date {
            self.due_date = Some(due_date);
        }
        Ok(())
    }

    fn handle_action(&mut self, action: TodoAction) -> StoreResult<Todo> {
        match action {
            TodoAction::Complete => {
                self.completed = true;
                self.completed_at = Some(Utc::now().max(self.created_at));
                Ok(self.clone())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn taxes() -> TodoCreate {
        TodoCreate {
            title: Some("File taxes".into()),
            ..Default::default()
        }
    }

    #[test]
    fn create_defaults_to_open_medium_priority() {
        let todo = Todo::from_create("t1".into(), Utc::now(), taxes()).unwrap();
        assert_eq!(todo.priority, Priority::Medium);
        assert!(!todo.completed);
        assert!(todo.completed_at.is_none());
        assert_eq!(todo.description, "");
    }

    #[test]
    fn create_rejects_unknown_priority_and_bad_due_date() {
        let bad_priority = TodoCreate {
            priority: Some("urgent".into()),
            ..taxes()
        };
        assert!(matches!(
            Todo::from_create("t1".into(), Utc::now(), bad_priority),
            Err(StoreError::Validation(_))
        ));

        let bad_due = TodoCreate {
            due_date: Some("someday".into()),
            ..taxes()
        };
        assert!(matches!(
            Todo::from_create("t1".into(), Utc::now(), bad_due),
            Err(StoreError::Validation(_))
        ));
    }

    #[test]
    fn complete_sets_timestamp_and_restamps() {
        let mut todo = Todo::from_create("t1".into(), Utc::now(), taxes()).unwrap();

        let first = todo.handle_action(TodoAction::Complete).unwrap();
        assert!(first.completed);
        let first_at = first.completed_at.unwrap();
        assert!(first_at >= todo.created_at);

        let second = todo.handle_action(TodoAction::Complete).unwrap();
        assert!(second.completed);
        assert!(second.completed_at.unwrap() >= first_at);
    }

    #[test]
    fn failed_patch_changes_nothing() {
        let mut todo = Todo::from_create("t1".into(), Utc::now(), taxes()).unwrap();
        let before = todo.clone();
        let err = todo
            .on_update(TodoPatch {
                title: Some("Renamed".into()),
                priority: Some("someday".into()),
                ..Default::default()
            })
            .unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
        assert_eq!(todo, before);
    }
}
