//! Read-side helpers: substring search and todo listings.
//!
//! Predicates are evaluated against the live collection on every call; no
//! index is kept.

use chrono::{DateTime, Utc};

use crate::domain::{Category, Post, Product, Todo, User};

/// Entities that can be matched by a free-text query.
pub trait Searchable {
    fn search_fields(&self) -> Vec<&str>;
}

impl Searchable for User {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str()]
    }
}

impl Searchable for Product {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.category.as_str()]
    }
}

impl Searchable for Post {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.content.as_str()];
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }
}

impl Searchable for Todo {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str()]
    }
}

impl Searchable for Category {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }
}

/// Lowercased, trimmed query; `None` when there is nothing to search for.
pub fn normalize_query(q: Option<&str>) -> Option<String> {
    q.map(str::trim)
        .filter(|q| !q.is_empty())
        .map(str::to_lowercase)
}

/// Case-insensitive containment in any search field. A blank query matches.
pub fn matches_query<T: Searchable>(entity: &T, q: Option<&str>) -> bool {
    match normalize_query(q) {
        None => true,
        Some(needle) => entity
            .search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle)),
    }
}

/// Todo listing views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoFilter {
    All,
    Active,
    Completed,
    Overdue,
}

impl TodoFilter {
    pub fn matches(self, todo: &Todo, now: DateTime<Utc>) -> bool {
        match self {
            Self::All => true,
            Self::Active => !todo.completed,
            Self::Completed => todo.completed,
            Self::Overdue => todo.is_overdue(now),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Priority;
    use chrono::{Duration, TimeZone};

    fn product(name: &str, category: &str) -> Product {
        Product {
            id: name.to_lowercase(),
            name: name.into(),
            price: 1.0,
            category: category.into(),
            in_stock: true,
            created_at: Utc::now(),
        }
    }

    fn todo(completed: bool, due_in_hours: Option<i64>, now: DateTime<Utc>) -> Todo {
        Todo {
            id: "t".into(),
            title: "t".into(),
            description: String::new(),
            priority: Priority::Medium,
            category: None,
            completed,
            completed_at: completed.then_some(now),
            due_date: due_in_hours.map(|h| now + Duration::hours(h)),
            created_at: now - Duration::days(1),
        }
    }

    #[test]
    fn blank_query_matches_everything() {
        let p = product("Laptop", "Electronics");
        assert!(matches_query(&p, None));
        assert!(matches_query(&p, Some("")));
        assert!(matches_query(&p, Some("   ")));
    }

    #[test]
    fn query_is_case_insensitive_across_fields() {
        let p = product("Coffee Mug", "Kitchen");
        assert!(matches_query(&p, Some("MUG")));
        assert!(matches_query(&p, Some("kitch")));
        assert!(!matches_query(&p, Some("laptop")));
    }

    #[test]
    fn todo_filters_partition_by_state() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap();
        let open_late = todo(false, Some(-2), now);
        let open_future = todo(false, Some(2), now);
        let done_late = todo(true, Some(-2), now);

        assert!(TodoFilter::Active.matches(&open_late, now));
        assert!(!TodoFilter::Active.matches(&done_late, now));
        assert!(TodoFilter::Completed.matches(&done_late, now));
        assert!(TodoFilter::Overdue.matches(&open_late, now));
        assert!(!TodoFilter::Overdue.matches(&open_future, now));
        assert!(!TodoFilter::Overdue.matches(&done_late, now));
        assert!(TodoFilter::All.matches(&done_late, now));
    }
}
