//! HTTP surface. Handlers translate requests into client calls and client
//! results into envelopes; they hold no state of their own.

pub mod categories;
pub mod envelope;
pub mod error;
pub mod health;
pub mod posts;
pub mod products;
pub mod todos;
pub mod users;

use axum::extract::{FromRequest, FromRequestParts, Query};
use axum::http::request::Parts;
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::clients::{CategoryClient, PostClient, ProductClient, TodoClient, UserClient};
use crate::query::normalize_query;

pub use envelope::{Envelope, Reply};
pub use error::ApiError;

pub type ApiResult<T> = Result<Reply<T>, ApiError>;

/// Shared handler state: one cloneable client per entity actor.
#[derive(Clone)]
pub struct AppState {
    pub users: UserClient,
    pub products: ProductClient,
    pub posts: PostClient,
    pub todos: TodoClient,
    pub categories: CategoryClient,
}

/// `axum::Json` whose rejections use the envelope.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// `axum::extract::Path` whose rejections use the envelope.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);

/// `?q=` with `?search=` accepted as an alias, plus `?tag=` for posts.
///
/// A repeated key keeps its first value; unknown keys are ignored.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SearchParams {
    pub q: Option<String>,
    pub search: Option<String>,
    pub tag: Option<String>,
}

impl<S: Send + Sync> FromRequestParts<S> for SearchParams {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(&parts.uri)?;
        Ok(Self::from_pairs(pairs))
    }
}

impl SearchParams {
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "q" => &mut params.q,
                "search" => &mut params.search,
                "tag" => &mut params.tag,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        params
    }

    pub fn term(&self) -> Option<String> {
        self.q.clone().or_else(|| self.search.clone())
    }

    /// The normalized term echoed back as `query`, absent when blank.
    pub fn echo(&self) -> Option<String> {
        normalize_query(self.term().as_deref())
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(health::routes())
        .merge(users::routes())
        .merge(products::routes())
        .merge(posts::routes())
        .merge(todos::routes())
        .merge(categories::routes())
        .fallback(error::route_not_found)
        .method_not_allowed_fallback(error::method_not_allowed)
        .with_state(state)
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn first_value_of_a_repeated_key_wins() {
        let params = SearchParams::from_pairs(pairs(&[("q", "ann"), ("q", "bob"), ("page", "2")]));
        assert_eq!(params.term().as_deref(), Some("ann"));
        assert_eq!(params.tag, None);
    }

    #[test]
    fn search_is_an_alias_for_q() {
        let params = SearchParams::from_pairs(pairs(&[("search", " Mug "), ("tag", "rust")]));
        assert_eq!(params.echo().as_deref(), Some("mug"));
        assert_eq!(params.tag.as_deref(), Some("rust"));
        assert_eq!(SearchParams::from_pairs(pairs(&[("q", "  ")])).echo(), None);
    }
}
