//! The uniform response body: `{ success, <key>: data, message?, error?, total?, query? }`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::ser::{Serialize, SerializeMap, Serializer};

#[derive(Debug, Clone, PartialEq)]
pub struct Envelope<T = ()> {
    success: bool,
    payload: Option<(&'static str, T)>,
    message: Option<String>,
    error: Option<String>,
    total: Option<usize>,
    query: Option<String>,
}

impl<T> Envelope<T> {
    /// Successful envelope carrying `value` under `key`.
    pub fn data(key: &'static str, value: T) -> Self {
        Self {
            success: true,
            payload: Some((key, value)),
            message: None,
            error: None,
            total: None,
            query: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_total(mut self, total: usize) -> Self {
        self.total = Some(total);
        self
    }

    pub fn with_query(mut self, query: Option<String>) -> Self {
        self.query = query;
        self
    }
}

impl Envelope<()> {
    /// Successful envelope with only a message, e.g. after a delete.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            payload: None,
            message: Some(message.into()),
            error: None,
            total: None,
            query: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            payload: None,
            message: None,
            error: Some(error.into()),
            total: None,
            query: None,
        }
    }
}

impl<T: Serialize> Serialize for Envelope<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("success", &self.success)?;
        if let Some((key, value)) = &self.payload {
            map.serialize_entry(key, value)?;
        }
        if let Some(message) = &self.message {
            map.serialize_entry("message", message)?;
        }
        if let Some(error) = &self.error {
            map.serialize_entry("error", error)?;
        }
        if let Some(total) = &self.total {
            map.serialize_entry("total", total)?;
        }
        if let Some(query) = &self.query {
            map.serialize_entry("query", query)?;
        }
        map.end()
    }
}

/// An envelope paired with its status code.
#[derive(Debug)]
pub struct Reply<T>(pub StatusCode, pub Envelope<T>);

impl<T> Reply<T> {
    pub fn ok(envelope: Envelope<T>) -> Self {
        Self(StatusCode::OK, envelope)
    }

    pub fn created(envelope: Envelope<T>) -> Self {
        Self(StatusCode::CREATED, envelope)
    }
}

impl<T: Serialize> IntoResponse for Reply<T> {
    fn into_response(self) -> Response {
        (self.0, Json(self.1)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn data_envelope_omits_absent_fields() {
        let body = serde_json::to_value(Envelope::data("users", vec!["a", "b"]).with_total(2)).unwrap();
        assert_eq!(body, json!({ "success": true, "users": ["a", "b"], "total": 2 }));
    }

    #[test]
    fn failure_envelope_carries_only_error() {
        let body = serde_json::to_value(Envelope::failure("User not found")).unwrap();
        assert_eq!(body, json!({ "success": false, "error": "User not found" }));
    }

    #[test]
    fn message_and_query_are_included_when_set() {
        let body = serde_json::to_value(
            Envelope::data("products", Vec::<u8>::new())
                .with_total(0)
                .with_query(Some("mug".into()))
                .with_message("nothing here"),
        )
        .unwrap();
        assert_eq!(
            body,
            json!({ "success": true, "products": [], "total": 0, "query": "mug", "message": "nothing here" })
        );
    }
}
