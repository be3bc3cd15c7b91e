//! # Mock Framework
//!
//! Utilities for testing clients in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver.
//! Then use helpers like [`expect_create`] or [`expect_action`] to play the
//! actor's part: inspect the request, then answer it through the responder.

use tokio::sync::mpsc;

use crate::actor_framework::{Entity, ResourceClient, ResourceRequest, Response};

/// Creates a mock client and a receiver for asserting requests.
///
/// Client logic that spans several actors (author lookups, category checks)
/// is tested against these instead of running real `ResourceActor`s, so each
/// reply (success, failure, or silence) is chosen by the test.
pub fn create_mock_client<T: Entity>(buffer_size: usize) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::CreatePayload, Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { payload, respond_to }) => Some((payload, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(String, Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Action request
pub async fn expect_action<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(String, T::Action, Response<T::ActionResult>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action { id, action, respond_to }) => Some((id, action, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Query request. The predicate is
/// handed back so the test can run it over records of its choosing.
pub async fn expect_query<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(crate::actor_framework::Predicate<T>, Response<Vec<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Query { predicate, respond_to }) => Some((predicate, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{ProductClient, UserClient};
    use crate::domain::{hash_password, Product, Role, User};
    use crate::error::StoreError;
    use crate::product_actor::ProductCreate;
    use chrono::Utc;

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let client = ProductClient::new(client);

        let create_task = tokio::spawn(async move {
            let product = ProductCreate {
                name: Some("Lamp".to_string()),
                price: Some(20.0),
                ..Default::default()
            };
            client.create_product(product).await
        });

        let (payload, responder) = expect_create(&mut receiver).await.expect("Expected Create request");
        assert_eq!(payload.name.as_deref(), Some("Lamp"));
        let product = Product {
            id: "p-1".to_string(),
            name: "Lamp".to_string(),
            price: 20.0,
            category: "General".to_string(),
            in_stock: true,
            created_at: Utc::now(),
        };
        responder.send(Ok(product.clone())).unwrap();

        let result = create_task.await.unwrap();
        assert_eq!(result, Ok(product));
    }

    #[tokio::test]
    async fn dropped_responder_surfaces_as_communication_error() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let task = tokio::spawn(async move { client.get("p-1").await });

        let (id, responder) = expect_get(&mut receiver).await.expect("Expected Get request");
        assert_eq!(id, "p-1");
        drop(responder);

        let result = task.await.unwrap();
        assert!(matches!(result, Err(StoreError::ActorCommunication(_))));
    }

    #[tokio::test]
    async fn authenticate_filters_by_username_then_checks_hash() {
        let (inner, mut receiver) = create_mock_client::<User>(10);
        let client = UserClient::new(inner);
        let task = tokio::spawn(async move { client.authenticate("admin".into(), "admin123".into()).await });

        let (predicate, responder) = expect_query(&mut receiver).await.expect("Expected Query request");
        let admin = User {
            id: "u-1".to_string(),
            name: "Admin".to_string(),
            email: "admin@blog.com".to_string(),
            age: 0,
            username: Some("admin".to_string()),
            password_hash: Some(hash_password("admin123")),
            role: Role::Admin,
            created_at: Utc::now(),
        };
        let other = User {
            id: "u-2".to_string(),
            username: Some("john_doe".to_string()),
            ..admin.clone()
        };
        assert!(predicate(&admin));
        assert!(!predicate(&other));
        responder.send(Ok(vec![admin])).unwrap();

        let user = task.await.unwrap().unwrap();
        assert_eq!(user.map(|u| u.id), Some("u-1".to_string()));
    }
}
