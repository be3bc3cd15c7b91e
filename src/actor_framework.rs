use std::fmt::Debug;

use chrono::{DateTime, Utc};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, instrument, warn};

use crate::error::{StoreError, StoreResult};

// =============================================================================
// 1. THE ABSTRACTION (Traits with Hooks, Payloads, and Actions)
// =============================================================================

/// Trait that any domain entity must implement to be managed by ResourceActor
pub trait Entity: Clone + Send + Sync + 'static {
    type CreatePayload: Send + Debug;
    type Patch: Send + Debug;
    type Action: Send + Debug;
    type ActionResult: Send + Debug;

    /// Human readable kind, used in errors and log fields.
    const KIND: &'static str;

    fn id(&self) -> &str;

    /// Construct the full Entity from the generated ID, creation time and payload.
    ///
    /// Required-field validation lives here.
    fn from_create(id: String, created_at: DateTime<Utc>, payload: Self::CreatePayload) -> StoreResult<Self>;

    // --- Lifecycle Hooks ---

    fn on_create(&mut self) -> StoreResult<()> {
        Ok(())
    }

    /// Merge a partial update. Only supplied, non-empty fields overwrite.
    fn on_update(&mut self, patch: Self::Patch) -> StoreResult<()>;

    fn on_delete(&self) -> StoreResult<()> {
        Ok(())
    }

    /// Handle a custom domain-specific action
    fn handle_action(&mut self, action: Self::Action) -> StoreResult<Self::ActionResult>;

    /// Field/value pairs that must be unique across the collection.
    fn unique_keys(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }
}

/// Fresh UUID v4 in its hyphenated text form.
pub fn uuid_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<StoreResult<T>>;
pub type Predicate<T> = Box<dyn Fn(&T) -> bool + Send>;

pub enum ResourceRequest<T: Entity> {
    Create {
        payload: T::CreatePayload,
        respond_to: Response<T>,
    },
    Get {
        id: String,
        respond_to: Response<T>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Query {
        predicate: Predicate<T>,
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: String,
        patch: T::Patch,
        respond_to: Response<T>,
    },
    Delete {
        id: String,
        respond_to: Response<()>,
    },
    Action {
        id: String,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
    Count {
        respond_to: Response<usize>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// Sole owner of one insertion-ordered collection. Every read and write is
/// a message, so mutations on the collection never interleave.
pub struct ResourceActor<T: Entity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    items: Vec<T>,
    next_id_fn: Box<dyn Fn() -> String + Send + Sync>,
}

impl<T: Entity> ResourceActor<T> {
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> String + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            items: Vec::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    #[instrument(name = "resource_actor", skip(self), fields(kind = T::KIND))]
    pub async fn run(mut self) {
        info!("Actor starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { payload, respond_to } => {
                    let _ = respond_to.send(self.handle_create(payload));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let _ = respond_to.send(self.handle_get(&id));
                }
                ResourceRequest::List { respond_to } => {
                    let _ = respond_to.send(Ok(self.items.clone()));
                }
                ResourceRequest::Query { predicate, respond_to } => {
                    let matched = self.items.iter().filter(|item| predicate(item)).cloned().collect();
                    let _ = respond_to.send(Ok(matched));
                }
                ResourceRequest::Update { id, patch, respond_to } => {
                    let _ = respond_to.send(self.handle_update(&id, patch));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    let _ = respond_to.send(self.handle_delete(&id));
                }
                ResourceRequest::Action { id, action, respond_to } => {
                    let _ = respond_to.send(self.handle_action(&id, action));
                }
                ResourceRequest::Count { respond_to } => {
                    let _ = respond_to.send(Ok(self.items.len()));
                }
            }
        }
        info!("Actor stopped");
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    /// First unique key of `candidate` already held by a record other than `skip_id`.
    fn find_conflict(&self, candidate: &T, skip_id: Option<&str>) -> Option<(&'static str, String)> {
        let keys = candidate.unique_keys();
        self.items
            .iter()
            .filter(|item| Some(item.id()) != skip_id)
            .flat_map(|item| item.unique_keys())
            .find(|existing| keys.contains(existing))
    }

    #[instrument(skip(self, payload))]
    fn handle_create(&mut self, payload: T::CreatePayload) -> StoreResult<T> {
        debug!("Processing create request");
        let mut id = (self.next_id_fn)();
        while self.position(&id).is_some() {
            id = (self.next_id_fn)();
        }

        let mut item = T::from_create(id, Utc::now(), payload)?;
        item.on_create()?;

        if let Some((field, value)) = self.find_conflict(&item, None) {
            warn!(field, "Create rejected: duplicate unique field");
            return Err(StoreError::conflict(format!("{field} '{value}' already exists")));
        }

        self.items.push(item.clone());
        info!(id = %item.id(), "Record created");
        Ok(item)
    }

    fn handle_get(&self, id: &str) -> StoreResult<T> {
        self.position(id)
            .map(|idx| self.items[idx].clone())
            .ok_or_else(|| StoreError::not_found(T::KIND, id))
    }

    #[instrument(skip(self, patch))]
    fn handle_update(&mut self, id: &str, patch: T::Patch) -> StoreResult<T> {
        debug!("Processing update request");
        let idx = self.position(id).ok_or_else(|| StoreError::not_found(T::KIND, id))?;

        // Merge into a copy so a rejected patch leaves the stored record untouched.
        let mut updated = self.items[idx].clone();
        updated.on_update(patch)?;

        if let Some((field, value)) = self.find_conflict(&updated, Some(id)) {
            warn!(field, "Update rejected: duplicate unique field");
            return Err(StoreError::conflict(format!("{field} '{value}' already exists")));
        }

        self.items[idx] = updated.clone();
        info!("Record updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    fn handle_delete(&mut self, id: &str) -> StoreResult<()> {
        debug!("Processing delete request");
        if let Some(idx) = self.position(id) {
            self.items[idx].on_delete()?;
        }

        let original_len = self.items.len();
        self.items.retain(|item| item.id() != id);
        if self.items.len() == original_len {
            debug!("Nothing to delete");
            return Err(StoreError::not_found(T::KIND, id));
        }

        info!("Record deleted");
        Ok(())
    }

    #[instrument(skip(self, action))]
    fn handle_action(&mut self, id: &str, action: T::Action) -> StoreResult<T::ActionResult> {
        debug!(?action, "Processing action request");
        let idx = self.position(id).ok_or_else(|| StoreError::not_found(T::KIND, id))?;
        self.items[idx].handle_action(action)
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

#[derive(Clone)]
pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: Entity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(&self, build: impl FnOnce(Response<R>) -> ResourceRequest<T>) -> StoreResult<R> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| StoreError::ActorCommunication("Actor closed".to_string()))?;
        response
            .await
            .map_err(|_| StoreError::ActorCommunication("Actor dropped".to_string()))?
    }

    pub async fn create(&self, payload: T::CreatePayload) -> StoreResult<T> {
        self.request(|respond_to| ResourceRequest::Create { payload, respond_to }).await
    }

    pub async fn get(&self, id: impl Into<String>) -> StoreResult<T> {
        let id = id.into();
        self.request(|respond_to| ResourceRequest::Get { id, respond_to }).await
    }

    pub async fn list(&self) -> StoreResult<Vec<T>> {
        self.request(|respond_to| ResourceRequest::List { respond_to }).await
    }

    pub async fn query(&self, predicate: impl Fn(&T) -> bool + Send + 'static) -> StoreResult<Vec<T>> {
        let predicate: Predicate<T> = Box::new(predicate);
        self.request(|respond_to| ResourceRequest::Query { predicate, respond_to }).await
    }

    pub async fn update(&self, id: impl Into<String>, patch: T::Patch) -> StoreResult<T> {
        let id = id.into();
        self.request(|respond_to| ResourceRequest::Update { id, patch, respond_to }).await
    }

    pub async fn delete(&self, id: impl Into<String>) -> StoreResult<()> {
        let id = id.into();
        self.request(|respond_to| ResourceRequest::Delete { id, respond_to }).await
    }

    pub async fn perform_action(&self, id: impl Into<String>, action: T::Action) -> StoreResult<T::ActionResult> {
        let id = id.into();
        self.request(|respond_to| ResourceRequest::Action { id, action, respond_to }).await
    }

    pub async fn count(&self) -> StoreResult<usize> {
        self.request(|respond_to| ResourceRequest::Count { respond_to }).await
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================
