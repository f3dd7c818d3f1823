//! # Core Record-Store Framework
//!
//! This module defines the generic building blocks for the actor-backed record stores.
//!
//! ## Key Types
//!
//! - [`ActorEntity`]: The trait that all record types must implement.
//! - [`ResourceActor`]: The generic actor that owns a store of records.
//! - [`ResourceClient`]: The generic client for communicating with actors.
//! - [`FrameworkError`]: Common errors (e.g., ActorClosed, NotFound).

use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

use async_trait::async_trait;

// =============================================================================
// 1. THE ABSTRACTION (Entity Trait with Hooks and DTOs)
// =============================================================================

/// Trait that any record type must implement to be managed by a ResourceActor.
///
/// # Architecture Note
/// By defining a contract (`ActorEntity`) that all our record types (Customer,
/// Product, Menu, Order) must satisfy, we can write the `ResourceActor` logic
/// *once* and reuse it everywhere.
///
/// We use "Associated Types" (type Id, type CreateParams, etc.) to enforce type
/// safety. An `Order` store requires an `OrderCreate` payload, and you can't
/// accidentally send it a `MenuCreate` payload. The compiler prevents this class
/// of bugs entirely.
///
/// # Async & Context
/// This trait is `#[async_trait]` to allow asynchronous operations in hooks
/// (e.g., resolving records owned by other actors). It also defines a `Context`
/// type, which is injected into every hook. This allows "Late Binding" of
/// dependencies (passing clients to `run()` instead of `new()`).
///
/// # Provided Methods (Hooks)
/// [`ActorEntity::on_create`] and [`ActorEntity::on_delete`] have default
/// implementations that do nothing (`Ok(())`). Implement them only when the
/// record needs custom behavior at those points.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this record (e.g., String, Uuid, u64).
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new instance (DTO - Data Transfer Object).
    type CreateParams: Send + Sync + Debug;

    /// The data required to update an existing instance. Only fields present
    /// in the patch are touched; the entity applies them in [`ActorEntity::on_update`].
    type UpdateParams: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this record's hooks.
    ///
    /// # Design Note: Error Granularity
    /// The framework enforces a **Per-Actor Error Type** (one enum for the whole
    /// actor) rather than a specific error per operation. A single `OrderError`
    /// is the union of everything order hooks can fail with, which keeps client
    /// signatures uniform at the cost of a little precision.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full record from the store-assigned ID and the payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::CreateParams) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called immediately after the record is constructed, before it is stored.
    /// A failure here aborts the creation; nothing is persisted.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received. The hook runs inside the
    /// actor's sequential loop, so it is an atomic read-modify-write on the
    /// stored record. A failing hook must leave `self` untouched.
    async fn on_update(
        &mut self,
        update: Self::UpdateParams,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the record is removed from the store.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}

// =============================================================================
// 2. THE GENERIC MESSAGES & ERRORS
// =============================================================================

/// Errors that can occur within the record-store framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// # Resource-Oriented Architecture
/// Each actor manages a specific type of record (the [`ActorEntity`]). Instead
/// of defining ad-hoc messages for every operation, we standardize around the
/// lifecycle operations that apply to almost any persistent record:
///
/// - **Create**: Lifecycle start. Uses [`ActorEntity::CreateParams`] and
///   responds with the stored record.
/// - **Get (Read)**: Retrieval. Fetches the current state of the record by ID.
/// - **List (Read)**: Retrieval. Fetches every record currently in the store.
/// - **Update**: State mutation. Uses [`ActorEntity::UpdateParams`] to modify
///   an existing record.
/// - **Delete**: Lifecycle end. Removes the record.
///
/// # Entity Interaction
/// This type is generic over `T: ActorEntity` and uses the associated types
/// defined on the trait, so you can't send an "Order Create" payload to a
/// "Menu" actor.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::CreateParams,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::UpdateParams,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// The generic actor that manages a store of records.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state (`store`)
/// and the receiver end of the channel.
///
/// **Concurrency Model**:
/// Even though we might have many `ResourceActor` instances running, each one
/// processes its own messages *sequentially* in a loop. This means we don't need
/// `Mutex` or `RwLock` for the `store`! The "Actor Model" gives us safety through
/// exclusive ownership of state within the task. It also gives every record an
/// atomic read-modify-write: an update hook runs to completion before the next
/// message is picked up.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: ActorEntity> ResourceActor<T> {
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// # Context Injection
    /// The `context` argument is injected into every entity hook. This allows
    /// entities to access external dependencies (like other clients) that were
    /// created *after* the actor was instantiated but *before* the loop started.
    pub async fn run(mut self, context: T::Context) {
        // Extract just the type name (e.g., "Order" instead of "delivery_orders::model::order::Order")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = (self.next_id_fn)();

                    match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => {
                            // Await the async hook
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, error = %e, "on_create failed");
                                let _ =
                                    respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                                continue;
                            }
                            self.store.insert(id.clone(), item.clone());
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(item));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    let items: Vec<T> = self.store.values().cloned().collect();
                    debug!(entity_type, count = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    if let Some(item) = self.store.get_mut(&id) {
                        // Await the async hook
                        if let Err(e) = item.on_update(update, &context).await {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        info!(entity_type, %id, "Updated");
                        let _ = respond_to.send(Ok(item.clone()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    if let Some(item) = self.store.get(&id) {
                        // Await the async hook
                        if let Err(e) = item.on_delete(&context).await {
                            warn!(entity_type, %id, error = %e, "on_delete failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        self.store.remove(&id);
                        info!(entity_type, %id, size = self.store.len(), "Deleted");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

/// A type-safe client for interacting with a `ResourceActor`.
///
/// Holds only a sender, so cloning is inexpensive and clones can be shared
/// freely across tasks.
#[derive(Clone)]
pub struct ResourceClient<T: ActorEntity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: ActorEntity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn create(&self, params: T::CreateParams) -> Result<T, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Create { params, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Get { id, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn list(&self) -> Result<Vec<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::List { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn update(&self, id: T::Id, update: T::UpdateParams) -> Result<T, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Update {
                id,
                update,
                respond_to,
            })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Delete { id, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Arc;

    // --- Domain Definition ---

    #[derive(Clone, Debug, PartialEq)]
    struct Courier {
        id: String,
        name: String,
        on_shift: bool,
    }

    #[derive(Debug)]
    struct CourierCreate {
        name: String,
    }

    #[derive(Debug)]
    struct CourierUpdate {
        name: Option<String>,
        on_shift: Option<bool>,
    }

    #[derive(Debug, thiserror::Error)]
    enum CourierError {
        #[error("courier name must not be empty")]
        EmptyName,
    }

    #[async_trait]
    impl ActorEntity for Courier {
        type Id = String;
        type CreateParams = CourierCreate;
        type UpdateParams = CourierUpdate;
        type Context = ();
        type Error = CourierError;

        fn from_create_params(id: String, params: CourierCreate) -> Result<Self, CourierError> {
            if params.name.is_empty() {
                return Err(CourierError::EmptyName);
            }
            Ok(Self {
                id,
                name: params.name,
                on_shift: false,
            })
        }

        async fn on_update(&mut self, update: CourierUpdate, _ctx: &()) -> Result<(), CourierError> {
            if let Some(name) = update.name {
                self.name = name;
            }
            if let Some(on_shift) = update.on_shift {
                self.on_shift = on_shift;
            }
            Ok(())
        }
    }

    fn spawn_courier_actor() -> ResourceClient<Courier> {
        let counter = Arc::new(AtomicU64::new(1));
        let next_id = move || {
            let id = counter.fetch_add(1, Ordering::SeqCst);
            format!("courier_{}", id)
        };
        let (actor, client) = ResourceActor::new(10, next_id);
        tokio::spawn(actor.run(()));
        client
    }

    #[tokio::test]
    async fn test_full_crud_cycle() {
        let client = spawn_courier_actor();

        // 1. Create: the response carries the stored record, id included
        let created = client
            .create(CourierCreate {
                name: "Marco".into(),
            })
            .await
            .unwrap();
        assert_eq!(created.id, "courier_1");
        assert_eq!(created.name, "Marco");
        assert!(!created.on_shift);

        // 2. Get
        let fetched = client.get(created.id.clone()).await.unwrap().unwrap();
        assert_eq!(fetched, created);

        // 3. Update: only fields present in the patch are touched
        let updated = client
            .update(
                created.id.clone(),
                CourierUpdate {
                    name: None,
                    on_shift: Some(true),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.name, "Marco");
        assert!(updated.on_shift);

        // 4. List
        let all = client.list().await.unwrap();
        assert_eq!(all.len(), 1);

        // 5. Delete
        client.delete(created.id.clone()).await.unwrap();
        let gone = client.get(created.id.clone()).await.unwrap();
        assert!(gone.is_none());
        assert!(client.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_and_delete_unknown_id_report_not_found() {
        let client = spawn_courier_actor();

        let err = client
            .update(
                "courier_99".to_string(),
                CourierUpdate {
                    name: None,
                    on_shift: Some(true),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, FrameworkError::NotFound(id) if id == "courier_99"));

        let err = client.delete("courier_99".to_string()).await.unwrap_err();
        assert!(matches!(err, FrameworkError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_failed_create_persists_nothing() {
        let client = spawn_courier_actor();

        let err = client
            .create(CourierCreate { name: "".into() })
            .await
            .unwrap_err();
        assert!(matches!(err, FrameworkError::EntityError(_)));
        assert!(client.list().await.unwrap().is_empty());
    }
}
