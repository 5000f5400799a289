//! # Generic Actor Server
//!
//! `ResourceActor` owns a keyed store of entities and is the only code that ever touches
//! it. Requests arrive over a bounded channel and are handled strictly one at a time, so two
//! callers can never interleave a mutation of the same entity.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// **Concurrency Model**:
/// The store is a plain `HashMap`. The message loop is the single writer, so no
/// `Mutex` is needed and at most one request per entity is ever in flight.
///
/// # Usage Pattern
///
/// 1. **Create**: `ResourceActor::new()` returns the actor (server) and a client.
/// 2. **Wire**: pass dependencies into `actor.run(context)`.
/// 3. **Run**: spawn the run loop on a Tokio task.
///
/// ```rust
/// use resource_actor::{ActorEntity, ResourceActor};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Shelf { label: String, items: u32 }
/// #[derive(Debug)] struct ShelfCreate { label: String }
/// #[derive(Debug)] enum ShelfAction { Stock(u32) }
/// #[derive(Debug, thiserror::Error)] #[error("shelf error")] struct ShelfError;
///
/// #[async_trait]
/// impl ActorEntity for Shelf {
///     type Id = String;
///     type Create = ShelfCreate;
///     type Action = ShelfAction;
///     type ActionResult = u32;
///     type Context = ();
///     type Error = ShelfError;
///
///     fn from_create_params(params: ShelfCreate) -> Result<Self, Self::Error> {
///         Ok(Self { label: params.label, items: 0 })
///     }
///     fn id(&self) -> String { self.label.clone() }
///     async fn handle_action(&mut self, action: ShelfAction, _: &()) -> Result<u32, Self::Error> {
///         match action { ShelfAction::Stock(n) => { self.items += n; Ok(self.items) } }
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Shelf>::new(10);
///     tokio::spawn(actor.run(()));
///
///     let id = client.register(ShelfCreate { label: "A1".into() }).await.unwrap();
///     assert_eq!(client.perform_action(id, ShelfAction::Stock(3)).await.unwrap(), 3);
/// }
/// ```
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the request channel; senders wait when it is full.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
        };
        (actor, ResourceClient::new(sender))
    }

    /// Runs the actor's event loop until every client has been dropped.
    ///
    /// The `context` is lent to every entity hook.
    pub async fn run(mut self, context: T::Context) {
        // "LendingDesk" rather than "lending_branch::desk_actor::entity::LendingDesk"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Register { params, respond_to } => {
                    debug!(entity_type, ?params, "Register");
                    let _ = respond_to.send(self.register(params, &context, entity_type).await);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Withdraw { id, respond_to } => {
                    debug!(entity_type, %id, "Withdraw");
                    let Some(item) = self.store.get(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    if let Err(e) = item.on_withdraw(&context).await {
                        warn!(entity_type, %id, error = %e, "on_withdraw failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    self.store.remove(&id);
                    info!(entity_type, %id, size = self.store.len(), "Withdrawn");
                    let _ = respond_to.send(Ok(()));
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let Some(item) = self.store.get_mut(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    let result = item
                        .handle_action(action, &context)
                        .await
                        .map_err(|e| FrameworkError::EntityError(Box::new(e)));
                    match &result {
                        Ok(outcome) => info!(entity_type, %id, ?outcome, "Action ok"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    async fn register(
        &mut self,
        params: T::Create,
        context: &T::Context,
        entity_type: &str,
    ) -> Result<T::Id, FrameworkError> {
        let mut item = T::from_create_params(params).map_err(|e| {
            warn!(entity_type, error = %e, "Register failed");
            FrameworkError::EntityError(Box::new(e))
        })?;
        let id = item.id();
        if self.store.contains_key(&id) {
            warn!(entity_type, %id, "Already registered");
            return Err(FrameworkError::AlreadyRegistered(id.to_string()));
        }
        if let Err(e) = item.on_create(context).await {
            warn!(entity_type, %id, error = %e, "on_create failed");
            return Err(FrameworkError::EntityError(Box::new(e)));
        }
        self.store.insert(id.clone(), item);
        info!(entity_type, %id, size = self.store.len(), "Registered");
        Ok(id)
    }
}
