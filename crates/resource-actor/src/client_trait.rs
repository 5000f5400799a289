//! # ActorClient Trait
//!
//! Shared `get`, `contains`, `perform` and `withdraw` for resource-specific client wrappers.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit the generic registry operations.
///
/// Implementors supply the inner [`ResourceClient`] and a mapping from
/// [`FrameworkError`] into their own error type; the registry operations come for free
/// and report failures in that type.
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch a snapshot of an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Whether an entity is stored under `id`.
    async fn contains(&self, id: T::Id) -> Result<bool, Self::Error> {
        Ok(self.get(id).await?.is_some())
    }

    /// Run one action against the entity stored under `id`.
    #[tracing::instrument(skip(self))]
    async fn perform(&self, id: T::Id, action: T::Action) -> Result<T::ActionResult, Self::Error> {
        tracing::debug!("Sending request");
        self.inner()
            .perform_action(id, action)
            .await
            .map_err(Self::map_error)
    }

    /// Remove an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn withdraw(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().withdraw(id).await.map_err(Self::map_error)
    }
}
