//! # ActorEntity Trait
//!
//! The contract a resource must satisfy to live inside a [`ResourceActor`](crate::ResourceActor).
//!
//! Entities in this framework carry their own natural key. A catalogued book is known by
//! its call number long before any actor sees it, so the actor never invents identifiers:
//! it asks the entity for [`ActorEntity::id`] and refuses a second registration under the
//! same key.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::on_withdraw`]
//!
//! Both default to `Ok(())`.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by a `ResourceActor`.
///
/// # Async & Context
/// Hooks are `#[async_trait]` so they can await other clients. The `Context` type is
/// handed to `run()` and lent to every hook, which lets dependencies be wired after the
/// actor is constructed.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The natural key of the entity (e.g. a call number).
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// The data required to register a new instance.
    type Create: Send + Sync + Debug;

    /// Enum of resource-specific requests handled by [`ActorEntity::handle_action`].
    type Action: Send + Sync + Debug;

    /// The result type returned by actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context injected into the actor. Use `()` if nothing is needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// Errors cross the channel boxed inside
    /// [`FrameworkError::EntityError`](crate::FrameworkError::EntityError); clients recover
    /// the concrete type with `downcast`.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Build the entity from its registration payload.
    fn from_create_params(params: Self::Create) -> Result<Self, Self::Error>;

    /// The key under which the entity is stored.
    fn id(&self) -> Self::Id;

    // --- Lifecycle Hooks (Async) ---

    /// Called after construction and before the entity becomes visible in the store.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called immediately before the entity is withdrawn from the store.
    async fn on_withdraw(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a resource-specific request against this entity.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
