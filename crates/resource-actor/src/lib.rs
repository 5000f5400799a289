//! # Resource Actor
//!
//! A small framework for hosting keyed, stateful resources behind a single-writer actor.
//!
//! Each [`ResourceActor`] owns a store of entities and drains one request channel in
//! order. Because nothing else can reach the store, every mutation of an entity happens
//! in isolation: two callers asking to flip the same record are serialized by the channel,
//! not by a lock.
//!
//! ## Layers
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - the resource and its behaviour.
//! 2. **Runtime Layer** ([`ResourceActor`]) - message loop and store.
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - typed async calls.
//!
//! ## Context Injection
//!
//! Dependencies are handed to [`ResourceActor::run`] rather than to the constructor, so an
//! actor can be created before the services its entities will call are ready. The context is
//! lent to every hook.
//!
//! ## Operations
//!
//! | Verb | Effect |
//! |------|--------|
//! | `register` | Build an entity from its payload, store it under [`ActorEntity::id`]; duplicates are rejected |
//! | `get` | Snapshot clone of the entity |
//! | `withdraw` | Run [`ActorEntity::on_withdraw`], then remove |
//! | `perform_action` | Run [`ActorEntity::handle_action`] against the stored entity |
//!
//! ## Testing
//!
//! See [`mock`] for [`mock::MockClient`] and the manual `expect_*` helpers.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
