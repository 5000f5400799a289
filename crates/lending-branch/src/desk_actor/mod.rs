//! # Lending Desk Actor
//!
//! Hosts every catalogued item behind one [`ResourceActor`].
//!
//! The routing core is synchronous and assumes a single caller. Here it is exposed to many
//! concurrent callers: each request becomes a message, and the actor applies them one at a
//! time, so a record never sees two transitions at once.
//!
//! ## Structure
//!
//! - [`entity`] - [`LendingDesk`] and its [`ActorEntity`](resource_actor::ActorEntity) impl
//! - [`error`] - [`DeskError`]
//! - [`new()`] - factory for the actor and its client
//!
//! ## Usage
//!
//! ```rust
//! use lending_branch::clients::CatalogClient;
//! use lending_branch::desk_actor;
//! use lending_branch::model::ResourceRecord;
//! use lending_branch::router::ServiceEndpoint;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = desk_actor::new(32);
//!     tokio::spawn(actor.run(ServiceEndpoint::default()));
//!
//!     let catalog = CatalogClient::new(generic_client);
//!     let id = catalog.catalog(ResourceRecord::available("123", 12202013)).await?;
//!     assert!(catalog.reserve_book(id).await?);
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use entity::*;
pub use error::*;

use resource_actor::{ResourceActor, ResourceClient};

/// Creates a new desk actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<LendingDesk>, ResourceClient<LendingDesk>) {
    ResourceActor::new(buffer_size)
}
