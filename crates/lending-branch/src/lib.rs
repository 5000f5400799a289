//! # Lending Branch
//!
//! Request routing for a library branch's loanable resources.
//!
//! A request names a [`RequestKind`](model::RequestKind) and a subject. The
//! [`ServiceEndpoint`](router::ServiceEndpoint) checks that the subject is bound to a
//! [`ResourceRecord`](model::ResourceRecord), then dispatches: reservations toggle the record
//! between `Available` and `CheckedOut` through a [`ReservationContext`](context::ReservationContext),
//! searches go to the [`SearchService`](search::SearchService), and the media kinds are
//! acknowledged as unrecognized. Every side effect is reported as a
//! [`ServiceEvent`](events::ServiceEvent) to an injected [`EventSink`](events::EventSink).
//!
//! ## Modules
//!
//! - **Core**: [`model`], [`roles`], [`state_machine`], [`context`], [`search`], [`services`],
//!   [`router`], [`events`], [`error`]
//! - **Hosting**: [`desk_actor`] puts every catalogued item behind one actor;
//!   [`clients::CatalogClient`] is its async interface
//! - **Runtime**: [`config`] and [`lifecycle`]
//!
//! ## Testing
//!
//! [`events::RecordingSink`] captures emitted events, and
//! [`resource_actor::mock`] stands in for the desk actor in client tests.

pub mod clients;
pub mod config;
pub mod context;
pub mod desk_actor;
pub mod error;
pub mod events;
pub mod lifecycle;
pub mod model;
pub mod roles;
pub mod router;
pub mod search;
pub mod services;
pub mod state_machine;
