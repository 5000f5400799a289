//! # Roles
//!
//! The capability traits that connect a caller, a service endpoint, and a resource-holder.
//!
//! A *subject* is anything that can search a catalog; a subject that also holds a
//! [`ContextBinding`] can have reservations toggled on it. The router checks for the binding
//! at the boundary and fails with a typed error when it is missing, so nothing downstream
//! ever has to guess what kind of subject it was handed.

use crate::error::ReservationError;
use crate::model::{RequestKind, ResourceRecord};

/// The mutable slot associating a subject with its current record snapshot.
pub trait ContextBinding {
    /// The record bound right now, if any.
    fn state(&self) -> Option<&ResourceRecord>;

    /// Replaces the bound record and returns the previous one.
    fn bind(&mut self, next: ResourceRecord) -> Option<ResourceRecord>;
}

/// A bare slot is the simplest binding.
impl ContextBinding for Option<ResourceRecord> {
    fn state(&self) -> Option<&ResourceRecord> {
        self.as_ref()
    }

    fn bind(&mut self, next: ResourceRecord) -> Option<ResourceRecord> {
        self.replace(next)
    }
}

/// Lookup of a resource by call number.
pub trait Search {
    fn search(&self, call_number: &str) -> bool;
}

/// A resource-holder that requests are routed against.
pub trait Subject: Search {
    /// Short name used in logs and errors.
    fn name(&self) -> &'static str;

    fn binding_mut(&mut self) -> Option<&mut dyn ContextBinding> {
        None
    }
}

/// Owner of the lifecycle transition for whatever record a binding holds.
pub trait StateHandler {
    /// Applies one transition to `binding` and reports whether it was a reservation.
    fn handle(&self, binding: &mut dyn ContextBinding) -> bool;
}

/// Entry capability: dispatches a request kind against a subject.
pub trait RequestRouter {
    fn route(&self, subject: &mut dyn Subject, kind: RequestKind)
        -> Result<bool, ReservationError>;
}
