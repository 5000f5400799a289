//! Error types for request routing.
//!
//! Only a broken capability contract is an error. An unrecognized request kind and an empty
//! binding reaching the state machine are reported as `false` plus a
//! [`ServiceEvent`](crate::events::ServiceEvent), never as `Err`.

use thiserror::Error;

/// A subject did not offer what the router needs to serve the request.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReservationError {
    /// The subject has no current-state binding at all.
    #[error("{subject} does not expose a current-state binding")]
    MissingBinding { subject: &'static str },

    /// The subject has a binding, but no record is bound to it, so there is no call
    /// number to search for.
    #[error("{subject} has no resource bound")]
    EmptyBinding { subject: &'static str },
}
