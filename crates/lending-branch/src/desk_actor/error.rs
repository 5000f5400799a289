//! Error types for the lending desk actor.

use crate::error::ReservationError;
use resource_actor::FrameworkError;
use thiserror::Error;

/// Errors that can occur while cataloguing items or routing requests to them.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DeskError {
    /// The request reached the desk but its subject broke the routing contract.
    #[error(transparent)]
    Reservation(#[from] ReservationError),

    /// No desk is catalogued under this call number.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// A desk already exists for this call number.
    #[error("Resource already catalogued: {0}")]
    AlreadyCatalogued(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for DeskError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => Self::NotFound(id),
            FrameworkError::AlreadyRegistered(id) => Self::AlreadyCatalogued(id),
            other => other
                .into_entity_error::<DeskError>()
                .unwrap_or_else(|e| Self::ActorCommunicationError(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_framework_errors_map_to_desk_errors() {
        assert_eq!(
            DeskError::from(FrameworkError::NotFound("123".into())),
            DeskError::NotFound("123".into())
        );
        assert_eq!(
            DeskError::from(FrameworkError::AlreadyRegistered("123".into())),
            DeskError::AlreadyCatalogued("123".into())
        );
        assert_eq!(
            DeskError::from(FrameworkError::ActorClosed),
            DeskError::ActorCommunicationError("Actor closed".into())
        );
    }

    #[test]
    fn test_entity_error_is_recovered() {
        let inner = DeskError::Reservation(ReservationError::EmptyBinding {
            subject: "BooksReservation",
        });
        let boxed = FrameworkError::EntityError(Box::new(inner.clone()));
        assert_eq!(DeskError::from(boxed), inner);
    }
}
