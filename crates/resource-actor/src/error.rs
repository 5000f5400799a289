//! # Framework Errors
//!
//! Errors raised by the actor plumbing itself, as opposed to the entities it hosts.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Item already registered: {0}")]
    AlreadyRegistered(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Recovers the entity's own error type from an [`FrameworkError::EntityError`].
    ///
    /// Returns `Err(self)` unchanged when the error is not an entity error of type `E`.
    pub fn into_entity_error<E>(self) -> Result<E, Self>
    where
        E: std::error::Error + 'static,
    {
        match self {
            Self::EntityError(inner) => match inner.downcast::<E>() {
                Ok(concrete) => Ok(*concrete),
                Err(other) => Err(Self::EntityError(other)),
            },
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error, PartialEq)]
    #[error("desk jammed")]
    struct Jammed;

    #[derive(Debug, thiserror::Error)]
    #[error("other")]
    struct Other;

    #[test]
    fn test_into_entity_error_recovers_concrete_type() {
        let err = FrameworkError::EntityError(Box::new(Jammed));
        assert_eq!(err.into_entity_error::<Jammed>().unwrap(), Jammed);
    }

    #[test]
    fn test_into_entity_error_keeps_mismatched_errors() {
        let err = FrameworkError::EntityError(Box::new(Other));
        let back = err.into_entity_error::<Jammed>().unwrap_err();
        assert!(matches!(back, FrameworkError::EntityError(_)));

        let closed = FrameworkError::ActorClosed.into_entity_error::<Jammed>();
        assert!(matches!(closed, Err(FrameworkError::ActorClosed)));
    }
}
