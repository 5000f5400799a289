//! # Generic Messages
//!
//! The request envelope passed from a `ResourceClient` to its `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Message sent to the actor to request an operation.
///
/// A registry of keyed resources needs four verbs:
///
/// - **Register**: insert a new entity built from [`ActorEntity::Create`] under its own key.
/// - **Get**: return a snapshot of the entity.
/// - **Withdraw**: remove the entity.
/// - **Action**: run an [`ActorEntity::Action`] against the entity, mutating it in place.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Register {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Withdraw {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
