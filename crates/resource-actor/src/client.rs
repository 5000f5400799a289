//! # Generic Client
//!
//! The sending half of a `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use tokio::sync::{mpsc, oneshot};

/// A type-safe, cheaply cloneable handle for talking to a `ResourceActor`.
///
/// Every call sends one [`ResourceRequest`] and awaits the reply on a oneshot channel.
/// A closed request channel maps to [`FrameworkError::ActorClosed`], a dropped reply to
/// [`FrameworkError::ActorDropped`].
#[derive(Clone)]
pub struct ResourceClient<T: ActorEntity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: ActorEntity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn register(&self, params: T::Create) -> Result<T::Id, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.send(ResourceRequest::Register { params, respond_to })
            .await?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.send(ResourceRequest::Get { id, respond_to }).await?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn withdraw(&self, id: T::Id) -> Result<(), FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.send(ResourceRequest::Withdraw { id, respond_to })
            .await?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.send(ResourceRequest::Action {
            id,
            action,
            respond_to,
        })
        .await?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    async fn send(&self, request: ResourceRequest<T>) -> Result<(), FrameworkError> {
        self.sender
            .send(request)
            .await
            .map_err(|_| FrameworkError::ActorClosed)
    }
}
