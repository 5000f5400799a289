//! [`ActorEntity`] implementation for [`LendingDesk`].

use super::error::DeskError;
use crate::model::{CallNumber, RequestKind, ResourceRecord};
use crate::roles::RequestRouter;
use crate::router::ServiceEndpoint;
use crate::search::SearchService;
use crate::services::BooksReservation;
use async_trait::async_trait;
use resource_actor::ActorEntity;

/// One catalogued item and the reservation desk bound to it.
#[derive(Debug, Clone)]
pub struct LendingDesk {
    pub call_number: CallNumber,
    pub desk: BooksReservation,
}

impl LendingDesk {
    /// The record currently bound to the desk.
    pub fn record(&self) -> Option<&ResourceRecord> {
        self.desk.state()
    }
}

/// Payload for cataloguing an item.
#[derive(Debug, Clone)]
pub struct DeskCreate {
    pub record: ResourceRecord,
}

#[async_trait]
impl ActorEntity for LendingDesk {
    type Id = CallNumber;
    type Create = DeskCreate;
    type Action = RequestKind;
    type ActionResult = bool;
    type Context = ServiceEndpoint;
    type Error = DeskError;

    fn from_create_params(params: DeskCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            call_number: params.record.call_number().clone(),
            desk: BooksReservation::new(params.record, SearchService::default()),
        })
    }

    fn id(&self) -> CallNumber {
        self.call_number.clone()
    }

    /// Points the desk's search at the endpoint's event sink.
    async fn on_create(&mut self, ctx: &ServiceEndpoint) -> Result<(), Self::Error> {
        self.desk.set_search(SearchService::new(ctx.events()));
        Ok(())
    }

    async fn handle_action(
        &mut self,
        kind: RequestKind,
        ctx: &ServiceEndpoint,
    ) -> Result<bool, Self::Error> {
        Ok(ctx.route(&mut self.desk, kind)?)
    }
}
