//! # Catalog Client
//!
//! The async face of the lending desk actor: catalogue items, route requests to them by
//! call number, and read back their current record.
use crate::desk_actor::{DeskCreate, DeskError, LendingDesk};
use crate::model::{CallNumber, RequestKind, ResourceRecord};
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the lending desk actor.
#[derive(Clone)]
pub struct CatalogClient {
    inner: ResourceClient<LendingDesk>,
}

impl CatalogClient {
    pub fn new(inner: ResourceClient<LendingDesk>) -> Self {
        Self { inner }
    }

    /// Adds an item to the catalog under its call number.
    #[instrument(skip(self))]
    pub async fn catalog(&self, record: ResourceRecord) -> Result<CallNumber, DeskError> {
        debug!("Sending request");
        Ok(self.inner.register(DeskCreate { record }).await?)
    }

    /// Routes `kind` to the desk holding `call_number`.
    ///
    /// For [`RequestKind::BooksReservation`] the result is `true` when the item was checked
    /// out and `false` when it was checked back in.
    pub async fn request(
        &self,
        call_number: CallNumber,
        kind: RequestKind,
    ) -> Result<bool, DeskError> {
        self.perform(call_number, kind).await
    }

    pub async fn reserve_book(&self, call_number: CallNumber) -> Result<bool, DeskError> {
        self.request(call_number, RequestKind::BooksReservation)
            .await
    }

    pub async fn search(&self, call_number: CallNumber) -> Result<bool, DeskError> {
        self.request(call_number, RequestKind::Search).await
    }

    /// The record bound to `call_number`, or `None` when nothing is catalogued under it.
    #[instrument(skip(self))]
    pub async fn current_state(
        &self,
        call_number: CallNumber,
    ) -> Result<Option<ResourceRecord>, DeskError> {
        let desk = self.get(call_number).await?;
        Ok(desk.and_then(|desk| desk.record().cloned()))
    }
}

#[async_trait]
impl ActorClient<LendingDesk> for CatalogClient {
    type Error = DeskError;

    fn inner(&self) -> &ResourceClient<LendingDesk> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        DeskError::from(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReservationError;
    use resource_actor::mock::{create_mock_client, expect_action, expect_register, MockClient};

    #[tokio::test]
    async fn test_reserve_book_sends_books_reservation() {
        let (client, mut receiver) = create_mock_client::<LendingDesk>(10);
        let catalog = CatalogClient::new(client);

        let task = tokio::spawn(async move { catalog.reserve_book(CallNumber::from("123")).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, CallNumber::from("123"));
        assert_eq!(action, RequestKind::BooksReservation);
        responder.send(Ok(true)).unwrap();

        assert_eq!(task.await.unwrap(), Ok(true));
    }

    #[tokio::test]
    async fn test_catalog_sends_record() {
        let (client, mut receiver) = create_mock_client::<LendingDesk>(10);
        let catalog = CatalogClient::new(client);

        let task = tokio::spawn(async move {
            catalog
                .catalog(ResourceRecord::available("QA76", 20250101))
                .await
        });

        let (params, responder) = expect_register(&mut receiver)
            .await
            .expect("Expected Register request");
        assert_eq!(params.record, ResourceRecord::available("QA76", 20250101));
        responder.send(Ok(CallNumber::from("QA76"))).unwrap();

        assert_eq!(task.await.unwrap(), Ok(CallNumber::from("QA76")));
    }

    #[tokio::test]
    async fn test_errors_are_mapped() {
        let mut mock = MockClient::<LendingDesk>::new();
        mock.expect_register()
            .return_err(FrameworkError::AlreadyRegistered("123".to_string()));
        mock.expect_action(CallNumber::from("404"))
            .return_err(FrameworkError::NotFound("404".to_string()));
        mock.expect_action(CallNumber::from("123"))
            .return_err(FrameworkError::EntityError(Box::new(DeskError::Reservation(
                ReservationError::EmptyBinding {
                    subject: "BooksReservation",
                },
            ))));
        mock.expect_get(CallNumber::from("404")).return_ok(None);

        let catalog = CatalogClient::new(mock.client());
        assert_eq!(
            catalog.catalog(ResourceRecord::available("123", 0)).await,
            Err(DeskError::AlreadyCatalogued("123".to_string()))
        );
        assert_eq!(
            catalog.search(CallNumber::from("404")).await,
            Err(DeskError::NotFound("404".to_string()))
        );
        assert_eq!(
            catalog.search(CallNumber::from("123")).await,
            Err(DeskError::Reservation(ReservationError::EmptyBinding {
                subject: "BooksReservation"
            }))
        );
        assert_eq!(catalog.current_state(CallNumber::from("404")).await, Ok(None));

        mock.verify();
    }
}
