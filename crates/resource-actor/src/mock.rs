//! # Mock Framework
//!
//! Test doubles for code that talks to a `ResourceActor` through a [`ResourceClient`].
//!
//! | | MockClient | Real Actor |
//! |---|---|---|
//! | **State** | Scripted replies | Real store |
//! | **Use Case** | Logic *around* the client | The entity or the whole system |
//! | **Error Injection** | `return_err` | Requires reaching the failing state |
//!
//! Two styles are offered:
//!
//! - [`MockClient`]: queue expectations up front, run the code under test, then
//!   [`MockClient::verify`].
//! - [`create_mock_client`] with [`expect_register`], [`expect_get`] and [`expect_action`]:
//!   drive the receiving side by hand and answer each request explicitly.
//!
//! ```rust
//! use resource_actor::mock::MockClient;
//! use resource_actor::ActorEntity;
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct Locker { number: u32, open: bool }
//! #[derive(Debug)] struct LockerCreate(u32);
//! #[derive(Debug)] enum LockerAction { Toggle }
//! #[derive(Debug, thiserror::Error)] #[error("locker error")] struct LockerError;
//!
//! #[async_trait]
//! impl ActorEntity for Locker {
//!     type Id = u32; type Create = LockerCreate; type Action = LockerAction;
//!     type ActionResult = bool; type Context = (); type Error = LockerError;
//!     fn from_create_params(p: LockerCreate) -> Result<Self, Self::Error> { Ok(Self { number: p.0, open: false }) }
//!     fn id(&self) -> u32 { self.number }
//!     async fn handle_action(&mut self, _: LockerAction, _: &()) -> Result<bool, Self::Error> {
//!         self.open = !self.open;
//!         Ok(self.open)
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Locker>::new();
//!     mock.expect_action(7).return_ok(true);
//!
//!     let client = mock.client();
//!     assert!(client.perform_action(7, LockerAction::Toggle).await.unwrap());
//!     mock.verify();
//! }
//! ```

use crate::{ActorEntity, FrameworkError, ResourceClient, ResourceRequest, Response};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// One scripted reply, consumed in FIFO order.
enum Expectation<T: ActorEntity> {
    Register {
        response: Result<T::Id, FrameworkError>,
    },
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    Withdraw {
        id: T::Id,
        response: Result<(), FrameworkError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, FrameworkError>,
    },
}

struct Script<T: ActorEntity> {
    pending: VecDeque<Expectation<T>>,
    failures: Vec<String>,
}

type SharedScript<T> = Arc<Mutex<Script<T>>>;

fn lock<T: ActorEntity>(script: &SharedScript<T>) -> MutexGuard<'_, Script<T>> {
    script.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A mock client that answers requests from a queue of expectations.
///
/// A request that does not match the next expectation (wrong verb or wrong id) is
/// recorded as a failure and its reply channel is dropped, so the caller observes
/// [`FrameworkError::ActorDropped`] and [`MockClient::verify`] panics with the details.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    script: SharedScript<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let script: SharedScript<T> = Arc::new(Mutex::new(Script {
            pending: VecDeque::new(),
            failures: Vec::new(),
        }));
        let replay = script.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let next = lock(&replay).pending.pop_front();
                if let Err(failure) = answer(request, next) {
                    lock(&replay).failures.push(failure);
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            script,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `register` request.
    pub fn expect_register(&mut self) -> ExpectationBuilder<T, T::Id> {
        ExpectationBuilder::new(self.script.clone(), |response| Expectation::Register {
            response,
        })
    }

    /// Expects a `get` request for `id`.
    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        ExpectationBuilder::new(self.script.clone(), move |response| Expectation::Get {
            id,
            response,
        })
    }

    /// Expects a `withdraw` request for `id`.
    pub fn expect_withdraw(&mut self, id: T::Id) -> ExpectationBuilder<T, ()> {
        ExpectationBuilder::new(self.script.clone(), move |response| Expectation::Withdraw {
            id,
            response,
        })
    }

    /// Expects an `action` request for `id`.
    pub fn expect_action(&mut self, id: T::Id) -> ExpectationBuilder<T, T::ActionResult> {
        ExpectationBuilder::new(self.script.clone(), move |response| Expectation::Action {
            id,
            response,
        })
    }

    /// Panics unless every expectation was consumed by a matching request.
    pub fn verify(&self) {
        let script = lock(&self.script);
        if !script.failures.is_empty() {
            panic!("Unexpected requests: {}", script.failures.join("; "));
        }
        if !script.pending.is_empty() {
            panic!(
                "Not all expectations were met. {} remaining",
                script.pending.len()
            );
        }
    }
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn reply<R>(respond_to: Response<R>, response: Result<R, FrameworkError>) {
    let _ = respond_to.send(response);
}

fn answer<T: ActorEntity>(
    request: ResourceRequest<T>,
    next: Option<Expectation<T>>,
) -> Result<(), String> {
    match (request, next) {
        (ResourceRequest::Register { respond_to, .. }, Some(Expectation::Register { response })) => {
            reply(respond_to, response);
            Ok(())
        }
        (ResourceRequest::Get { id, respond_to }, Some(Expectation::Get { id: want, response }))
            if id == want =>
        {
            reply(respond_to, response);
            Ok(())
        }
        (
            ResourceRequest::Withdraw { id, respond_to },
            Some(Expectation::Withdraw { id: want, response }),
        ) if id == want => {
            reply(respond_to, response);
            Ok(())
        }
        (
            ResourceRequest::Action { id, respond_to, .. },
            Some(Expectation::Action { id: want, response }),
        ) if id == want => {
            reply(respond_to, response);
            Ok(())
        }
        (request, Some(_)) => Err(format!("{} did not match the next expectation", describe(&request))),
        (request, None) => Err(format!("{} arrived with no expectation left", describe(&request))),
    }
}

fn describe<T: ActorEntity>(request: &ResourceRequest<T>) -> String {
    match request {
        ResourceRequest::Register { params, .. } => format!("Register {params:?}"),
        ResourceRequest::Get { id, .. } => format!("Get {id}"),
        ResourceRequest::Withdraw { id, .. } => format!("Withdraw {id}"),
        ResourceRequest::Action { id, action, .. } => format!("Action {action:?} on {id}"),
    }
}

/// Builder that finishes an expectation with either a success or an error reply.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    script: SharedScript<T>,
    make: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    fn new(
        script: SharedScript<T>,
        make: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send + 'static,
    ) -> Self {
        Self {
            script,
            make: Box::new(make),
        }
    }

    /// Replies with `Ok(value)`.
    pub fn return_ok(self, value: R) {
        let expectation = (self.make)(Ok(value));
        lock(&self.script).pending.push_back(expectation);
    }

    /// Replies with `Err(error)`.
    pub fn return_err(self, error: FrameworkError) {
        let expectation = (self.make)(Err(error));
        lock(&self.script).pending.push_back(expectation);
    }
}

// =============================================================================
// MANUAL HELPERS
// =============================================================================

/// Creates a client whose requests land on a receiver owned by the test.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Waits for the next request and returns it if it is a `Register`.
pub async fn expect_register<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, Response<T::Id>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Register { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Waits for the next request and returns it if it is a `Get`.
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Response<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Waits for the next request and returns it if it is an `Action`.
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Action, Response<T::ActionResult>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}
