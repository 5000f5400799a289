//! # Service Endpoint
//!
//! The single entry point for requests. [`ServiceEndpoint::route`] checks the subject's
//! capabilities, then dispatches on [`RequestKind`]:
//!
//! | Kind | Handler | Result |
//! |------|---------|--------|
//! | `BooksReservation` | [`ReservationContext`] over the subject's binding | `true` only when the item was checked out |
//! | `Search` | the subject's own [`Search`] with the bound call number | search outcome |
//! | media reservations | none; `unrecognized-request` event | `false` |

use crate::context::ReservationContext;
use crate::error::ReservationError;
use crate::events::{EventSink, ServiceEvent, TracingSink};
use crate::model::RequestKind;
use crate::roles::{RequestRouter, Subject};
use crate::state_machine::StateMachine;
use std::sync::Arc;
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct ServiceEndpoint {
    events: Arc<dyn EventSink>,
    machine: StateMachine,
}

impl ServiceEndpoint {
    pub fn new(events: Arc<dyn EventSink>) -> Self {
        Self {
            machine: StateMachine::new(events.clone()),
            events,
        }
    }

    /// The sink this endpoint reports to.
    pub fn events(&self) -> Arc<dyn EventSink> {
        self.events.clone()
    }
}

impl Default for ServiceEndpoint {
    fn default() -> Self {
        Self::new(Arc::new(TracingSink))
    }
}

impl RequestRouter for ServiceEndpoint {
    fn route(
        &self,
        subject: &mut dyn Subject,
        kind: RequestKind,
    ) -> Result<bool, ReservationError> {
        let name = subject.name();
        debug!(subject = name, %kind, supported = kind.is_supported(), "Routing request");

        let Some(binding) = subject.binding_mut() else {
            warn!(subject = name, %kind, "No current-state binding");
            return Err(ReservationError::MissingBinding { subject: name });
        };

        match kind {
            RequestKind::BooksReservation => {
                let current = binding.state().cloned();
                Ok(ReservationContext::new(binding, current, &self.machine).execute())
            }
            RequestKind::Search => {
                let call_number = binding
                    .state()
                    .map(|record| record.call_number().clone())
                    .ok_or(ReservationError::EmptyBinding { subject: name })?;
                Ok(subject.search(call_number.as_str()))
            }
            RequestKind::DVDReservation
            | RequestKind::CDReservation
            | RequestKind::EntertainmentPkgReservation => {
                self.events.emit(&ServiceEvent::UnrecognizedRequest {
                    request: kind,
                    call_number: binding.state().map(|record| record.call_number().clone()),
                });
                Ok(false)
            }
        }
    }
}

/// A request bound to its subject and endpoint, ready to run.
///
/// Running it twice routes the same kind twice, which for a book reservation checks the
/// item out and then back in.
pub struct ResourceRequestContext<'a, R: RequestRouter + ?Sized> {
    router: &'a R,
    subject: &'a mut dyn Subject,
    kind: RequestKind,
}

impl<'a, R: RequestRouter + ?Sized> ResourceRequestContext<'a, R> {
    pub fn new(subject: &'a mut dyn Subject, router: &'a R, kind: RequestKind) -> Self {
        Self {
            router,
            subject,
            kind,
        }
    }

    pub fn kind(&self) -> RequestKind {
        self.kind
    }

    pub fn execute(&mut self) -> Result<bool, ReservationError> {
        self.router.route(&mut *self.subject, self.kind)
    }
}
