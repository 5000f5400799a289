//! # Service Events
//!
//! The observable side effects of routing a request. The core never writes to a console or
//! a logger directly; it hands a [`ServiceEvent`] to whatever [`EventSink`] the host
//! injected. Emission returns nothing, so a sink can never fail the operation it annotates.
//!
//! | Event | Emitted by | Carries |
//! |-------|-----------|---------|
//! | `search-performed` | [`SearchService`](crate::search::SearchService) | call number |
//! | `reservation-toggled` | [`StateMachine`](crate::state_machine::StateMachine) | call number, from, to |
//! | `unrecognized-request` | [`ServiceEndpoint`](crate::router::ServiceEndpoint) | request kind, call number |
//! | `unknown-state` | [`StateMachine`](crate::state_machine::StateMachine) | nothing bound |

use crate::model::{CallNumber, Lifecycle, RequestKind};
use std::fmt::Debug;
use std::sync::{Mutex, PoisonError};
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceEvent {
    SearchPerformed {
        call_number: CallNumber,
    },
    ReservationToggled {
        call_number: CallNumber,
        from: Lifecycle,
        to: Lifecycle,
    },
    UnrecognizedRequest {
        request: RequestKind,
        call_number: Option<CallNumber>,
    },
    /// Diagnostic: the state machine was handed a binding holding no record.
    UnknownState,
}

impl ServiceEvent {
    /// The stable event name hosts can filter on.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SearchPerformed { .. } => "search-performed",
            Self::ReservationToggled { .. } => "reservation-toggled",
            Self::UnrecognizedRequest { .. } => "unrecognized-request",
            Self::UnknownState => "unknown-state",
        }
    }

    pub fn call_number(&self) -> Option<&CallNumber> {
        match self {
            Self::SearchPerformed { call_number }
            | Self::ReservationToggled { call_number, .. } => Some(call_number),
            Self::UnrecognizedRequest { call_number, .. } => call_number.as_ref(),
            Self::UnknownState => None,
        }
    }
}

/// Destination for service events.
pub trait EventSink: Send + Sync + Debug {
    fn emit(&self, event: &ServiceEvent);
}

/// Forwards events to `tracing` as structured records. The default sink.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&self, event: &ServiceEvent) {
        let name = event.name();
        match event {
            ServiceEvent::SearchPerformed { call_number } => {
                info!(event = name, %call_number, "Search operation");
            }
            ServiceEvent::ReservationToggled {
                call_number,
                from,
                to,
            } => {
                info!(event = name, %call_number, %from, %to, "Reservation toggled");
            }
            ServiceEvent::UnrecognizedRequest {
                request,
                call_number,
            } => {
                info!(event = name, %request, ?call_number, "Unrecognized request");
            }
            ServiceEvent::UnknownState => {
                warn!(event = name, "No resource bound; nothing to toggle");
            }
        }
    }
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&self, _event: &ServiceEvent) {}
}

/// Keeps every event in memory, in emission order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<ServiceEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ServiceEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.events().iter().map(ServiceEvent::name).collect()
    }

    pub fn clear(&self) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl EventSink for RecordingSink {
    fn emit(&self, event: &ServiceEvent) {
        // a poisoned lock still records; emission must not fail
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names_are_stable() {
        let cn = CallNumber::from("123");
        let events = [
            ServiceEvent::SearchPerformed {
                call_number: cn.clone(),
            },
            ServiceEvent::ReservationToggled {
                call_number: cn.clone(),
                from: Lifecycle::Available,
                to: Lifecycle::CheckedOut,
            },
            ServiceEvent::UnrecognizedRequest {
                request: RequestKind::CDReservation,
                call_number: None,
            },
            ServiceEvent::UnknownState,
        ];
        let names: Vec<_> = events.iter().map(ServiceEvent::name).collect();
        assert_eq!(
            names,
            [
                "search-performed",
                "reservation-toggled",
                "unrecognized-request",
                "unknown-state"
            ]
        );
        assert_eq!(events[1].call_number(), Some(&cn));
        assert_eq!(events[2].call_number(), None);
    }

    #[test]
    fn test_recording_sink_keeps_order_and_clears() {
        let sink = RecordingSink::new();
        sink.emit(&ServiceEvent::UnknownState);
        sink.emit(&ServiceEvent::SearchPerformed {
            call_number: CallNumber::from(""),
        });
        assert_eq!(sink.names(), ["unknown-state", "search-performed"]);

        sink.clear();
        assert!(sink.events().is_empty());
    }

    #[test]
    fn test_tracing_and_null_sinks_accept_every_event() {
        let event = ServiceEvent::UnrecognizedRequest {
            request: RequestKind::DVDReservation,
            call_number: Some(CallNumber::from("123")),
        };
        TracingSink.emit(&event);
        NullSink.emit(&event);
    }
}
