//! The two-state lifecycle of a loanable resource.
//!
//! ```text
//!   Available --(handle: true)--> CheckedOut
//!   CheckedOut --(handle: false)--> Available
//! ```
//!
//! The call number and due date ride along unchanged. Loan policy (computing a real due
//! date) belongs to whoever seeds the records.

use crate::events::{EventSink, ServiceEvent};
use crate::model::ResourceRecord;
use crate::roles::{ContextBinding, StateHandler};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct StateMachine {
    events: Arc<dyn EventSink>,
}

impl StateMachine {
    pub fn new(events: Arc<dyn EventSink>) -> Self {
        Self { events }
    }

    /// The successor snapshot of `record`, and whether reaching it counts as a reservation.
    pub fn successor(record: ResourceRecord) -> (ResourceRecord, bool) {
        match record {
            ResourceRecord::Available(resource) => (ResourceRecord::CheckedOut(resource), true),
            // checking an item back in succeeds but is not a reservation
            ResourceRecord::CheckedOut(resource) => (ResourceRecord::Available(resource), false),
        }
    }
}

impl StateHandler for StateMachine {
    fn handle(&self, binding: &mut dyn ContextBinding) -> bool {
        let Some(current) = binding.state().cloned() else {
            self.events.emit(&ServiceEvent::UnknownState);
            return false;
        };

        let from = current.lifecycle();
        let (next, reserved) = Self::successor(current);
        let event = ServiceEvent::ReservationToggled {
            call_number: next.call_number().clone(),
            from,
            to: next.lifecycle(),
        };
        binding.bind(next);
        self.events.emit(&event);
        reserved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::RecordingSink;
    use crate::model::{CallNumber, Lifecycle};

    fn machine() -> (StateMachine, Arc<RecordingSink>) {
        let sink = Arc::new(RecordingSink::new());
        (StateMachine::new(sink.clone()), sink)
    }

    #[test]
    fn test_available_becomes_checked_out() {
        let (machine, sink) = machine();
        let mut slot = Some(ResourceRecord::available("123", 12202013));

        assert!(machine.handle(&mut slot));
        assert_eq!(slot, Some(ResourceRecord::checked_out("123", 12202013)));
        assert_eq!(
            sink.events(),
            [ServiceEvent::ReservationToggled {
                call_number: CallNumber::from("123"),
                from: Lifecycle::Available,
                to: Lifecycle::CheckedOut,
            }]
        );
    }

    #[test]
    fn test_checked_out_becomes_available_and_reports_false() {
        let (machine, _sink) = machine();
        let mut slot = Some(ResourceRecord::checked_out("QA76", -1));

        assert!(!machine.handle(&mut slot));
        assert_eq!(slot, Some(ResourceRecord::available("QA76", -1)));
    }

    #[test]
    fn test_two_toggles_restore_original_record() {
        let (machine, _sink) = machine();
        for original in [
            ResourceRecord::available("A", 0),
            ResourceRecord::checked_out("B", 20991231),
        ] {
            let mut slot = Some(original.clone());
            let first = machine.handle(&mut slot);
            let second = machine.handle(&mut slot);
            assert_ne!(first, second);
            assert_eq!(slot, Some(original));
        }
    }

    #[test]
    fn test_empty_binding_is_left_alone() {
        let (machine, sink) = machine();
        let mut slot: Option<ResourceRecord> = None;

        assert!(!machine.handle(&mut slot));
        assert!(slot.is_none());
        assert_eq!(sink.names(), ["unknown-state"]);
    }
}
