//! One reservation toggle for a bound subject.

use crate::model::ResourceRecord;
use crate::roles::{ContextBinding, StateHandler};

/// Pairs a subject's binding with the record it held when the request arrived and runs a
/// single transition over it.
///
/// [`ReservationContext::execute`] hands the *binding* to the state handler, which reads the
/// record bound at that moment. The snapshot captured at construction is informational only.
///
/// The result is `true` only for Available -> CheckedOut. Returning an item (CheckedOut ->
/// Available) also succeeds but yields `false`; callers must not read `false` as failure.
pub struct ReservationContext<'a> {
    binding: &'a mut dyn ContextBinding,
    state: Option<ResourceRecord>,
    handler: &'a dyn StateHandler,
}

impl<'a> ReservationContext<'a> {
    pub fn new(
        binding: &'a mut dyn ContextBinding,
        state: Option<ResourceRecord>,
        handler: &'a dyn StateHandler,
    ) -> Self {
        Self {
            binding,
            state,
            handler,
        }
    }

    /// The record captured when the context was built.
    pub fn state(&self) -> Option<&ResourceRecord> {
        self.state.as_ref()
    }

    pub fn execute(self) -> bool {
        self.handler.handle(self.binding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::NullSink;
    use crate::state_machine::StateMachine;
    use std::sync::Arc;

    #[test]
    fn test_execute_toggles_bound_record() {
        let machine = StateMachine::new(Arc::new(NullSink));
        let mut slot = Some(ResourceRecord::available("123", 12202013));
        let current = slot.clone();

        let context = ReservationContext::new(&mut slot, current.clone(), &machine);
        assert_eq!(context.state(), current.as_ref());
        assert!(context.execute());
        assert_eq!(slot, Some(ResourceRecord::checked_out("123", 12202013)));
    }

    #[test]
    fn test_execute_reads_binding_not_snapshot() {
        let machine = StateMachine::new(Arc::new(NullSink));
        let mut slot = Some(ResourceRecord::available("123", 1));
        let stale = Some(ResourceRecord::checked_out("123", 1));

        // a CheckedOut snapshot would yield false; the bound Available record yields true
        assert!(ReservationContext::new(&mut slot, stale, &machine).execute());
        assert_eq!(slot, Some(ResourceRecord::checked_out("123", 1)));
    }
}
