//! Catalog lookup by call number.

use crate::events::{EventSink, ServiceEvent, TracingSink};
use crate::model::CallNumber;
use crate::roles::Search;
use std::sync::Arc;

/// Stateless lookup capability.
///
/// There is no index behind it yet: every well-formed call number, the empty string
/// included, is reported as found. The only side effect is a `search-performed` event.
#[derive(Debug, Clone)]
pub struct SearchService {
    events: Arc<dyn EventSink>,
}

impl SearchService {
    pub fn new(events: Arc<dyn EventSink>) -> Self {
        Self { events }
    }
}

impl Default for SearchService {
    fn default() -> Self {
        Self::new(Arc::new(TracingSink))
    }
}

impl Search for SearchService {
    fn search(&self, call_number: &str) -> bool {
        self.events.emit(&ServiceEvent::SearchPerformed {
            call_number: CallNumber::from(call_number),
        });
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::RecordingSink;

    #[test]
    fn test_search_always_succeeds_and_reports_call_number() {
        let sink = Arc::new(RecordingSink::new());
        let search = SearchService::new(sink.clone());

        assert!(search.search("123"));
        assert!(search.search(""));
        assert_eq!(
            sink.events(),
            [
                ServiceEvent::SearchPerformed {
                    call_number: CallNumber::from("123")
                },
                ServiceEvent::SearchPerformed {
                    call_number: CallNumber::from("")
                },
            ]
        );
    }
}
