//! Resource-holders that requests are routed against.

use crate::model::ResourceRecord;
use crate::roles::{ContextBinding, Search, Subject};
use crate::search::SearchService;

/// A branch service that can search the catalog but holds no record.
///
/// Routing any request through it fails the binding precondition.
#[derive(Debug, Clone, Default)]
pub struct LendingBranchServices {
    search: SearchService,
}

impl LendingBranchServices {
    pub fn new(search: SearchService) -> Self {
        Self { search }
    }
}

impl Search for LendingBranchServices {
    fn search(&self, call_number: &str) -> bool {
        self.search.search(call_number)
    }
}

impl Subject for LendingBranchServices {
    fn name(&self) -> &'static str {
        "LendingBranchServices"
    }
}

/// A book reservation desk: one bound record plus catalog search.
#[derive(Debug, Clone)]
pub struct BooksReservation {
    state: Option<ResourceRecord>,
    search: SearchService,
}

impl BooksReservation {
    pub fn new(record: ResourceRecord, search: SearchService) -> Self {
        Self {
            state: Some(record),
            search,
        }
    }

    /// A desk with nothing bound yet.
    pub fn unbound(search: SearchService) -> Self {
        Self {
            state: None,
            search,
        }
    }

    pub fn state(&self) -> Option<&ResourceRecord> {
        self.state.as_ref()
    }

    pub fn set_search(&mut self, search: SearchService) {
        self.search = search;
    }
}

impl Search for BooksReservation {
    fn search(&self, call_number: &str) -> bool {
        self.search.search(call_number)
    }
}

impl Subject for BooksReservation {
    fn name(&self) -> &'static str {
        "BooksReservation"
    }

    fn binding_mut(&mut self) -> Option<&mut dyn ContextBinding> {
        Some(&mut self.state)
    }
}
