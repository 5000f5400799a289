use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// The kinds of request a caller can send to a service endpoint.
///
/// Only [`RequestKind::BooksReservation`] and [`RequestKind::Search`] have behaviour.
/// The media reservations are accepted and reported as unrecognized.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestKind {
    BooksReservation,
    DVDReservation,
    CDReservation,
    EntertainmentPkgReservation,
    Search,
}

impl RequestKind {
    pub const ALL: [RequestKind; 5] = [
        Self::BooksReservation,
        Self::DVDReservation,
        Self::CDReservation,
        Self::EntertainmentPkgReservation,
        Self::Search,
    ];

    /// Whether a router has a handler for this kind.
    pub fn is_supported(self) -> bool {
        matches!(self, Self::BooksReservation | Self::Search)
    }
}

impl Display for RequestKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_books_and_search_are_supported() {
        let supported: Vec<_> = RequestKind::ALL
            .into_iter()
            .filter(|kind| kind.is_supported())
            .collect();
        assert_eq!(supported, [RequestKind::BooksReservation, RequestKind::Search]);
        assert_eq!(RequestKind::DVDReservation.to_string(), "DVDReservation");
    }
}
