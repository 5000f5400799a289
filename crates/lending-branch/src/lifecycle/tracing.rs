//! # Tracing Setup
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter for the binary.
//!
//! `RUST_LOG` wins when set; otherwise the filter passed in (normally
//! [`BranchConfig::log_filter`](crate::config::BranchConfig::log_filter)) applies.
//!
//! ```bash
//! RUST_LOG=debug cargo run -p lending-branch
//! LENDING_LOG=lending_branch=debug,resource_actor=info cargo run -p lending-branch
//! ```
//!
//! With `info` a reservation reads roughly:
//!
//! ```text
//! INFO Registered entity_type="LendingDesk" id=123 size=1
//! INFO reservation:request: Reservation toggled event="reservation-toggled" call_number=123 from=Available to=CheckedOut
//! INFO reservation: Action ok entity_type="LendingDesk" id=123 outcome=true
//! ```

use tracing_subscriber::EnvFilter;

pub fn setup_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // entity_type and event fields identify the source
        .compact()
        .init();
}
