//! # Lending Branch
//!
//! Starts a branch from the environment (see [`lending_branch::config`]) and walks one item
//! through a reservation, a return, a search, and a request the branch does not serve.

use lending_branch::config::BranchConfig;
use lending_branch::events::TracingSink;
use lending_branch::lifecycle::{setup_tracing, BranchSystem};
use lending_branch::model::{RequestKind, ResourceRecord};
use std::sync::Arc;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut config = BranchConfig::from_env()?;
    setup_tracing(&config.log_filter);

    if config.catalog.is_empty() {
        config.catalog.push(ResourceRecord::available("123", 12202013));
    }
    let call_number = config.catalog[0].call_number().clone();

    info!(branch = %config.branch_name, "Starting lending branch");
    let system = BranchSystem::start(&config, Arc::new(TracingSink)).await?;

    let span = tracing::info_span!("reservation", %call_number);
    async {
        for _ in 0..2 {
            let checked_out = system.catalog.reserve_book(call_number.clone()).await?;
            info!(checked_out, "Reservation handled");
        }
        Ok::<_, lending_branch::desk_actor::DeskError>(())
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("search", %call_number);
    let found = async { system.catalog.search(call_number.clone()).await }
        .instrument(span)
        .await?;
    info!(found, "Search handled");

    match system
        .catalog
        .request(call_number.clone(), RequestKind::DVDReservation)
        .await
    {
        Ok(handled) => info!(handled, "DVD request handled"),
        Err(e) => error!(error = %e, "DVD request failed"),
    }

    if let Some(record) = system.catalog.current_state(call_number).await? {
        info!(state = %record.lifecycle(), due_date = record.due_date(), "Final state");
    }

    system.shutdown().await?;
    info!("Application completed successfully");
    Ok(())
}
