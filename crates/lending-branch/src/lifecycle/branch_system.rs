use crate::clients::CatalogClient;
use crate::config::BranchConfig;
use crate::desk_actor::{self, DeskError};
use crate::events::EventSink;
use crate::router::ServiceEndpoint;
use std::sync::Arc;
use thiserror::Error;
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("failed to seed catalog: {0}")]
    Seed(#[from] DeskError),

    #[error("actor task failed: {0}")]
    ActorTask(#[from] JoinError),
}

/// A running lending branch: the desk actor, its catalog client and the task driving it.
///
/// # Example
///
/// ```ignore
/// let system = BranchSystem::start(&BranchConfig::default(), Arc::new(TracingSink)).await?;
/// let id = system.catalog.catalog(ResourceRecord::available("123", 12202013)).await?;
/// system.catalog.reserve_book(id).await?;
/// system.shutdown().await?;
/// ```
pub struct BranchSystem {
    /// Client for the desk actor. Clone it freely; every clone feeds the same actor.
    pub catalog: CatalogClient,

    branch_name: String,

    /// Actor tasks awaited on shutdown.
    handles: Vec<JoinHandle<()>>,
}

impl BranchSystem {
    /// Spawns the desk actor with `events` as its sink and catalogues `config.catalog`.
    ///
    /// If seeding fails the actor is shut down before the error is returned.
    pub async fn start(
        config: &BranchConfig,
        events: Arc<dyn EventSink>,
    ) -> Result<Self, LifecycleError> {
        let (actor, generic_client) = desk_actor::new(config.channel_capacity);
        let handle = tokio::spawn(actor.run(ServiceEndpoint::new(events)));

        let system = Self {
            catalog: CatalogClient::new(generic_client),
            branch_name: config.branch_name.clone(),
            handles: vec![handle],
        };

        for record in &config.catalog {
            let seeded = system.catalog.catalog(record.clone()).await;
            if let Err(e) = seeded {
                error!(branch = %system.branch_name, error = %e, "Seeding failed");
                system.shutdown().await?;
                return Err(e.into());
            }
        }

        info!(
            branch = %system.branch_name,
            seeded = config.catalog.len(),
            "Branch open"
        );
        Ok(system)
    }

    pub fn branch_name(&self) -> &str {
        &self.branch_name
    }

    /// Closes the catalog channel and waits for the actor to drain and exit.
    ///
    /// Clones of [`catalog`](Self::catalog) held elsewhere keep the actor alive, so drop them
    /// first.
    pub async fn shutdown(self) -> Result<(), LifecycleError> {
        info!(branch = %self.branch_name, "Shutting down branch...");

        drop(self.catalog);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(e.into());
            }
        }

        info!(branch = %self.branch_name, "Branch shutdown complete.");
        Ok(())
    }
}
