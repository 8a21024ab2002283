use crate::gateway::HomeGateway;
use crate::home::{HomeConfig, HomeError, HomeViewModel};
use std::sync::Arc;
use tracing::{error, info};

/// Runtime for one home screen session.
///
/// `HomeSystem` is responsible for:
/// - **Lifecycle Management**: Starting the state actor and stopping it at the end
/// - **Dependency Wiring**: Handing the gateway and the store client to the view model
///
/// # Example
///
/// ```ignore
/// let mut system = HomeSystem::new(Arc::new(gateway), HomeConfig::default());
/// system.view_model.start();
/// let state = system.view_model.settled().await?;
///
/// // Gracefully shut down when the screen goes away
/// system.shutdown().await?;
/// ```
pub struct HomeSystem {
    /// The screen's view model
    pub view_model: HomeViewModel,

    /// Task handle of the state actor (used for graceful shutdown)
    store_handle: tokio::task::JoinHandle<()>,
}

impl HomeSystem {
    /// Spawns the state actor and builds the view model around it.
    ///
    /// Nothing is loaded yet; call [`HomeViewModel::start`].
    pub fn new(gateway: Arc<dyn HomeGateway>, config: HomeConfig) -> Self {
        let (store_actor, store_client) = crate::home::new_store(config.store_buffer);
        let store_handle = tokio::spawn(store_actor.run());
        let view_model = HomeViewModel::new(gateway, store_client, config);

        Self { view_model, store_handle }
    }

    /// Like [`Self::new`], with the configuration read from the environment.
    pub fn from_env(gateway: Arc<dyn HomeGateway>) -> Result<Self, HomeError> {
        Self::from_lookup(gateway, |key| std::env::var(key).ok())
    }

    /// Like [`Self::from_env`] with a custom variable source.
    pub fn from_lookup(
        gateway: Arc<dyn HomeGateway>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, HomeError> {
        let config = HomeConfig::from_lookup(lookup)?;
        info!(?config, "Opening home screen");
        Ok(Self::new(gateway, config))
    }

    /// Gracefully shuts down the session.
    ///
    /// This method:
    /// 1. Clears the view model, abandoning loads still in flight
    /// 2. Drops the view model, which closes the store's channel
    /// 3. Waits for the state actor to finish
    pub async fn shutdown(mut self) -> Result<(), HomeError> {
        info!("Shutting down home screen...");

        self.view_model.clear().await?;

        // The view model holds the last store client. Dropping it ends the actor's loop.
        drop(self.view_model);

        if let Err(e) = self.store_handle.await {
            error!("State actor failed: {:?}", e);
            return Err(HomeError::TaskFailed(e.to_string()));
        }

        info!("Home screen shutdown complete.");
        Ok(())
    }
}
