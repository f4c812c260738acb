use tracing::{error, info};
use crate::actor_framework::{ResourceActor, SequentialIds};
use crate::app_system::CheckoutConfig;
use crate::clients::CheckoutClient;
use crate::domain::Order;

/// The application system: the order store actor plus the client wired to it.
pub struct CheckoutSystem {
    pub checkout_client: CheckoutClient,
    handle: tokio::task::JoinHandle<()>,
}

impl CheckoutSystem {
    pub fn new(config: &CheckoutConfig) -> Self {
        info!(?config, "Starting checkout system");
        let (order_actor, order_resource_client) =
            ResourceActor::<Order>::new(config.mailbox_capacity, SequentialIds::default());
        let checkout_client = CheckoutClient::new(order_resource_client, config.pricing);
        let handle = tokio::spawn(order_actor.run());

        Self { checkout_client, handle }
    }

    /// Drops the client, which closes the mailbox, then waits for the actor.
    ///
    /// Clones of the client handed out earlier keep the actor alive until they
    /// are dropped too.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");
        drop(self.checkout_client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(format!("Actor task failed: {:?}", e));
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
