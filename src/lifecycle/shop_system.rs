use tracing::{error, info};

use crate::clients::{MenuClient, OrderClient};
use crate::menu_actor::MenuError;
use crate::model::{Category, MenuItemCreate};

/// The runtime orchestrator for the shop.
///
/// `ShopSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping the resource actors
/// - **Wiring**: Handing out the clients the UI surfaces talk to
///
/// # Architecture
///
/// Two actors back the shared store:
/// - **Menu Actor**: the catalog (merchant add/remove, public listing)
/// - **Order Actor**: placed orders, queue tickets, and the status lifecycle
///
/// The cart and chat transcript are plain session data, and the assistant
/// bridge is stateless, so neither needs an actor.
///
/// # Example
///
/// ```ignore
/// let system = ShopSystem::new();
/// system.seed_default_menu().await?;
///
/// let mut cart = Cart::new();
/// for item in system.menu_client.list_items().await? {
///     cart.add(item);
/// }
/// let ticket = system.order_client.place_order("Som", &mut cart).await?;
///
/// system.shutdown().await?;
/// ```
pub struct ShopSystem {
    /// Client for the catalog actor.
    pub menu_client: MenuClient,

    /// Client for the order actor.
    pub order_client: OrderClient,

    /// Task handles for all running actors (used for graceful shutdown).
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl ShopSystem {
    /// Creates and starts a shop with empty catalog and order list.
    pub fn new() -> Self {
        let (menu_actor, menu_client) = crate::menu_actor::new();
        let (order_actor, order_client) = crate::order_actor::new();

        // Neither entity needs runtime dependencies (Context = ()).
        let menu_handle = tokio::spawn(menu_actor.run(()));
        let order_handle = tokio::spawn(order_actor.run(()));

        Self {
            menu_client,
            order_client,
            handles: vec![menu_handle, order_handle],
        }
    }

    /// Installs the house menu the shop opens with.
    pub async fn seed_default_menu(&self) -> Result<(), MenuError> {
        let defaults = [
            MenuItemCreate {
                name: "Thai iced tea, Phayao blend".to_string(),
                price: 45,
                category: Category::Drink,
                description: "Strong and fragrant, just the right sweetness".to_string(),
            },
            MenuItemCreate {
                name: "Wagyu boat noodles".to_string(),
                price: 120,
                category: Category::Food,
                description: "Rich broth with premium wagyu slices".to_string(),
            },
            MenuItemCreate {
                name: "Nam prik num with blanched greens".to_string(),
                price: 65,
                category: Category::Food,
                description: "Authentic Phayao recipe".to_string(),
            },
            MenuItemCreate {
                name: "Butterfly pea lime honey".to_string(),
                price: 40,
                category: Category::Drink,
                description: "Real fifth-month honey".to_string(),
            },
        ];

        for item in defaults {
            self.menu_client.add_item(item).await?;
        }
        info!("default menu seeded");
        Ok(())
    }

    /// Gracefully shuts down the shop.
    ///
    /// Dropping the clients closes their channels; each actor drains its
    /// queue and exits its loop. Returns an error if any actor task
    /// panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.menu_client);
        drop(self.order_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "actor task failed");
                return Err(format!("actor task failed: {e}"));
            }
        }

        info!("System shut down cleanly");
        Ok(())
    }
}

impl Default for ShopSystem {
    fn default() -> Self {
        Self::new()
    }
}
