use async_trait::async_trait;
use tracing::{debug, info, instrument};

use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::menu_actor::MenuError;
use crate::model::{MenuItem, MenuItemCreate};

/// Client for the catalog (menu) actor.
///
/// Merchant-only writes: `add_item` and `remove_item` sit behind the
/// merchant gate at the interaction layer. Reads are open to everyone.
#[derive(Clone)]
pub struct MenuClient {
    inner: ResourceClient<MenuItem>,
}

impl MenuClient {
    pub fn new(inner: ResourceClient<MenuItem>) -> Self {
        Self { inner }
    }

    /// Appends a new catalog item and returns its generated id.
    #[instrument(skip(self, item))]
    pub async fn add_item(&self, item: MenuItemCreate) -> Result<String, MenuError> {
        debug!(?item, "add_item called");
        self.inner
            .create(item)
            .await
            .map_err(Self::map_error)
    }

    /// All catalog items in insertion order.
    pub async fn list_items(&self) -> Result<Vec<MenuItem>, MenuError> {
        self.list().await
    }

    /// Deletes the item with `id`. Removing an unknown id is a no-op;
    /// order snapshots taken earlier are never affected.
    #[instrument(skip(self))]
    pub async fn remove_item(&self, id: &str) -> Result<(), MenuError> {
        match self.inner.delete(id.to_string()).await {
            Ok(()) => {
                info!(%id, "menu item removed");
                Ok(())
            }
            Err(FrameworkError::NotFound(_)) => Ok(()),
            Err(e) => Err(Self::map_error(e)),
        }
    }
}

#[async_trait]
impl ActorClient<MenuItem> for MenuClient {
    type Error = MenuError;

    fn inner(&self) -> &ResourceClient<MenuItem> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        MenuError::ActorCommunicationError(e.to_string())
    }
}
