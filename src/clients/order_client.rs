use async_trait::async_trait;
use tracing::{debug, info, instrument};

use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Cart, Order, OrderCreate, OrderStatus};
use crate::order_actor::{OrderAction, OrderActionResult, OrderError};

/// Client for the order actor, carrying the cart → order workflow.
///
/// `place_order` is the customer-facing entry point; `advance` and
/// `reset_all` are merchant actions gated at the interaction layer. The
/// status views are recomputed from a full list on every read.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    /// Places an order from the cart contents.
    ///
    /// An empty cart is a quiet no-op (`Ok(None)`): no order is created and
    /// no ticket is consumed. Otherwise the cart lines are snapshotted into
    /// a new pending order and the cart is cleared only after the actor has
    /// confirmed the order, so a failed placement leaves the cart intact.
    /// A blank customer name becomes the generic placeholder.
    #[instrument(skip(self, cart))]
    pub async fn place_order(
        &self,
        customer_name: &str,
        cart: &mut Cart,
    ) -> Result<Option<String>, OrderError> {
        if cart.is_empty() {
            debug!("cart is empty, nothing to place");
            return Ok(None);
        }

        let payload = OrderCreate {
            customer_name: customer_name.to_string(),
            lines: cart.lines().to_vec(),
        };
        let ticket = self.inner.create(payload).await.map_err(Self::map_error)?;
        cart.clear();
        info!(%ticket, "order placed");
        Ok(Some(ticket))
    }

    /// Moves an order to `target` along a forward edge of the lifecycle.
    ///
    /// Invalid edges come back as [`OrderError::InvalidTransition`] and
    /// leave the order's status unchanged.
    #[instrument(skip(self))]
    pub async fn advance(&self, ticket: &str, target: OrderStatus) -> Result<OrderStatus, OrderError> {
        let result = self
            .inner
            .perform_action(ticket.to_string(), OrderAction::Advance(target))
            .await;
        match result {
            Ok(OrderActionResult::Advanced(status)) => {
                info!(%ticket, ?status, "order advanced");
                Ok(status)
            }
            Err(FrameworkError::NotFound(id)) => Err(OrderError::NotFound(id)),
            Err(FrameworkError::Custom(msg)) => Err(OrderError::InvalidTransition(msg)),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Shop-wide reset: wipes all orders, rewinds the ticket sequence to 1,
    /// and empties the cart. No confirmation, no undo.
    #[instrument(skip(self, cart))]
    pub async fn reset_all(&self, cart: &mut Cart) -> Result<(), OrderError> {
        self.inner.clear().await.map_err(Self::map_error)?;
        cart.clear();
        info!("orders and cart reset");
        Ok(())
    }

    /// Full order history, placement order, terminal orders included.
    pub async fn all_orders(&self) -> Result<Vec<Order>, OrderError> {
        self.list().await
    }

    /// Orders waiting for pickup (customer "ready" board).
    pub async fn ready_orders(&self) -> Result<Vec<Order>, OrderError> {
        Ok(self
            .list()
            .await?
            .into_iter()
            .filter(|o| o.status == OrderStatus::Ready)
            .collect())
    }

    /// Orders still being worked on (customer "preparing" board).
    pub async fn in_progress_orders(&self) -> Result<Vec<Order>, OrderError> {
        Ok(self
            .list()
            .await?
            .into_iter()
            .filter(|o| matches!(o.status, OrderStatus::Pending | OrderStatus::Preparing))
            .collect())
    }

    /// All non-terminal orders (merchant panel).
    pub async fn active_orders(&self) -> Result<Vec<Order>, OrderError> {
        Ok(self
            .list()
            .await?
            .into_iter()
            .filter(|o| !o.status.is_terminal())
            .collect())
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        OrderError::ActorCommunicationError(e.to_string())
    }
}
