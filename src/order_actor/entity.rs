//! Entity trait implementation for the Order domain type.

use async_trait::async_trait;

use crate::framework::ActorEntity;
use crate::model::{Order, OrderCreate};
use crate::order_actor::{OrderAction, OrderActionResult};

#[async_trait]
impl ActorEntity for Order {
    type Id = String;
    type CreateParams = OrderCreate;
    type Action = OrderAction;
    type ActionResult = OrderActionResult;
    type Context = ();

    /// Snapshots the cart lines into a pending order. An empty snapshot is
    /// rejected here as well, so no ticket is ever consumed for it.
    fn from_create_params(id: Self::Id, params: Self::CreateParams) -> Result<Self, String> {
        if params.lines.is_empty() {
            return Err("order has no lines".to_string());
        }
        Ok(Order::new(id, &params.customer_name, params.lines))
    }

    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, String> {
        match action {
            OrderAction::Advance(target) => {
                if !self.status.can_advance_to(target) {
                    return Err(format!(
                        "no transition from {:?} to {:?}",
                        self.status, target
                    ));
                }
                self.status = target;
                Ok(OrderActionResult::Advanced(target))
            }
        }
    }
}
