use tracing::{debug, info, warn};

use crate::actor_framework::Entity;
use crate::domain::{Order, OrderCreate, OrderId, OrderStatus};
use crate::pricing;
use super::actions::{OrderAction, OrderActionResult};

impl Entity for Order {
    type Id = OrderId;
    type CreatePayload = OrderCreate;
    type Action = OrderAction;
    type ActionResult = OrderActionResult;

    fn id(&self) -> &OrderId { &self.id }

    /// Creates a priced order in the `Composing` state.
    ///
    /// # Arguments
    /// * `id` - Fresh id from the store's id generator
    /// * `payload` - Customer and cart; the cart is kept in the given order
    fn from_create(id: OrderId, payload: OrderCreate) -> Result<Self, String> {
        let order = pricing::compose_order(id, payload).map_err(|e| {
            warn!(%id, error = %e, "Order could not be priced");
            e.to_string()
        })?;
        info!(
            order_id = %order.id,
            items = order.cart.len(),
            shipping = %order.shipping,
            total = %order.total,
            "Order composed"
        );
        Ok(order)
    }

    /// Handles order-specific actions.
    ///
    /// # Actions
    /// - `ApplyDiscount`: stores the code, resolves its terms and reprices
    /// - `Place`: sets the status to `Ordered`
    fn handle_action(&mut self, action: OrderAction) -> Result<OrderActionResult, String> {
        match action {
            OrderAction::ApplyDiscount { raw_code, shipping_policy } => {
                let terms = pricing::apply_discount(self, raw_code, shipping_policy)
                    .map_err(|e| e.to_string())?;
                debug!(order_id = %self.id, ?terms, total = %self.total, "Discount applied");
                Ok(OrderActionResult::DiscountApplied {
                    discount_rate: self.discount_rate,
                    shipping: self.shipping,
                    total: self.total,
                })
            }
            OrderAction::Place { requested } => {
                debug!(order_id = %self.id, %requested, "Placing order");
                self.status = OrderStatus::Ordered;
                Ok(OrderActionResult::Placed(self.status))
            }
        }
    }
}
