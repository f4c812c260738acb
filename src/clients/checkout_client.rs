use tracing::{error, info, instrument, warn};
use crate::actor_framework::{FrameworkError, ResourceClient};
use crate::domain::{Order, OrderCreate, OrderId};
use crate::messages::{ApplyDiscount, CreateOrder, OrderQuery, PlaceOrder};
use crate::order_actor::{OrderAction, OrderActionResult, OrderError};
use crate::pricing::{DiscountCode, PricingPolicy, UnknownCodePolicy};

/// Client for the checkout flow.
///
/// Every command is forwarded to the order store actor as one message, so the
/// load-reprice-save cycle for an order never interleaves with another request.
#[derive(Clone)]
pub struct CheckoutClient {
    inner: ResourceClient<Order>,
    policy: PricingPolicy,
}

impl CheckoutClient {
    pub fn new(inner: ResourceClient<Order>, policy: PricingPolicy) -> Self {
        Self { inner, policy }
    }

    #[instrument(skip(self, command), fields(customer_id = %command.customer_id))]
    pub async fn create_order(&self, command: CreateOrder) -> Result<OrderId, OrderError> {
        info!(items = command.cart.len(), "Processing create_order request");
        let payload = OrderCreate {
            customer_id: command.customer_id,
            cart: command.cart,
        };
        self.inner.create(payload).await.map_err(|e| {
            error!(error = %e, "Order creation failed");
            match e {
                FrameworkError::Rejected(reason) => OrderError::Rejected(reason),
                other => OrderError::ActorCommunicationError(other.to_string()),
            }
        })
    }

    /// Applies a discount code to an existing order.
    ///
    /// An unknown order is reported as `NotFound` before the code itself is
    /// judged, so a rejected code always refers to a real order.
    #[instrument(skip(self, command), fields(order_id = %command.order_id))]
    pub async fn apply_discount(&self, command: ApplyDiscount) -> Result<(), OrderError> {
        let code = DiscountCode::parse(command.discount_code.as_deref());
        if code.is_unrecognized() {
            if let UnknownCodePolicy::Reject = self.policy.unknown_codes {
                self.get_order(OrderQuery { order_id: command.order_id }).await?;
                warn!(?code, "Rejecting unknown discount code");
                return Err(OrderError::UnknownDiscountCode(
                    command.discount_code.unwrap_or_default(),
                ));
            }
            warn!(?code, "Unknown discount code, no discount granted");
        }

        let action = OrderAction::ApplyDiscount {
            raw_code: command.discount_code,
            shipping_policy: self.policy.shipping,
        };
        match self.inner.perform_action(command.order_id, action).await {
            Ok(OrderActionResult::DiscountApplied { discount_rate, shipping, total }) => {
                info!(%discount_rate, %shipping, %total, "Discount applied");
                Ok(())
            }
            Ok(_) => Err(OrderError::ActorCommunicationError("Unexpected result".to_string())),
            Err(e) => Err(order_error(command.order_id, e)),
        }
    }

    #[instrument(skip(self, command), fields(order_id = %command.order_id, requested = %command.order_status))]
    pub async fn place_order(&self, command: PlaceOrder) -> Result<(), OrderError> {
        let action = OrderAction::Place { requested: command.order_status };
        match self.inner.perform_action(command.order_id, action).await {
            Ok(OrderActionResult::Placed(status)) => {
                info!(%status, "Order placed");
                Ok(())
            }
            Ok(_) => Err(OrderError::ActorCommunicationError("Unexpected result".to_string())),
            Err(e) => Err(order_error(command.order_id, e)),
        }
    }

    #[instrument(skip(self, query), fields(order_id = %query.order_id))]
    pub async fn get_order(&self, query: OrderQuery) -> Result<Order, OrderError> {
        match self.inner.get(query.order_id).await {
            Ok(Some(order)) => Ok(order),
            Ok(None) => {
                warn!("Order not found");
                Err(OrderError::NotFound(query.order_id))
            }
            Err(e) => Err(order_error(query.order_id, e)),
        }
    }
}

fn order_error(order_id: OrderId, error: FrameworkError) -> OrderError {
    match error {
        FrameworkError::NotFound(_) => OrderError::NotFound(order_id),
        FrameworkError::Rejected(reason) => OrderError::Rejected(reason),
        other => OrderError::ActorCommunicationError(other.to_string()),
    }
}
