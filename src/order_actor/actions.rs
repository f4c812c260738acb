use rust_decimal::Decimal;

use crate::domain::OrderStatus;
use crate::pricing::ShippingPolicy;

/// Custom actions for Order entities.
#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Replaces the applied discount code and reprices the order.
    ApplyDiscount {
        /// The code as entered; `None` clears the discount.
        raw_code: Option<String>,
        shipping_policy: ShippingPolicy,
    },
    /// Moves the order to `Ordered`. The requested status is carried for
    /// tracing only.
    Place { requested: OrderStatus },
}

/// Results from OrderActions - variants match 1:1 with OrderAction
#[derive(Debug, Clone, PartialEq)]
pub enum OrderActionResult {
    DiscountApplied {
        discount_rate: Decimal,
        shipping: Decimal,
        total: Decimal,
    },
    Placed(OrderStatus),
}
