use rust_decimal::Decimal;

use super::{CustomerId, OrderId, Product};

/// Lifecycle of an order. Only `Composing -> Ordered` is driven by checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum OrderStatus {
    #[default]
    Composing,
    Ordered,
    Paid,
    Delivered,
    Canceled,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Composing => "composing",
            Self::Ordered => "ordered",
            Self::Paid => "paid",
            Self::Delivered => "delivered",
            Self::Canceled => "canceled",
        };
        f.write_str(name)
    }
}

/// Represents a customer order being composed or placed.
///
/// `shipping`, `discount_rate` and `total` are derived fields. They are only
/// written by the pricing engine, see [`crate::pricing`].
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub customer_id: CustomerId,
    pub cart: Vec<Product>,
    pub discount_code_applied: Option<String>,
    pub discount_rate: Decimal,
    pub shipping: Decimal,
    pub total: Decimal,
    pub status: OrderStatus,
}

/// Payload for creating a new order.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub customer_id: CustomerId,
    pub cart: Vec<Product>,
}
