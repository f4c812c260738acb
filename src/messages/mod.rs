//! Command and query shapes accepted by checkout.

use crate::domain::{CustomerId, OrderId, OrderStatus, Product};

#[derive(Debug, Clone)]
pub struct CreateOrder {
    pub customer_id: CustomerId,
    pub cart: Vec<Product>,
}

#[derive(Debug, Clone)]
pub struct ApplyDiscount {
    pub order_id: OrderId,
    pub discount_code: Option<String>,
}

#[derive(Debug, Clone)]
pub struct PlaceOrder {
    pub order_id: OrderId,
    pub order_status: OrderStatus,
}

#[derive(Debug, Clone, Copy)]
pub struct OrderQuery {
    pub order_id: OrderId,
}
