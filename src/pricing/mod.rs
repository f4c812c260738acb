//! Order pricing: shipping, discount codes and totals.
//!
//! Everything here is a pure function of the cart and the current discount
//! code. Totals are always recomputed from scratch so repeated or replaced
//! codes never leave residue on the order.

mod discount;
mod shipping;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::domain::{Order, OrderCreate, OrderId, OrderStatus, Product};

pub use discount::*;
pub use shipping::*;

/// The two configurable pricing decisions, see [`ShippingPolicy`] and
/// [`UnknownCodePolicy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PricingPolicy {
    pub shipping: ShippingPolicy,
    pub unknown_codes: UnknownCodePolicy,
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum PricingError {
    #[error("Order amount overflows the decimal range")]
    Overflow,
}

/// Sum of cart prices.
pub fn subtotal(cart: &[Product]) -> Result<Decimal, PricingError> {
    cart.iter().try_fold(Decimal::ZERO, |sum, product| {
        sum.checked_add(product.price).ok_or(PricingError::Overflow)
    })
}

/// `subtotal * (1 - discount_rate) + shipping`.
pub fn recompute_total(order: &Order) -> Result<Decimal, PricingError> {
    total_of(subtotal(&order.cart)?, order.discount_rate, order.shipping)
}

fn total_of(subtotal: Decimal, discount_rate: Decimal, shipping: Decimal) -> Result<Decimal, PricingError> {
    Decimal::ONE
        .checked_sub(discount_rate)
        .and_then(|keep| subtotal.checked_mul(keep))
        .and_then(|discounted| discounted.checked_add(shipping))
        .ok_or(PricingError::Overflow)
}

/// Builds a fresh, fully priced order in the `Composing` state.
pub fn compose_order(id: OrderId, create: OrderCreate) -> Result<Order, PricingError> {
    let shipping = base_shipping(subtotal(&create.cart)?);
    let mut order = Order {
        id,
        customer_id: create.customer_id,
        cart: create.cart,
        discount_code_applied: None,
        discount_rate: Decimal::ZERO,
        shipping,
        total: Decimal::ZERO,
        status: OrderStatus::Composing,
    };
    order.total = recompute_total(&order)?;
    Ok(order)
}

/// Replaces whatever discount the order had with `code` and reprices it.
///
/// On error the order is left as it was.
pub fn apply_discount(order: &mut Order, code: Option<String>, policy: ShippingPolicy) -> Result<DiscountTerms, PricingError> {
    let terms = resolve_discount(code.as_deref());
    let subtotal = subtotal(&order.cart)?;
    let shipping = match (terms.shipping_override, policy) {
        (Some(shipping), _) => shipping,
        (None, ShippingPolicy::KeepCurrent) => order.shipping,
        (None, ShippingPolicy::RecomputeFromBase) => base_shipping(subtotal),
    };
    let total = total_of(subtotal, terms.rate, shipping)?;

    order.discount_code_applied = code;
    order.discount_rate = terms.rate;
    order.shipping = shipping;
    order.total = total;
    Ok(terms)
}
