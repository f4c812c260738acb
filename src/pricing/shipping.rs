use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const FREE_SHIPPING_THRESHOLD: Decimal = dec!(50.00);
const FLAT_RATE_SHIPPING: Decimal = dec!(10.00);

/// What happens to shipping when the applied code carries no override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShippingPolicy {
    /// Leave the order's current shipping as it is, including any override
    /// left behind by a previously applied code.
    #[default]
    KeepCurrent,
    /// Fall back to [`base_shipping`] for the cart subtotal.
    RecomputeFromBase,
}

/// Shipping for a cart before any discount: free strictly above 50.00,
/// flat 10.00 otherwise.
pub fn base_shipping(subtotal: Decimal) -> Decimal {
    if subtotal > FREE_SHIPPING_THRESHOLD {
        Decimal::ZERO
    } else {
        FLAT_RATE_SHIPPING
    }
}
