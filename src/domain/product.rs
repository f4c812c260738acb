use rust_decimal::Decimal;

use super::ProductId;

/// Represents a product as it was priced when it went into a cart.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    #[allow(dead_code)]
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
}

impl Product {
    pub fn new(id: u64, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.into(),
            price,
        }
    }
}
