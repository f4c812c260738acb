use super::CustomerId;

/// A customer placing orders. Catalog data only.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    #[allow(dead_code)]
    pub address: String,
}

impl Customer {
    pub fn new(id: u64, name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            id: CustomerId::new(id),
            name: name.into(),
            address: address.into(),
        }
    }
}
