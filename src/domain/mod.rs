pub mod id;
pub mod customer;
pub mod product;
pub mod order;

pub use id::*;
pub use customer::*;
pub use product::*;
pub use order::*;
