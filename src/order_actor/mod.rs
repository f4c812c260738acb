//! Order-specific domain logic: pricing on create, discount and placement actions.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;
