//! Client handles for talking to the store actor.

mod checkout_client;

pub use checkout_client::*;
