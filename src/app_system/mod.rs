//! System orchestration, configuration, startup, and shutdown logic.

pub mod checkout_system;
pub mod config;
pub mod tracing;

pub use self::checkout_system::*;
pub use self::config::*;
pub use self::tracing::*;
