//! Checkout configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional, a `.env` file is read if present.
//! - `CHECKOUT_MAILBOX_CAPACITY` - Order store mailbox size (default: 32)
//! - `CHECKOUT_SHIPPING_POLICY` - `keep-current` (default) or `recompute-from-base`
//! - `CHECKOUT_UNKNOWN_CODES` - `ignore` (default) or `reject`
//! - `RUST_LOG` - Log filter, read by [`super::setup_tracing`]

use thiserror::Error;
use crate::pricing::{PricingPolicy, ShippingPolicy, UnknownCodePolicy};

pub const MAILBOX_CAPACITY_VAR: &str = "CHECKOUT_MAILBOX_CAPACITY";
pub const SHIPPING_POLICY_VAR: &str = "CHECKOUT_SHIPPING_POLICY";
pub const UNKNOWN_CODES_VAR: &str = "CHECKOUT_UNKNOWN_CODES";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },
}

/// Runtime settings for the checkout system.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutConfig {
    /// Bounded mailbox size of the order store actor.
    pub mailbox_capacity: usize,
    pub pricing: PricingPolicy,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            mailbox_capacity: 32,
            pricing: PricingPolicy::default(),
        }
    }
}

impl CheckoutConfig {
    /// Reads overrides from the process environment. Unset variables keep
    /// their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(MAILBOX_CAPACITY_VAR) {
            let capacity = value.trim().parse::<usize>().ok().filter(|capacity| *capacity > 0);
            config.mailbox_capacity = capacity.ok_or_else(|| invalid(MAILBOX_CAPACITY_VAR, value))?;
        }

        if let Some(value) = lookup(SHIPPING_POLICY_VAR) {
            let policy = match value.trim() {
                "keep-current" => Some(ShippingPolicy::KeepCurrent),
                "recompute-from-base" => Some(ShippingPolicy::RecomputeFromBase),
                _ => None,
            };
            config.pricing.shipping = policy.ok_or_else(|| invalid(SHIPPING_POLICY_VAR, value))?;
        }

        if let Some(value) = lookup(UNKNOWN_CODES_VAR) {
            let policy = match value.trim() {
                "ignore" => Some(UnknownCodePolicy::Ignore),
                "reject" => Some(UnknownCodePolicy::Reject),
                _ => None,
            };
            config.pricing.unknown_codes = policy.ok_or_else(|| invalid(UNKNOWN_CODES_VAR, value))?;
        }

        Ok(config)
    }
}

fn invalid(var: &'static str, value: String) -> ConfigError {
    ConfigError::InvalidValue { var, value }
}
