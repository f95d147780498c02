//! Store configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `FRESHCART_CHANNEL_CAPACITY` - Request queue size of each actor (default: 32)
//! - `FRESHCART_FREE_DELIVERY_ABOVE` - Delivery is free strictly above this
//!   subtotal, in paise (default: 50000, i.e. ₹500)
//! - `FRESHCART_DELIVERY_FEE` - Flat delivery fee in paise (default: 4000)
//! - `FRESHCART_TAX_RATE_BPS` - Tax rate in basis points (default: 500, i.e. 5%)

use crate::model::{Money, PricingPolicy};
use std::str::FromStr;
use thiserror::Error;

const DEFAULT_CHANNEL_CAPACITY: usize = 32;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Runtime configuration for a [`StoreSystem`](crate::lifecycle::StoreSystem).
#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    /// Capacity of each actor's request channel. Always at least 1.
    pub channel_capacity: usize,
    /// Delivery and tax rules used by carts and orders.
    pub pricing: PricingPolicy,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
            pricing: PricingPolicy::default(),
        }
    }
}

impl StoreConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed or is
    /// out of range.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) over an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let channel_capacity = parse_or(
            &lookup,
            "FRESHCART_CHANNEL_CAPACITY",
            defaults.channel_capacity,
        )?;
        if channel_capacity == 0 {
            return Err(invalid("FRESHCART_CHANNEL_CAPACITY", "must be at least 1"));
        }

        let free_delivery_above = parse_or(
            &lookup,
            "FRESHCART_FREE_DELIVERY_ABOVE",
            defaults.pricing.free_delivery_above.minor_units(),
        )?;
        let delivery_fee = parse_or(
            &lookup,
            "FRESHCART_DELIVERY_FEE",
            defaults.pricing.delivery_fee.minor_units(),
        )?;
        let tax_rate_bps = parse_or(
            &lookup,
            "FRESHCART_TAX_RATE_BPS",
            defaults.pricing.tax_rate_bps,
        )?;
        if tax_rate_bps > 10_000 {
            return Err(invalid("FRESHCART_TAX_RATE_BPS", "must not exceed 10000"));
        }

        Ok(Self {
            channel_capacity,
            pricing: PricingPolicy {
                free_delivery_above: Money::from_minor(free_delivery_above),
                delivery_fee: Money::from_minor(delivery_fee),
                tax_rate_bps,
            },
        })
    }
}

/// Parse a variable, falling back to `default` when it is unset.
fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse::<T>().map_err(|e| invalid(key, e)),
        None => Ok(default),
    }
}

fn invalid(key: &str, reason: impl std::fmt::Display) -> ConfigError {
    ConfigError::InvalidEnvVar(key.to_string(), reason.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<StoreConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        StoreConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(load(&[]).unwrap(), StoreConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("FRESHCART_CHANNEL_CAPACITY", "8"),
            ("FRESHCART_FREE_DELIVERY_ABOVE", "99900"),
            ("FRESHCART_DELIVERY_FEE", " 2500 "),
            ("FRESHCART_TAX_RATE_BPS", "1800"),
        ])
        .unwrap();

        assert_eq!(config.channel_capacity, 8);
        assert_eq!(config.pricing.free_delivery_above, Money::from_major(999));
        assert_eq!(config.pricing.delivery_fee, Money::from_major(25));
        assert_eq!(config.pricing.tax_rate_bps, 1800);
    }

    #[test]
    fn test_unparsable_value() {
        let err = load(&[("FRESHCART_DELIVERY_FEE", "forty")]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidEnvVar(key, _) if key == "FRESHCART_DELIVERY_FEE"
        ));
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let err = load(&[("FRESHCART_CHANNEL_CAPACITY", "0")]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidEnvVar(
                "FRESHCART_CHANNEL_CAPACITY".to_string(),
                "must be at least 1".to_string()
            )
        );
    }

    #[test]
    fn test_tax_rate_out_of_range() {
        assert!(load(&[("FRESHCART_TAX_RATE_BPS", "10001")]).is_err());
    }
}
