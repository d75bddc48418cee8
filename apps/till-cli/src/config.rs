//! # Configuration
//!
//! Settings loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`TILL_*`)
//! 2. Defaults (this file)
//!
//! Read-only after startup, so it is passed around by reference.

use till_core::Money;

use crate::error::CliError;

/// Overrides the currency symbol used when printing amounts.
pub const ENV_CURRENCY_SYMBOL: &str = "TILL_CURRENCY_SYMBOL";

/// Overrides the purchase amount a new session starts with.
pub const ENV_DEFAULT_PRICE: &str = "TILL_DEFAULT_PRICE";

/// Application configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Purchase amount a session starts with
    pub default_price: Money,
}

impl Default for CliConfig {
    /// ## Default Values
    /// - Currency symbol: `$`
    /// - Default price: $100.00
    fn default() -> Self {
        CliConfig {
            currency_symbol: "$".to_string(),
            default_price: Money::from_cents(10_000),
        }
    }
}

impl CliConfig {
    /// Builds the configuration from process environment variables.
    pub fn from_env() -> Result<Self, CliError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup.
    ///
    /// Unlike the currency symbol, a malformed default price is an error
    /// rather than a silent fallback.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CliError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = CliConfig::default();

        if let Some(symbol) = lookup(ENV_CURRENCY_SYMBOL) {
            if !symbol.trim().is_empty() {
                config.currency_symbol = symbol.trim().to_string();
            }
        }

        if let Some(raw) = lookup(ENV_DEFAULT_PRICE) {
            let price: Money = raw
                .parse()
                .map_err(|e| CliError::config(format!("{}: {}", ENV_DEFAULT_PRICE, e)))?;
            if price.is_negative() {
                return Err(CliError::config(format!(
                    "{} must not be negative",
                    ENV_DEFAULT_PRICE
                )));
            }
            config.default_price = price;
        }

        Ok(config)
    }

    /// Formats an amount as a currency string.
    ///
    /// ## Example
    /// ```rust
    /// use till_cli::config::CliConfig;
    /// use till_core::Money;
    ///
    /// let config = CliConfig::default();
    /// assert_eq!(config.format_currency(Money::from_cents(1234)), "$12.34");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        format!(
            "{}{}{}",
            if amount.is_negative() { "-" } else { "" },
            self.currency_symbol,
            amount.to_decimal().abs()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_format_currency() {
        let config = CliConfig::default();
        assert_eq!(config.format_currency(Money::from_cents(1234)), "$12.34");
        assert_eq!(config.format_currency(Money::from_cents(5)), "$0.05");
        assert_eq!(config.format_currency(Money::zero()), "$0.00");
        assert_eq!(config.format_currency(Money::from_cents(-250)), "-$2.50");
        assert_eq!(config.format_currency(Money::from_cents(123_456_789)), "$1234567.89");
    }

    #[test]
    fn test_defaults_without_env() {
        let config = CliConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.default_price, Money::from_cents(10_000));
    }

    #[test]
    fn test_env_overrides() {
        let config = CliConfig::from_lookup(lookup(&[
            (ENV_CURRENCY_SYMBOL, "A$"),
            (ENV_DEFAULT_PRICE, "19.95"),
        ]))
        .unwrap();
        assert_eq!(config.default_price, Money::from_cents(1995));
        assert_eq!(config.format_currency(Money::from_cents(250)), "A$2.50");
    }

    #[test]
    fn test_bad_default_price() {
        let err = CliConfig::from_lookup(lookup(&[(ENV_DEFAULT_PRICE, "lots")])).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));

        let err = CliConfig::from_lookup(lookup(&[(ENV_DEFAULT_PRICE, "-1")])).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }
}
