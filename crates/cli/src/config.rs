//! CLI configuration loaded from environment variables.
//!
//! Everything here is a default for new calculations; command-line flags
//! and job file fields take precedence.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `PRINTCOST_KWH_COST` - Electricity rate per kWh (profile setting)
//! - `PRINTCOST_LEGACY_KWH_COST` - Older per-user rate, used when the above is unset or zero
//! - `PRINTCOST_PRINTER_WATTS` - Printer draw in watts (default: 200)
//! - `PRINTCOST_MARGIN_PERCENT` - Target margin (default: 50)
//! - `PRINTCOST_MARKETPLACE_FEE_PERCENT` - Sales channel fee (default: 0)
//! - `PRINTCOST_ANTICIPATION_FEE_PERCENT` - Early payout fee (default: 0)
//! - `PRINTCOST_PACKAGING_COST` - Packaging cost per unit (default: 0)
//! - `PRINTCOST_LABEL_COST` - Label cost per unit (default: 0)
//! - `PRINTCOST_SHIPPING_COST` - Shipping cost per job (default: 0)
//!
//! With neither rate variable set, the rate falls back to 0.95/kWh.

use printcost_core::settings::resolve_kwh_cost;
use printcost_core::{CostSettings, Percent};
use rust_decimal::Decimal;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Load cost settings from the process environment.
///
/// Calls `dotenvy::dotenv()` to load from `.env` file if present.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set but is not a valid decimal.
pub fn from_env() -> Result<CostSettings, ConfigError> {
    // Load .env file if present (ignore errors if not found)
    let _ = dotenvy::dotenv();
    from_lookup(|key| std::env::var(key).ok())
}

/// Load cost settings through an arbitrary variable lookup.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set but is not a valid decimal.
pub fn from_lookup<F>(lookup: F) -> Result<CostSettings, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let defaults = CostSettings::default();

    let kwh_cost = resolve_kwh_cost(
        get_decimal(&lookup, "PRINTCOST_KWH_COST")?,
        get_decimal(&lookup, "PRINTCOST_LEGACY_KWH_COST")?,
    );

    Ok(CostSettings {
        kwh_cost,
        printer_watts: get_decimal(&lookup, "PRINTCOST_PRINTER_WATTS")?
            .unwrap_or(defaults.printer_watts),
        margin_percent: get_percent(&lookup, "PRINTCOST_MARGIN_PERCENT")?
            .unwrap_or(defaults.margin_percent),
        marketplace_fee_percent: get_percent(&lookup, "PRINTCOST_MARKETPLACE_FEE_PERCENT")?
            .unwrap_or(defaults.marketplace_fee_percent),
        anticipation_fee_percent: get_percent(&lookup, "PRINTCOST_ANTICIPATION_FEE_PERCENT")?
            .unwrap_or(defaults.anticipation_fee_percent),
        packaging_cost: get_decimal(&lookup, "PRINTCOST_PACKAGING_COST")?
            .unwrap_or(defaults.packaging_cost),
        label_cost: get_decimal(&lookup, "PRINTCOST_LABEL_COST")?.unwrap_or(defaults.label_cost),
        shipping_cost: get_decimal(&lookup, "PRINTCOST_SHIPPING_COST")?
            .unwrap_or(defaults.shipping_cost),
    })
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional decimal variable. Empty values count as unset.
fn get_decimal<F>(lookup: &F, key: &str) -> Result<Option<Decimal>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .replace(',', ".")
            .parse::<Decimal>()
            .map(Some)
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string())),
        _ => Ok(None),
    }
}

/// Get an optional percentage variable.
fn get_percent<F>(lookup: &F, key: &str) -> Result<Option<Percent>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    Ok(get_decimal(lookup, key)?.map(Percent::new))
}
