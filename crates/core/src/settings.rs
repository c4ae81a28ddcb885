//! Per-user cost defaults.
//!
//! The pricing engine never reads settings itself. Callers resolve a
//! [`CostSettings`] (from a profile, environment, or hard defaults) and copy
//! the values they need into a [`PricingInput`](crate::PricingInput).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::energy::energy_cost_per_hour;
use crate::types::Percent;

/// Electricity rate used when the user has not configured one.
pub const DEFAULT_KWH_COST: Decimal = Decimal::from_parts(95, 0, 0, false, 2);

/// Printer draw assumed when no printer is selected.
pub const DEFAULT_PRINTER_WATTS: Decimal = Decimal::from_parts(200, 0, 0, false, 0);

/// Energy cost per hour used when the printer draw or the rate is zero.
pub const DEFAULT_ENERGY_COST_PER_HOUR: Decimal = Decimal::from_parts(200, 0, 0, false, 2);

/// Default target margin, as a percentage of the sale price.
pub const DEFAULT_MARGIN_PERCENT: Decimal = Decimal::from_parts(50, 0, 0, false, 0);

/// Pick the electricity rate from the profile, then the legacy settings
/// record, then [`DEFAULT_KWH_COST`]. Zero or negative values are skipped.
///
/// ```
/// use printcost_core::settings::{DEFAULT_KWH_COST, resolve_kwh_cost};
/// use rust_decimal::Decimal;
///
/// let legacy = Some(Decimal::new(82, 2));
/// assert_eq!(resolve_kwh_cost(Some(Decimal::ZERO), legacy), Decimal::new(82, 2));
/// assert_eq!(resolve_kwh_cost(None, None), DEFAULT_KWH_COST);
/// ```
#[must_use]
pub fn resolve_kwh_cost(profile: Option<Decimal>, legacy: Option<Decimal>) -> Decimal {
    [profile, legacy]
        .into_iter()
        .flatten()
        .find(|rate| *rate > Decimal::ZERO)
        .unwrap_or(DEFAULT_KWH_COST)
}

/// Cost defaults applied to new pricing jobs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostSettings {
    /// Electricity rate per kWh.
    pub kwh_cost: Decimal,
    /// Printer draw in watts.
    pub printer_watts: Decimal,
    /// Target margin.
    pub margin_percent: Percent,
    /// Sales channel fee.
    pub marketplace_fee_percent: Percent,
    /// Early payout fee.
    pub anticipation_fee_percent: Percent,
    /// Packaging cost per unit.
    pub packaging_cost: Decimal,
    /// Label cost per unit.
    pub label_cost: Decimal,
    /// Shipping cost per job.
    pub shipping_cost: Decimal,
}

impl Default for CostSettings {
    fn default() -> Self {
        Self {
            kwh_cost: DEFAULT_KWH_COST,
            printer_watts: DEFAULT_PRINTER_WATTS,
            margin_percent: Percent::new(DEFAULT_MARGIN_PERCENT),
            marketplace_fee_percent: Percent::ZERO,
            anticipation_fee_percent: Percent::ZERO,
            packaging_cost: Decimal::ZERO,
            label_cost: Decimal::ZERO,
            shipping_cost: Decimal::ZERO,
        }
    }
}

impl CostSettings {
    /// Energy cost of one printer hour under these settings.
    ///
    /// Falls back to [`DEFAULT_ENERGY_COST_PER_HOUR`] when the product is
    /// zero, i.e. no printer draw or no rate is configured.
    #[must_use]
    pub fn energy_cost_per_hour(&self) -> Decimal {
        let cost = energy_cost_per_hour(self.printer_watts, self.kwh_cost);
        if cost > Decimal::ZERO {
            cost
        } else {
            DEFAULT_ENERGY_COST_PER_HOUR
        }
    }

    /// Energy cost per hour with optional per-job overrides.
    ///
    /// An explicit rate wins. Otherwise a watts or kWh override is combined
    /// with the settings value for the other half. With no overrides this is
    /// [`Self::energy_cost_per_hour`].
    #[must_use]
    pub fn energy_cost_per_hour_with(
        &self,
        rate: Option<Decimal>,
        watts: Option<Decimal>,
        kwh_cost: Option<Decimal>,
    ) -> Decimal {
        match (rate, watts, kwh_cost) {
            (Some(rate), _, _) => rate,
            (None, None, None) => self.energy_cost_per_hour(),
            (None, watts, kwh_cost) => energy_cost_per_hour(
                watts.unwrap_or(self.printer_watts),
                kwh_cost.unwrap_or(self.kwh_cost),
            ),
        }
    }

    /// Packaging plus label, charged per unit.
    #[must_use]
    pub fn fixed_costs_per_unit(&self) -> Decimal {
        self.packaging_cost.max(Decimal::ZERO) + self.label_cost.max(Decimal::ZERO)
    }
}
