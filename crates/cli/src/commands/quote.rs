//! Quick price quote from command-line flags.
//!
//! # Usage
//!
//! ```bash
//! # 120 g of PLA at 90/kg, 4.5 h print, 16.5% + 3.5% fees, 50% margin
//! printcost quote -m 120:90 --hours 4.5 --energy-per-hour 0.15 \
//!     --marketplace-fee 16.5 --anticipation-fee 3.5 --margin 50
//!
//! # Two materials, a batch of 4 and an extra cost
//! printcost quote -m 300:100 -m 80:120 --hours 6 -q 4 --extra sanding=8
//! ```
//!
//! Flags that are not given fall back to the cost settings from the
//! environment (see [`crate::config`]).

use std::str::FromStr;

use clap::Args;
use printcost_core::{
    CostSettings, ExtraCost, Material, Percent, PricingInput, PrintJobExtract,
    compute_cost_breakdown,
};
use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::{CommandError, Output, emit};
use crate::report;

/// A material given as `WEIGHT_GRAMS[:COST_PER_KG]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterialSpec(pub Material);

impl FromStr for MaterialSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (weight, cost) = match s.split_once(':') {
            Some((weight, cost)) => (weight, Some(cost)),
            None => (s, None),
        };

        let weight = parse_decimal(weight)
            .map_err(|e| format!("invalid material weight '{weight}': {e}"))?;

        match cost.map(str::trim).filter(|c| !c.is_empty()) {
            Some(cost) => {
                let cost = parse_decimal(cost)
                    .map_err(|e| format!("invalid material cost '{cost}': {e}"))?;
                Ok(Self(Material::new(weight, cost)))
            }
            None => Ok(Self(Material::unmapped(weight))),
        }
    }
}

/// An extra job cost given as `LABEL=AMOUNT`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtraSpec(pub ExtraCost);

impl FromStr for ExtraSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (label, amount) = s
            .split_once('=')
            .ok_or_else(|| format!("expected LABEL=AMOUNT, got '{s}'"))?;
        let amount =
            parse_decimal(amount).map_err(|e| format!("invalid amount '{amount}': {e}"))?;
        Ok(Self(ExtraCost::new(label.trim(), amount)))
    }
}

/// Accepts both `.` and `,` as the decimal separator.
fn parse_decimal(raw: &str) -> Result<Decimal, rust_decimal::Error> {
    raw.trim().replace(',', ".").parse()
}

/// Arguments for `printcost quote`.
#[derive(Debug, Clone, Default, Args)]
pub struct QuoteArgs {
    /// Product name shown in the report
    #[arg(long)]
    pub name: Option<String>,

    /// Material as WEIGHT_GRAMS[:COST_PER_KG] (repeatable; no cost = unmapped)
    #[arg(short, long = "material", value_name = "WEIGHT[:COST]")]
    pub materials: Vec<MaterialSpec>,

    /// Print time in hours
    #[arg(long, conflicts_with = "minutes")]
    pub hours: Option<Decimal>,

    /// Print time in minutes
    #[arg(long)]
    pub minutes: Option<Decimal>,

    /// Energy cost per print hour (overrides --watts and --kwh-cost)
    #[arg(long)]
    pub energy_per_hour: Option<Decimal>,

    /// Printer draw in watts
    #[arg(long)]
    pub watts: Option<Decimal>,

    /// Electricity rate per kWh
    #[arg(long)]
    pub kwh_cost: Option<Decimal>,

    /// Units produced by the job
    #[arg(short, long)]
    pub quantity: Option<u32>,

    /// Fixed cost per unit (overrides packaging and label settings)
    #[arg(long)]
    pub fixed_per_unit: Option<Decimal>,

    /// Costs shared across the job, e.g. shipping
    #[arg(long)]
    pub shared: Option<Decimal>,

    /// Extra job cost as LABEL=AMOUNT (repeatable)
    #[arg(long = "extra", value_name = "LABEL=AMOUNT")]
    pub extras: Vec<ExtraSpec>,

    /// Marketplace fee percent
    #[arg(long)]
    pub marketplace_fee: Option<Decimal>,

    /// Anticipation (early payout) fee percent
    #[arg(long)]
    pub anticipation_fee: Option<Decimal>,

    /// Target margin percent
    #[arg(long)]
    pub margin: Option<Decimal>,

    /// Sell at this price instead of the suggested one
    #[arg(long)]
    pub price: Option<Decimal>,

    /// Print JSON instead of a text report
    #[arg(long)]
    pub json: bool,
}

impl QuoteArgs {
    /// Build engine input from flags, falling back to `settings`.
    #[must_use]
    pub fn to_input(&self, settings: &CostSettings) -> PricingInput {
        let print_time_hours = self
            .hours
            .or_else(|| self.minutes.map(PrintJobExtract::hours_from_minutes))
            .unwrap_or(Decimal::ZERO);

        let energy_per_hour =
            settings.energy_cost_per_hour_with(self.energy_per_hour, self.watts, self.kwh_cost);

        PricingInput {
            materials: self.materials.iter().map(|m| m.0.clone()).collect(),
            print_time_hours,
            energy_cost_per_hour: energy_per_hour,
            unit_quantity: self.quantity.unwrap_or(1).max(1),
            fixed_costs_per_unit: self
                .fixed_per_unit
                .unwrap_or_else(|| settings.fixed_costs_per_unit()),
            shared_fixed_costs: self.shared.unwrap_or(settings.shipping_cost),
            extra_costs: self.extras.iter().map(|e| e.0.clone()).collect(),
            marketplace_fee_percent: self
                .marketplace_fee
                .map_or(settings.marketplace_fee_percent, Percent::new),
            anticipation_fee_percent: self
                .anticipation_fee
                .map_or(settings.anticipation_fee_percent, Percent::new),
            margin_percent: self.margin.map_or(settings.margin_percent, Percent::new),
            custom_sell_price: self.price,
        }
    }
}

/// Compute and print a quote.
///
/// # Errors
///
/// Returns an error if JSON output fails.
pub fn run(args: &QuoteArgs, settings: &CostSettings) -> Result<(), CommandError> {
    let input = args.to_input(settings);

    let unmapped = input.unmapped_positions();
    if !unmapped.is_empty() {
        warn!(
            positions = ?unmapped,
            "Materials without a cost per kg count as zero"
        );
    }

    let result = compute_cost_breakdown(&input);
    debug!(
        unit_cost = %result.unit_cost_with_shared,
        suggested = %result.suggested_price,
        "Quote computed"
    );

    let text = report::breakdown(args.name.as_deref(), &input, &result);
    let document = report::Quote {
        name: args.name.as_deref(),
        input: &input,
        result: &result,
        unmapped: &unmapped,
    };
    emit(Output::from_flag(args.json), &text, &document)
}
