//! Input records for the pricing engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::Percent;

/// One filament used by a print job.
///
/// This is the only material shape the engine accepts. Slicer parsing,
/// screenshot extraction and manual entry all normalize into it (see
/// [`crate::catalog::resolve_materials`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Material {
    /// Filament weight consumed, in grams.
    pub weight_grams: Decimal,
    /// Cost per kilogram, or `None` when the material is not mapped to a
    /// catalog entry yet. Unmapped materials contribute nothing to cost.
    #[serde(default)]
    pub cost_per_kg: Option<Decimal>,
}

impl Material {
    /// A material with a resolved cost.
    #[must_use]
    pub const fn new(weight_grams: Decimal, cost_per_kg: Decimal) -> Self {
        Self {
            weight_grams,
            cost_per_kg: Some(cost_per_kg),
        }
    }

    /// A material whose cost is not known yet.
    #[must_use]
    pub const fn unmapped(weight_grams: Decimal) -> Self {
        Self {
            weight_grams,
            cost_per_kg: None,
        }
    }

    /// Whether this material has a cost mapping.
    #[must_use]
    pub const fn is_mapped(&self) -> bool {
        self.cost_per_kg.is_some()
    }
}

/// An ad-hoc named cost charged once per job (finishing, service, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraCost {
    /// Free-form label shown next to the amount.
    #[serde(default)]
    pub label: String,
    /// Cost amount. Negative amounts count as zero.
    pub amount: Decimal,
}

impl ExtraCost {
    /// Create a labelled extra cost.
    #[must_use]
    pub fn new(label: impl Into<String>, amount: Decimal) -> Self {
        Self {
            label: label.into(),
            amount,
        }
    }
}

/// Everything needed to price one print job.
///
/// Built fresh from form state on every edit; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingInput {
    /// Filaments used by the whole job, in slicer order.
    pub materials: Vec<Material>,
    /// Print duration for the whole job.
    pub print_time_hours: Decimal,
    /// Energy cost of one printer hour (electricity rate x printer draw).
    pub energy_cost_per_hour: Decimal,
    /// Identical units produced by one job. Values below 1 count as 1.
    pub unit_quantity: u32,
    /// Packaging plus label, charged for every unit.
    pub fixed_costs_per_unit: Decimal,
    /// Costs charged once per job and split across units (shipping).
    pub shared_fixed_costs: Decimal,
    /// Ad-hoc job costs added to the production total.
    pub extra_costs: Vec<ExtraCost>,
    /// Sales channel fee, as a share of the sale price.
    pub marketplace_fee_percent: Percent,
    /// Early payout fee, as a share of the sale price.
    pub anticipation_fee_percent: Percent,
    /// Target net profit, as a share of the sale price.
    pub margin_percent: Percent,
    /// User override of the suggested price. Ignored unless positive.
    pub custom_sell_price: Option<Decimal>,
}

impl Default for PricingInput {
    fn default() -> Self {
        Self {
            materials: Vec::new(),
            print_time_hours: Decimal::ZERO,
            energy_cost_per_hour: Decimal::ZERO,
            unit_quantity: 1,
            fixed_costs_per_unit: Decimal::ZERO,
            shared_fixed_costs: Decimal::ZERO,
            extra_costs: Vec::new(),
            marketplace_fee_percent: Percent::ZERO,
            anticipation_fee_percent: Percent::ZERO,
            margin_percent: Percent::ZERO,
            custom_sell_price: None,
        }
    }
}

impl PricingInput {
    /// Combined marketplace and anticipation fee.
    #[must_use]
    pub fn total_fee_percent(&self) -> Percent {
        self.marketplace_fee_percent + self.anticipation_fee_percent
    }

    /// Unit quantity with the `>= 1` guard applied.
    #[must_use]
    pub fn effective_quantity(&self) -> u32 {
        self.unit_quantity.max(1)
    }

    /// Positions of materials that have no cost per kg.
    #[must_use]
    pub fn unmapped_positions(&self) -> Vec<usize> {
        self.materials
            .iter()
            .enumerate()
            .filter(|(_, m)| !m.is_mapped())
            .map(|(i, _)| i)
            .collect()
    }

    /// Whether any material is missing a cost mapping.
    #[must_use]
    pub fn has_unmapped_materials(&self) -> bool {
        !self.unmapped_positions().is_empty()
    }
}
