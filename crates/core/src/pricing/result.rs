//! Output records produced by the pricing engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{PriceSource, SuggestionMethod};

/// A suggested sale price and how it was derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestedPrice {
    /// The suggested price, never negative.
    pub price: Decimal,
    /// Whether the fee/margin divisor or the markup fallback was used.
    pub method: SuggestionMethod,
}

/// Profit actually realized at a given sale price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RealizedMargin {
    /// Fees withheld from the sale price.
    pub fees_amount: Decimal,
    /// Price minus cost minus fees. Negative means the price loses money.
    pub net_profit: Decimal,
    /// Net profit as a percentage of the price; 0 when the price is 0.
    pub realized_margin_percent: Decimal,
}

/// Full cost breakdown for one [`PricingInput`](super::PricingInput).
///
/// Plain numbers only, so the persistence layer can store the fields as-is
/// when the user saves the product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingResult {
    /// Filament cost for the whole job.
    pub material_cost: Decimal,
    /// Energy cost for the whole job.
    pub energy_cost: Decimal,
    /// Sum of the ad-hoc extra costs.
    pub extra_costs_total: Decimal,
    /// Total production cost of the job, before splitting across units.
    pub production_cost_total: Decimal,
    /// Production cost of one unit.
    pub unit_cost: Decimal,
    /// Unit cost plus this unit's share of the shared fixed costs.
    pub unit_cost_with_shared: Decimal,
    /// Price suggested by the fee/margin formula.
    pub suggested_price: Decimal,
    /// How [`Self::suggested_price`] was derived.
    pub suggestion: SuggestionMethod,
    /// Lowest advisable price (a small markup over unit cost).
    pub minimum_price: Decimal,
    /// Price used for the profit figures below.
    pub final_price: Decimal,
    /// Whether [`Self::final_price`] is the suggestion or a user override.
    pub price_source: PriceSource,
    /// Fees withheld from the final price.
    pub fees_amount: Decimal,
    /// Final price minus unit cost (with shared) minus fees.
    pub net_profit: Decimal,
    /// Net profit as a percentage of the final price.
    pub realized_margin_percent: Decimal,
}

impl PricingResult {
    /// Whether the final price loses money once fees are withheld.
    #[must_use]
    pub fn is_loss(&self) -> bool {
        self.net_profit < Decimal::ZERO
    }

    /// Net profit for the whole job (all units).
    #[must_use]
    pub fn job_net_profit(&self, unit_quantity: u32) -> Decimal {
        self.net_profit.saturating_mul(Decimal::from(unit_quantity.max(1)))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::pricing::{Material, PricingInput, compute_cost_breakdown};

    #[test]
    fn test_job_net_profit_scales_by_quantity() {
        let input = PricingInput {
            materials: vec![Material::new(Decimal::ONE_THOUSAND, Decimal::TEN)],
            unit_quantity: 4,
            custom_sell_price: Some(Decimal::TEN),
            ..PricingInput::default()
        };
        let result = compute_cost_breakdown(&input);

        // 10 per kg over 4 units costs 2.5 each
        assert_eq!(result.net_profit, Decimal::new(75, 1));
        assert_eq!(result.job_net_profit(input.unit_quantity), Decimal::new(30, 0));
        assert_eq!(result.job_net_profit(0), result.net_profit);
    }

    #[test]
    fn test_job_net_profit_saturates() {
        let result = PricingResult {
            net_profit: Decimal::MAX,
            ..compute_cost_breakdown(&PricingInput::default())
        };
        assert_eq!(result.job_net_profit(3), Decimal::MAX);
    }
}
