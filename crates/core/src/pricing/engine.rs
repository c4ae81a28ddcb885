//! Pricing operations.
//!
//! Fees and margin are quoted as a share of the *sale price*, not of cost.
//! Solving `price - price * fee - price * margin = cost` for `price` gives
//! `price = cost / (1 - fee - margin)`, which is the core of
//! [`compute_suggested_price`].

use rust_decimal::Decimal;

use super::input::{ExtraCost, Material, PricingInput};
use super::result::{PricingResult, RealizedMargin, SuggestedPrice};
use crate::types::{Percent, PriceSource, SuggestionMethod};

const GRAMS_PER_KG: Decimal = Decimal::ONE_THOUSAND;

/// Markup over unit cost used for [`PricingResult::minimum_price`].
pub const MINIMUM_PRICE_MARKUP_PERCENT: Decimal = Decimal::TEN;

fn non_negative(value: Decimal) -> Decimal {
    value.max(Decimal::ZERO)
}

/// Sum that stops at `Decimal::MAX` instead of overflowing.
pub(crate) fn saturating_sum(values: impl Iterator<Item = Decimal>) -> Decimal {
    values.fold(Decimal::ZERO, Decimal::saturating_add)
}

/// Filament cost: the sum of `(grams / 1000) * cost_per_kg`.
///
/// Unmapped materials contribute nothing; flagging them is the caller's job.
/// Negative weights and rates count as zero.
#[must_use]
pub fn compute_material_cost(materials: &[Material]) -> Decimal {
    saturating_sum(materials.iter().filter_map(|m| {
        m.cost_per_kg.map(|cost| {
            (non_negative(m.weight_grams) / GRAMS_PER_KG).saturating_mul(non_negative(cost))
        })
    }))
}

/// Energy cost: `max(0, hours) * max(0, cost_per_hour)`.
#[must_use]
pub fn compute_energy_cost(print_time_hours: Decimal, energy_cost_per_hour: Decimal) -> Decimal {
    non_negative(print_time_hours).saturating_mul(non_negative(energy_cost_per_hour))
}

/// Total production cost of a job before splitting it across units.
///
/// `material + energy + sum(extras) + fixed_per_unit * quantity`. Per-unit
/// costs (packaging, label) are scaled up by the quantity; everything else is
/// already a whole-job amount.
#[must_use]
pub fn compute_production_total(
    material_cost: Decimal,
    energy_cost: Decimal,
    extra_costs: &[ExtraCost],
    fixed_costs_per_unit: Decimal,
    unit_quantity: u32,
) -> Decimal {
    let quantity = Decimal::from(unit_quantity.max(1));
    let fixed = non_negative(fixed_costs_per_unit).saturating_mul(quantity);
    saturating_sum(
        [non_negative(material_cost), non_negative(energy_cost), fixed]
            .into_iter()
            .chain(extra_costs.iter().map(|c| non_negative(c.amount))),
    )
}

/// Split a job total across units. A quantity of 0 counts as 1.
#[must_use]
pub fn unit_cost(production_total: Decimal, unit_quantity: u32) -> Decimal {
    production_total / Decimal::from(unit_quantity.max(1))
}

/// Suggest a sale price that leaves `margin_percent` of the price as profit
/// after the marketplace and anticipation fees are withheld.
///
/// When fees plus margin reach 100% the divisor is zero or negative and no
/// price can satisfy the request. The fallback is a plain markup,
/// `cost * (1 + margin / 100)`, reported as
/// [`SuggestionMethod::MarkupFallback`].
///
/// A cost of zero (or less) always suggests a price of zero.
#[must_use]
pub fn compute_suggested_price(
    cost_with_shared: Decimal,
    marketplace_fee_percent: Percent,
    anticipation_fee_percent: Percent,
    margin_percent: Percent,
) -> SuggestedPrice {
    let cost = non_negative(cost_with_shared);
    let total_fee = marketplace_fee_percent + anticipation_fee_percent;
    let divisor = Decimal::ONE - total_fee.as_fraction() - margin_percent.as_fraction();

    if divisor > Decimal::ZERO {
        // A divisor near zero can push the quotient past Decimal::MAX.
        let price = cost.checked_div(divisor).unwrap_or(Decimal::MAX);
        SuggestedPrice {
            price,
            method: SuggestionMethod::MarginOfPrice,
        }
    } else {
        SuggestedPrice {
            price: cost.saturating_mul(Decimal::ONE + margin_percent.as_fraction()),
            method: SuggestionMethod::MarkupFallback,
        }
    }
}

/// Fees, net profit and realized margin at `final_price`.
///
/// Never fails: a zero price yields a zero margin, and a negative net profit
/// simply means the price loses money.
#[must_use]
pub fn compute_realized_margin(
    final_price: Decimal,
    unit_cost_with_shared: Decimal,
    marketplace_fee_percent: Percent,
    anticipation_fee_percent: Percent,
) -> RealizedMargin {
    let price = non_negative(final_price);
    let fees_amount = (marketplace_fee_percent + anticipation_fee_percent).of(price);
    let net_profit = price
        .saturating_sub(non_negative(unit_cost_with_shared))
        .saturating_sub(fees_amount);
    let realized_margin_percent = if price > Decimal::ZERO {
        // A price near zero against a large loss saturates.
        let bound = if net_profit.is_sign_negative() {
            Decimal::MIN
        } else {
            Decimal::MAX
        };
        net_profit
            .checked_div(price)
            .map_or(bound, |ratio| ratio.saturating_mul(Decimal::ONE_HUNDRED))
    } else {
        Decimal::ZERO
    };

    RealizedMargin {
        fees_amount,
        net_profit,
        realized_margin_percent,
    }
}

/// Run the whole pipeline for one input.
#[must_use]
pub fn compute_cost_breakdown(input: &PricingInput) -> PricingResult {
    let quantity = input.effective_quantity();

    let material_cost = compute_material_cost(&input.materials);
    let energy_cost = compute_energy_cost(input.print_time_hours, input.energy_cost_per_hour);
    let extra_costs_total =
        saturating_sum(input.extra_costs.iter().map(|c| non_negative(c.amount)));
    let production_cost_total = compute_production_total(
        material_cost,
        energy_cost,
        &input.extra_costs,
        input.fixed_costs_per_unit,
        quantity,
    );

    let unit = unit_cost(production_cost_total, quantity);
    let shared_per_unit = unit_cost(non_negative(input.shared_fixed_costs), quantity);
    let unit_cost_with_shared = unit.saturating_add(shared_per_unit);

    let suggestion = compute_suggested_price(
        unit_cost_with_shared,
        input.marketplace_fee_percent,
        input.anticipation_fee_percent,
        input.margin_percent,
    );

    let (final_price, price_source) = match input.custom_sell_price {
        Some(custom) if custom > Decimal::ZERO => (custom, PriceSource::Custom),
        _ => (suggestion.price, PriceSource::Suggested),
    };

    let realized = compute_realized_margin(
        final_price,
        unit_cost_with_shared,
        input.marketplace_fee_percent,
        input.anticipation_fee_percent,
    );

    let minimum_markup = Decimal::ONE + MINIMUM_PRICE_MARKUP_PERCENT / Decimal::ONE_HUNDRED;
    let minimum_price = unit_cost_with_shared.saturating_mul(minimum_markup);

    PricingResult {
        material_cost,
        energy_cost,
        extra_costs_total,
        production_cost_total,
        unit_cost: unit,
        unit_cost_with_shared,
        suggested_price: suggestion.price,
        suggestion: suggestion.method,
        minimum_price,
        final_price,
        price_source,
        fees_amount: realized.fees_amount,
        net_profit: realized.net_profit,
        realized_margin_percent: realized.realized_margin_percent,
    }
}
