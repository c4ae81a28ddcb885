//! Revenue and profit of a recorded sale.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Totals for one sale line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleSummary {
    /// Units sold (at least 1).
    pub quantity: u32,
    /// `unit_price * quantity`.
    pub revenue: Decimal,
    /// `unit_cost * quantity`.
    pub cost: Decimal,
    /// `revenue - cost`.
    pub profit: Decimal,
}

/// Summarize a sale of `quantity` units.
///
/// Negative prices and costs count as zero; a quantity of zero counts as one.
#[must_use]
pub fn summarize_sale(unit_price: Decimal, unit_cost: Decimal, quantity: u32) -> SaleSummary {
    let quantity = quantity.max(1);
    let units = Decimal::from(quantity);
    let revenue = unit_price.max(Decimal::ZERO).saturating_mul(units);
    let cost = unit_cost.max(Decimal::ZERO).saturating_mul(units);

    SaleSummary {
        quantity,
        revenue,
        cost,
        profit: revenue.saturating_sub(cost),
    }
}
