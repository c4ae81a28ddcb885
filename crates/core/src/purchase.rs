//! Landed cost of filament purchases.
//!
//! Shipping and fees paid on an order are spread over its spools in
//! proportion to weight, giving each spool a cost per kilogram "with
//! shipping". That landed rate is what should feed the filament catalog.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

fn to_kg(grams: Decimal) -> Decimal {
    grams.max(Decimal::ZERO) / Decimal::ONE_THOUSAND
}

/// One spool (or batch of identical spools) in an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseItem {
    /// Label shown in reports (brand, color, ...).
    #[serde(default)]
    pub label: String,
    /// Net filament weight in grams.
    pub weight_grams: Decimal,
    /// Price paid per kilogram, before shipping and fees.
    pub cost_per_kg: Decimal,
}

/// Order-level extras to spread across items.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PurchaseExtras {
    /// Shipping paid for the whole order.
    pub shipping_total: Decimal,
    /// Fees and taxes paid for the whole order.
    pub fees_total: Decimal,
    /// Only when set are the extras distributed over items.
    pub prorate_by_weight: bool,
}

/// Landed cost of one item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemLandedCost {
    /// Shipping attributed to this item.
    pub shipping_share: Decimal,
    /// Fees attributed to this item.
    pub fee_share: Decimal,
    /// Base cost per kg plus this item's extras per kg.
    pub cost_per_kg_with_shipping: Decimal,
}

/// Landed costs for a whole order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseBreakdown {
    /// Whether extras were actually distributed.
    pub distributed: bool,
    /// Shipping after clamping.
    pub shipping_total: Decimal,
    /// Fees after clamping.
    pub fees_total: Decimal,
    /// Order weight in kilograms.
    pub total_weight_kg: Decimal,
    /// One entry per input item, in order.
    pub items: Vec<ItemLandedCost>,
    /// Weighted average cost per kg, without extras.
    pub average_cost_per_kg: Decimal,
    /// Weighted average cost per kg, with extras.
    pub average_cost_per_kg_with_shipping: Decimal,
}

/// Spread shipping and fees over the items of an order by weight.
///
/// Extras are distributed only when `prorate_by_weight` is set, at least one
/// extra is positive, and the order has weight. Otherwise every item keeps
/// its base cost. Items with zero weight receive no share.
#[must_use]
pub fn prorate_purchase(items: &[PurchaseItem], extras: &PurchaseExtras) -> PurchaseBreakdown {
    let shipping_total = extras.shipping_total.max(Decimal::ZERO);
    let fees_total = extras.fees_total.max(Decimal::ZERO);
    let total_weight_kg: Decimal = items.iter().map(|i| to_kg(i.weight_grams)).sum();

    let distributed = extras.prorate_by_weight
        && (shipping_total > Decimal::ZERO || fees_total > Decimal::ZERO)
        && total_weight_kg > Decimal::ZERO;

    let landed: Vec<ItemLandedCost> = items
        .iter()
        .map(|item| {
            let weight_kg = to_kg(item.weight_grams);
            let base = item.cost_per_kg.max(Decimal::ZERO);

            if !distributed || weight_kg.is_zero() {
                return ItemLandedCost {
                    shipping_share: Decimal::ZERO,
                    fee_share: Decimal::ZERO,
                    cost_per_kg_with_shipping: base,
                };
            }

            let ratio = weight_kg / total_weight_kg;
            let shipping_share = shipping_total * ratio;
            let fee_share = fees_total * ratio;
            ItemLandedCost {
                shipping_share,
                fee_share,
                cost_per_kg_with_shipping: base + (shipping_share + fee_share) / weight_kg,
            }
        })
        .collect();

    let has_weight = total_weight_kg > Decimal::ZERO;
    let (average_cost_per_kg, average_cost_per_kg_with_shipping) = if has_weight {
        let base_value: Decimal = items
            .iter()
            .map(|i| to_kg(i.weight_grams) * i.cost_per_kg.max(Decimal::ZERO))
            .sum();
        let landed_value: Decimal = items
            .iter()
            .zip(&landed)
            .map(|(i, l)| to_kg(i.weight_grams) * l.cost_per_kg_with_shipping)
            .sum();
        (base_value / total_weight_kg, landed_value / total_weight_kg)
    } else {
        (Decimal::ZERO, Decimal::ZERO)
    };

    PurchaseBreakdown {
        distributed,
        shipping_total,
        fees_total,
        total_weight_kg,
        items: landed,
        average_cost_per_kg,
        average_cost_per_kg_with_shipping,
    }
}

/// Cost per kg of a spool after restocking, averaged by weight.
///
/// Falls back to the added cost when the combined weight is zero.
#[must_use]
pub fn weighted_restock_cost(
    current_grams: Decimal,
    current_cost_per_kg: Decimal,
    added_grams: Decimal,
    added_cost_per_kg: Decimal,
) -> Decimal {
    let current_kg = to_kg(current_grams);
    let added_kg = to_kg(added_grams);
    let total_kg = current_kg + added_kg;

    if total_kg.is_zero() {
        return added_cost_per_kg.max(Decimal::ZERO);
    }

    (current_kg * current_cost_per_kg.max(Decimal::ZERO)
        + added_kg * added_cost_per_kg.max(Decimal::ZERO))
        / total_kg
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn item(grams: &str, cost: &str) -> PurchaseItem {
        PurchaseItem {
            label: String::new(),
            weight_grams: dec(grams),
            cost_per_kg: dec(cost),
        }
    }

    #[test]
    fn test_prorate_by_weight() {
        let items = [item("1000", "100"), item("3000", "80")];
        let extras = PurchaseExtras {
            shipping_total: dec("40"),
            fees_total: dec("8"),
            prorate_by_weight: true,
        };
        let breakdown = prorate_purchase(&items, &extras);

        assert!(breakdown.distributed);
        assert_eq!(breakdown.total_weight_kg, dec("4"));
        assert_eq!(breakdown.items[0].shipping_share, dec("10"));
        assert_eq!(breakdown.items[0].fee_share, dec("2"));
        assert_eq!(breakdown.items[0].cost_per_kg_with_shipping, dec("112"));
        assert_eq!(breakdown.items[1].shipping_share, dec("30"));
        assert_eq!(breakdown.items[1].cost_per_kg_with_shipping, dec("92"));
        assert_eq!(breakdown.average_cost_per_kg, dec("85"));
        assert_eq!(breakdown.average_cost_per_kg_with_shipping, dec("97"));
    }

    #[test]
    fn test_no_prorate_keeps_base_cost() {
        let items = [item("1000", "100")];
        let extras = PurchaseExtras {
            shipping_total: dec("40"),
            fees_total: Decimal::ZERO,
            prorate_by_weight: false,
        };
        let breakdown = prorate_purchase(&items, &extras);

        assert!(!breakdown.distributed);
        assert_eq!(breakdown.items[0].cost_per_kg_with_shipping, dec("100"));
        assert_eq!(breakdown.items[0].shipping_share, Decimal::ZERO);
    }

    #[test]
    fn test_negative_extras_clamp() {
        let items = [item("500", "100")];
        let extras = PurchaseExtras {
            shipping_total: dec("-10"),
            fees_total: dec("-1"),
            prorate_by_weight: true,
        };
        let breakdown = prorate_purchase(&items, &extras);
        assert!(!breakdown.distributed);
        assert_eq!(breakdown.shipping_total, Decimal::ZERO);
    }

    #[test]
    fn test_zero_weight_order() {
        let items = [item("0", "100")];
        let extras = PurchaseExtras {
            shipping_total: dec("10"),
            fees_total: Decimal::ZERO,
            prorate_by_weight: true,
        };
        let breakdown = prorate_purchase(&items, &extras);
        assert!(!breakdown.distributed);
        assert_eq!(breakdown.average_cost_per_kg, Decimal::ZERO);
        assert_eq!(breakdown.items[0].cost_per_kg_with_shipping, dec("100"));
    }

    #[test]
    fn test_zero_weight_item_in_heavy_order() {
        let items = [item("0", "100"), item("1000", "50")];
        let extras = PurchaseExtras {
            shipping_total: dec("10"),
            fees_total: Decimal::ZERO,
            prorate_by_weight: true,
        };
        let breakdown = prorate_purchase(&items, &extras);
        assert_eq!(breakdown.items[0].cost_per_kg_with_shipping, dec("100"));
        assert_eq!(breakdown.items[1].cost_per_kg_with_shipping, dec("60"));
    }

    #[test]
    fn test_weighted_restock_cost() {
        let cost = weighted_restock_cost(dec("250"), dec("100"), dec("750"), dec("80"));
        assert_eq!(cost, dec("85"));
    }

    #[test]
    fn test_weighted_restock_cost_empty_spool() {
        let cost = weighted_restock_cost(Decimal::ZERO, dec("100"), dec("1000"), dec("80"));
        assert_eq!(cost, dec("80"));
        let cost = weighted_restock_cost(Decimal::ZERO, dec("100"), Decimal::ZERO, dec("80"));
        assert_eq!(cost, dec("80"));
    }
}
