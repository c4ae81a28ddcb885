//! Plain-text rendering of calculation results.

use std::fmt::Write as _;

use printcost_core::purchase::PurchaseBreakdown;
use printcost_core::sale::SaleSummary;
use printcost_core::{PriceSource, PricingInput, PricingResult, SuggestionMethod};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

const LABEL_WIDTH: usize = 26;

/// Round half away from zero, then pad to `places` decimals.
#[must_use]
pub fn fixed(value: Decimal, places: u32) -> String {
    let rounded = value.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.prec$}", prec = places as usize)
}

fn money(value: Decimal) -> String {
    fixed(value, 2)
}

fn row(out: &mut String, label: &str, value: &str) {
    let _ = writeln!(out, "  {label:<LABEL_WIDTH$}{value:>12}");
}

/// JSON shape of a quote or job report.
#[derive(Debug, Serialize)]
pub struct Quote<'a> {
    pub name: Option<&'a str>,
    pub input: &'a PricingInput,
    pub result: &'a PricingResult,
    /// Positions of materials priced without a cost per kg.
    pub unmapped: &'a [usize],
}

/// Render a pricing breakdown.
#[must_use]
pub fn breakdown(name: Option<&str>, input: &PricingInput, result: &PricingResult) -> String {
    let mut out = String::new();

    if let Some(name) = name {
        let _ = writeln!(out, "{name}");
    }

    let _ = writeln!(out, "Costs (whole job)");
    row(&mut out, "Material", &money(result.material_cost));
    row(&mut out, "Energy", &money(result.energy_cost));
    if !result.extra_costs_total.is_zero() {
        row(&mut out, "Extras", &money(result.extra_costs_total));
    }
    row(&mut out, "Production total", &money(result.production_cost_total));

    let _ = writeln!(out, "Per unit (x{})", input.effective_quantity());
    row(&mut out, "Unit cost", &money(result.unit_cost));
    row(&mut out, "Unit cost with shared", &money(result.unit_cost_with_shared));
    row(&mut out, "Minimum price", &money(result.minimum_price));

    let _ = writeln!(out, "Price");
    row(&mut out, "Suggested price", &money(result.suggested_price));
    if result.suggestion == SuggestionMethod::MarkupFallback {
        let _ = writeln!(
            out,
            "  (fees + margin reach 100% of the price; using plain {} markup)",
            input.margin_percent
        );
    }
    let source = match result.price_source {
        PriceSource::Suggested => "Final price",
        PriceSource::Custom => "Final price (custom)",
    };
    row(&mut out, source, &money(result.final_price));
    row(
        &mut out,
        &format!("Fees ({})", input.total_fee_percent()),
        &money(result.fees_amount),
    );
    row(&mut out, "Net profit", &money(result.net_profit));
    let quantity = input.effective_quantity();
    if quantity > 1 {
        row(
            &mut out,
            &format!("Job net profit (x{quantity})"),
            &money(result.job_net_profit(quantity)),
        );
    }
    row(
        &mut out,
        "Realized margin",
        &format!("{}%", fixed(result.realized_margin_percent, 1)),
    );

    if result.is_loss() {
        let _ = writeln!(out, "WARNING: this price loses money after fees");
    }

    out
}

/// Render landed costs of a purchase.
#[must_use]
pub fn purchase(labels: &[String], breakdown: &PurchaseBreakdown) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Order: {} kg, shipping {}, fees {}{}",
        fixed(breakdown.total_weight_kg, 3),
        money(breakdown.shipping_total),
        money(breakdown.fees_total),
        if breakdown.distributed {
            ""
        } else {
            " (not distributed)"
        }
    );

    for (index, item) in breakdown.items.iter().enumerate() {
        let label = labels
            .get(index)
            .filter(|l| !l.is_empty())
            .cloned()
            .unwrap_or_else(|| format!("item {}", index + 1));
        row(&mut out, &label, &money(item.cost_per_kg_with_shipping));
    }

    row(&mut out, "Average /kg", &money(breakdown.average_cost_per_kg));
    row(
        &mut out,
        "Average /kg with shipping",
        &money(breakdown.average_cost_per_kg_with_shipping),
    );

    out
}

/// Render a sale summary.
#[must_use]
pub fn sale(summary: &SaleSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Sale of {} unit(s)", summary.quantity);
    row(&mut out, "Revenue", &money(summary.revenue));
    row(&mut out, "Cost", &money(summary.cost));
    row(&mut out, "Profit", &money(summary.profit));
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use printcost_core::{Material, Percent, compute_cost_breakdown};

    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_money_two_places() {
        assert_eq!(money(dec("10.8")), "10.80");
        assert_eq!(money(dec("0.675")), "0.68");
        assert_eq!(money(dec("0.665")), "0.67");
        assert_eq!(fixed(dec("50"), 1), "50.0");
    }

    #[test]
    fn test_breakdown_lists_prices() {
        let input = PricingInput {
            materials: vec![Material::new(dec("120"), dec("90"))],
            print_time_hours: dec("4.5"),
            energy_cost_per_hour: dec("0.15"),
            fixed_costs_per_unit: dec("2"),
            shared_fixed_costs: dec("22"),
            marketplace_fee_percent: Percent::new(dec("16.5")),
            anticipation_fee_percent: Percent::new(dec("3.5")),
            margin_percent: Percent::new(dec("50")),
            ..PricingInput::default()
        };
        let result = compute_cost_breakdown(&input);
        let text = breakdown(Some("Benchy"), &input, &result);

        assert!(text.starts_with("Benchy\n"));
        assert!(text.contains("118.25"));
        assert!(text.contains("35.48"));
        assert!(text.contains("Fees (20%)"));
        assert!(!text.contains("WARNING"));
    }

    #[test]
    fn test_breakdown_shows_job_profit_for_batches() {
        let single = PricingInput {
            materials: vec![Material::new(dec("1000"), dec("10"))],
            custom_sell_price: Some(dec("10")),
            ..PricingInput::default()
        };
        let text = breakdown(None, &single, &compute_cost_breakdown(&single));
        assert!(!text.contains("Job net profit"));

        let batch = PricingInput {
            unit_quantity: 4,
            ..single
        };
        let text = breakdown(None, &batch, &compute_cost_breakdown(&batch));
        assert!(text.contains("Job net profit (x4)"));
        assert!(text.contains("30.00"));
    }

    #[test]
    fn test_breakdown_warns_on_loss() {
        let input = PricingInput {
            materials: vec![Material::new(dec("1000"), dec("100"))],
            custom_sell_price: Some(dec("50")),
            ..PricingInput::default()
        };
        let result = compute_cost_breakdown(&input);
        let text = breakdown(None, &input, &result);
        assert!(text.contains("Final price (custom)"));
        assert!(text.contains("WARNING"));
    }

    #[test]
    fn test_breakdown_mentions_fallback() {
        let input = PricingInput {
            materials: vec![Material::new(dec("1000"), dec("100"))],
            marketplace_fee_percent: Percent::new(dec("60")),
            margin_percent: Percent::new(dec("50")),
            ..PricingInput::default()
        };
        let result = compute_cost_breakdown(&input);
        let text = breakdown(None, &input, &result);
        assert!(text.contains("plain 50% markup"));
    }
}
