//! Revenue and profit of a sale.

use printcost_core::sale::summarize_sale;
use rust_decimal::Decimal;
use tracing::warn;

use super::{CommandError, Output, emit};
use crate::report;

/// Print revenue, cost and profit for `quantity` units.
///
/// # Errors
///
/// Returns an error if JSON output fails.
pub fn run(
    unit_price: Decimal,
    unit_cost: Decimal,
    quantity: u32,
    json: bool,
) -> Result<(), CommandError> {
    let summary = summarize_sale(unit_price, unit_cost, quantity);
    if summary.profit < Decimal::ZERO {
        warn!(profit = %summary.profit, "Sale is below cost");
    }
    emit(Output::from_flag(json), &report::sale(&summary), &summary)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use printcost_core::sale::SaleSummary;

    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_sale_report_rows() {
        let summary = summarize_sale(dec("118.25"), dec("35.475"), 3);
        let text = report::sale(&summary);

        assert!(text.starts_with("Sale of 3 unit(s)\n"));
        assert!(text.contains("354.75"));
        assert!(text.contains("106.43"));
        assert!(text.contains("248.33"));
    }

    #[test]
    fn test_sale_below_cost_reports_negative_profit() {
        let summary = summarize_sale(dec("10"), dec("12.5"), 2);
        assert_eq!(summary.profit, dec("-5"));
        assert!(report::sale(&summary).contains("-5.00"));
    }

    #[test]
    fn test_sale_json_shape() {
        let summary = summarize_sale(dec("20"), dec("5"), 0);
        let json = serde_json::to_string(&summary).unwrap();
        let parsed: SaleSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.quantity, 1);
        assert_eq!(parsed.profit, dec("15"));
    }

    #[test]
    fn test_run_succeeds_for_both_outputs() {
        assert!(run(dec("10"), dec("12.5"), 2, false).is_ok());
        assert!(run(dec("10"), dec("12.5"), 2, true).is_ok());
    }
}
