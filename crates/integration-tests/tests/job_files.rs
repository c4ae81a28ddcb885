//! Job and order documents loaded from `fixtures/`.

use printcost_core::job::PricingJob;
use printcost_core::purchase::{PurchaseExtras, PurchaseItem, prorate_purchase};
use printcost_core::{ColorHex, CostSettings, compute_cost_breakdown};
use printcost_integration_tests::{dec, read_fixture, reference_input};
use serde::Deserialize;

// =============================================================================
// Pricing Jobs
// =============================================================================

#[test]
#[allow(clippy::unwrap_used)]
fn test_yaml_job_matches_reference_scenario() {
    let job: PricingJob = serde_yaml::from_str(&read_fixture("benchy.yaml")).unwrap();
    let prepared = job.to_input(&CostSettings::default());

    assert!(prepared.is_complete());
    assert_eq!(job.name.as_deref(), Some("Benchy"));
    assert_eq!(
        job.materials[0].color,
        Some(ColorHex::parse("#000000").unwrap())
    );
    assert_eq!(
        compute_cost_breakdown(&prepared.input),
        compute_cost_breakdown(&reference_input())
    );
}

#[test]
#[allow(clippy::unwrap_used)]
fn test_json_job_with_watts_and_unmapped_material() {
    let job: PricingJob = serde_json::from_str(&read_fixture("keychains.json")).unwrap();
    let prepared = job.to_input(&CostSettings::default());

    // The purge block has no filament mapping
    assert_eq!(prepared.unmapped, vec![2]);
    assert_eq!(prepared.input.print_time_hours, dec("3"));
    assert_eq!(prepared.input.energy_cost_per_hour, dec("0.15"));

    let result = compute_cost_breakdown(&prepared.input);
    assert_eq!(result.material_cost, dec("26"));
    assert_eq!(result.energy_cost, dec("0.45"));
    assert_eq!(result.extra_costs_total, dec("15"));
    assert_eq!(result.production_cost_total, dec("41.45"));
    assert_eq!(result.unit_cost, dec("4.145"));
    assert_eq!(result.suggested_price.round_dp(2), dec("6.91"));
}

#[test]
#[allow(clippy::unwrap_used)]
fn test_job_settings_fill_missing_fields() {
    let job: PricingJob = serde_yaml::from_str("print_time_hours: \"2\"\n").unwrap();
    let settings = CostSettings {
        kwh_cost: dec("0.5"),
        printer_watts: dec("200"),
        shipping_cost: dec("10"),
        ..CostSettings::default()
    };
    let prepared = job.to_input(&settings);

    assert_eq!(prepared.input.energy_cost_per_hour, dec("0.1"));
    assert_eq!(prepared.input.shared_fixed_costs, dec("10"));
    assert_eq!(prepared.input.margin_percent, settings.margin_percent);
}

#[test]
#[allow(clippy::unwrap_used)]
fn test_job_with_unparseable_colors_still_prices() {
    let yaml = r##"
print_time_hours: "1"
energy_cost_per_hour: "0.2"
filaments:
  - id: 1
    name: PLA red
    cost_per_kg: "90"
materials:
  - weight_grams: "100"
    color: Vermelho
    filament_id: 1
  - weight_grams: "100"
    color: "#FFFFFFFF"
    filament_id: 1
"##;
    let job: PricingJob = serde_yaml::from_str(yaml).unwrap();
    assert!(job.materials.iter().all(|m| m.color.is_none()));

    let prepared = job.to_input(&CostSettings::default());
    assert!(prepared.is_complete());

    let result = compute_cost_breakdown(&prepared.input);
    assert_eq!(result.material_cost, dec("18"));
    assert_eq!(result.energy_cost, dec("0.2"));
}

// =============================================================================
// Purchase Orders
// =============================================================================

#[derive(Deserialize)]
struct Order {
    items: Vec<PurchaseItem>,
    #[serde(flatten)]
    extras: PurchaseExtras,
}

#[test]
#[allow(clippy::unwrap_used)]
fn test_order_landed_costs() {
    let order: Order = serde_yaml::from_str(&read_fixture("order.yaml")).unwrap();
    let breakdown = prorate_purchase(&order.items, &order.extras);

    assert!(breakdown.distributed);
    assert_eq!(breakdown.items[0].cost_per_kg_with_shipping, dec("112"));
    assert_eq!(breakdown.items[1].cost_per_kg_with_shipping, dec("92"));
    assert_eq!(breakdown.average_cost_per_kg_with_shipping, dec("97"));
}
