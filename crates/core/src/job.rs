//! Serializable pricing job documents.
//!
//! A job file captures one calculation the way a user fills in the product
//! form: what the slicer extracted, which catalog filaments the materials map
//! to, and any overrides of the user's cost settings. Fields left out fall
//! back to the [`CostSettings`] passed to [`PricingJob::to_input`].
//!
//! ```yaml
//! name: Benchy
//! print_time_hours: "4.5"
//! energy_cost_per_hour: "0.15"
//! filaments:
//!   - id: 1
//!     cost_per_kg: "90"
//! materials:
//!   - weight_grams: "120"
//!     filament_id: 1
//! margin_percent: "50"
//! ```

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::{ExtractedMaterial, PrintJobExtract, resolve_materials};
use crate::pricing::{ExtraCost, PricingInput};
use crate::settings::CostSettings;
use crate::types::{FilamentId, Percent};

/// A catalog filament referenced by a job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Catalog ID that materials refer to.
    pub id: FilamentId,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Cost per kilogram (ideally the landed cost, with shipping).
    pub cost_per_kg: Decimal,
}

/// One pricing calculation as stored in a YAML or JSON file.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingJob {
    /// Product name, for reports only.
    pub name: Option<String>,
    /// Print duration in hours.
    pub print_time_hours: Option<Decimal>,
    /// Print duration in minutes, as most slicers report it.
    /// Ignored when `print_time_hours` is set.
    pub print_time_minutes: Option<Decimal>,
    /// Explicit energy cost per hour. Overrides watts and rate.
    pub energy_cost_per_hour: Option<Decimal>,
    /// Printer draw in watts.
    pub printer_watts: Option<Decimal>,
    /// Electricity rate per kWh.
    pub kwh_cost: Option<Decimal>,
    /// Units produced by the job.
    pub unit_quantity: Option<u32>,
    /// Extracted materials.
    pub materials: Vec<ExtractedMaterial>,
    /// Filament catalog used to resolve material costs.
    pub filaments: Vec<CatalogEntry>,
    /// Packaging cost per unit.
    pub packaging_cost: Option<Decimal>,
    /// Label cost per unit.
    pub label_cost: Option<Decimal>,
    /// Shipping cost per job.
    pub shipping_cost: Option<Decimal>,
    /// Sales channel fee.
    pub marketplace_fee_percent: Option<Percent>,
    /// Early payout fee.
    pub anticipation_fee_percent: Option<Percent>,
    /// Target margin.
    pub margin_percent: Option<Percent>,
    /// Ad-hoc job costs.
    pub extra_costs: Vec<ExtraCost>,
    /// User override of the suggested price.
    pub custom_sell_price: Option<Decimal>,
}

/// A job converted to engine input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedJob {
    /// Input ready for [`crate::compute_cost_breakdown`].
    pub input: PricingInput,
    /// Positions of materials that have no cost mapping.
    pub unmapped: Vec<usize>,
}

impl PreparedJob {
    /// Whether every material has a cost.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.unmapped.is_empty()
    }
}

impl PricingJob {
    /// Build a job from extractor output, leaving costs to settings.
    #[must_use]
    pub fn from_extract(extract: PrintJobExtract) -> Self {
        Self {
            print_time_hours: Some(extract.print_time_hours),
            materials: extract.materials,
            ..Self::default()
        }
    }

    /// Print duration in hours, from whichever field is set.
    #[must_use]
    pub fn print_time(&self) -> Decimal {
        self.print_time_hours
            .or_else(|| self.print_time_minutes.map(PrintJobExtract::hours_from_minutes))
            .unwrap_or(Decimal::ZERO)
    }

    /// Resolve materials against the job's catalog and fill gaps from `settings`.
    #[must_use]
    pub fn to_input(&self, settings: &CostSettings) -> PreparedJob {
        let catalog: HashMap<FilamentId, Decimal> = self
            .filaments
            .iter()
            .map(|f| (f.id, f.cost_per_kg))
            .collect();
        let resolved = resolve_materials(&self.materials, &catalog);

        let energy_per_hour = settings.energy_cost_per_hour_with(
            self.energy_cost_per_hour,
            self.printer_watts,
            self.kwh_cost,
        );

        let fixed_per_unit = self
            .packaging_cost
            .unwrap_or(settings.packaging_cost)
            .max(Decimal::ZERO)
            + self
                .label_cost
                .unwrap_or(settings.label_cost)
                .max(Decimal::ZERO);

        let input = PricingInput {
            materials: resolved.materials,
            print_time_hours: self.print_time(),
            energy_cost_per_hour: energy_per_hour,
            unit_quantity: self.unit_quantity.unwrap_or(1).max(1),
            fixed_costs_per_unit: fixed_per_unit,
            shared_fixed_costs: self.shipping_cost.unwrap_or(settings.shipping_cost),
            extra_costs: self.extra_costs.clone(),
            marketplace_fee_percent: self
                .marketplace_fee_percent
                .unwrap_or(settings.marketplace_fee_percent),
            anticipation_fee_percent: self
                .anticipation_fee_percent
                .unwrap_or(settings.anticipation_fee_percent),
            margin_percent: self.margin_percent.unwrap_or(settings.margin_percent),
            custom_sell_price: self.custom_sell_price,
        };

        PreparedJob {
            input,
            unmapped: resolved.unmapped,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::compute_cost_breakdown;
    use crate::settings::DEFAULT_ENERGY_COST_PER_HOUR;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_to_input_uses_job_values() {
        let job = PricingJob {
            print_time_hours: Some(dec("4.5")),
            energy_cost_per_hour: Some(dec("0.15")),
            filaments: vec![CatalogEntry {
                id: FilamentId::new(1),
                name: None,
                cost_per_kg: dec("90"),
            }],
            materials: vec![ExtractedMaterial::new(dec("120")).with_filament(FilamentId::new(1))],
            packaging_cost: Some(dec("1.5")),
            label_cost: Some(dec("0.5")),
            shipping_cost: Some(dec("22")),
            marketplace_fee_percent: Some(Percent::new(dec("16.5"))),
            anticipation_fee_percent: Some(Percent::new(dec("3.5"))),
            margin_percent: Some(Percent::new(dec("50"))),
            ..PricingJob::default()
        };
        let prepared = job.to_input(&CostSettings::default());

        assert!(prepared.is_complete());
        assert_eq!(prepared.input.fixed_costs_per_unit, dec("2"));
        let result = compute_cost_breakdown(&prepared.input);
        assert_eq!(result.suggested_price, dec("118.25"));
    }

    #[test]
    fn test_to_input_falls_back_to_settings() {
        let settings = CostSettings {
            kwh_cost: dec("1"),
            printer_watts: dec("250"),
            margin_percent: Percent::new(dec("40")),
            shipping_cost: dec("10"),
            ..CostSettings::default()
        };
        let job = PricingJob {
            print_time_minutes: Some(dec("120")),
            ..PricingJob::default()
        };
        let prepared = job.to_input(&settings);

        assert_eq!(prepared.input.print_time_hours, dec("2"));
        assert_eq!(prepared.input.energy_cost_per_hour, dec("0.25"));
        assert_eq!(prepared.input.margin_percent.value(), dec("40"));
        assert_eq!(prepared.input.shared_fixed_costs, dec("10"));
        assert_eq!(prepared.input.unit_quantity, 1);
    }

    #[test]
    fn test_to_input_without_printer_uses_default_energy_rate() {
        let settings = CostSettings {
            printer_watts: Decimal::ZERO,
            ..CostSettings::default()
        };
        let prepared = PricingJob::default().to_input(&settings);
        assert_eq!(prepared.input.energy_cost_per_hour, DEFAULT_ENERGY_COST_PER_HOUR);

        let job = PricingJob {
            printer_watts: Some(dec("100")),
            kwh_cost: Some(dec("1")),
            ..PricingJob::default()
        };
        assert_eq!(job.to_input(&settings).input.energy_cost_per_hour, dec("0.1"));
    }

    #[test]
    fn test_hours_take_precedence_over_minutes() {
        let job = PricingJob {
            print_time_hours: Some(dec("3")),
            print_time_minutes: Some(dec("30")),
            ..PricingJob::default()
        };
        assert_eq!(job.print_time(), dec("3"));
    }

    #[test]
    fn test_unmapped_materials_are_reported() {
        let job = PricingJob {
            materials: vec![ExtractedMaterial::new(dec("80"))],
            ..PricingJob::default()
        };
        let prepared = job.to_input(&CostSettings::default());
        assert!(!prepared.is_complete());
        assert_eq!(prepared.unmapped, vec![0]);
    }

    #[test]
    fn test_from_extract() {
        let extract = PrintJobExtract {
            print_time_hours: dec("1.25"),
            materials: vec![ExtractedMaterial::new(dec("40"))],
        };
        let job = PricingJob::from_extract(extract);
        assert_eq!(job.print_time(), dec("1.25"));
        assert_eq!(job.materials.len(), 1);
    }

    #[test]
    fn test_deserialize_json_job() {
        let job: PricingJob = serde_json::from_str(
            r#"{
                "print_time_hours": "2",
                "unit_quantity": 4,
                "filaments": [{"id": 7, "cost_per_kg": "100"}],
                "materials": [{"weight_grams": "400", "filament_id": 7}],
                "extra_costs": [{"label": "sanding", "amount": "8"}]
            }"#,
        )
        .unwrap();
        let prepared = job.to_input(&CostSettings::default());
        let result = compute_cost_breakdown(&prepared.input);

        assert_eq!(prepared.input.unit_quantity, 4);
        assert_eq!(result.material_cost, dec("40"));
        assert_eq!(result.extra_costs_total, dec("8"));
    }
}
