//! Energy cost per print hour from printer wattage.
//!
//! # Usage
//!
//! ```bash
//! printcost energy --watts 150 --kwh-cost 0.95
//! printcost energy --preset fdm-heated-bed
//! printcost energy --list-presets
//! ```

use std::fmt::Write as _;

use printcost_core::CostSettings;
use printcost_core::energy::{WATTS_PRESETS, WattsPreset, energy_cost_per_hour, find_preset};
use rust_decimal::Decimal;
use serde::Serialize;

use super::{CommandError, Output, emit};
use crate::report;

/// Energy cost estimate for one printer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnergyEstimate {
    /// Preset used, if any.
    pub preset: Option<&'static str>,
    pub watts: Decimal,
    pub kwh_cost: Decimal,
    pub cost_per_hour: Decimal,
}

/// Resolve watts from an explicit value or a preset slug.
///
/// # Errors
///
/// Returns `CommandError::UnknownPreset` for an unknown slug, or
/// `CommandError::MissingWatts` when neither is given.
pub fn estimate(
    watts: Option<Decimal>,
    preset: Option<&str>,
    kwh_cost: Decimal,
) -> Result<EnergyEstimate, CommandError> {
    let (watts, preset) = match (watts, preset) {
        (Some(watts), _) => (watts, None),
        (None, Some(slug)) => {
            let found =
                find_preset(slug).ok_or_else(|| CommandError::UnknownPreset(slug.to_string()))?;
            (found.watts_decimal(), Some(found.slug))
        }
        (None, None) => return Err(CommandError::MissingWatts),
    };

    Ok(EnergyEstimate {
        preset,
        watts,
        kwh_cost,
        cost_per_hour: energy_cost_per_hour(watts, kwh_cost),
    })
}

fn render_presets(presets: &[WattsPreset]) -> String {
    let mut out = String::new();
    for preset in presets {
        let _ = writeln!(
            out,
            "  {:<16}{:>5} W  {} ({})",
            preset.slug, preset.watts, preset.label, preset.description
        );
    }
    out
}

/// Print the energy cost per hour, or the preset table.
///
/// # Errors
///
/// Returns an error if the watts cannot be resolved or JSON output fails.
pub fn run(
    watts: Option<Decimal>,
    preset: Option<&str>,
    kwh_cost: Option<Decimal>,
    list_presets: bool,
    json: bool,
    settings: &CostSettings,
) -> Result<(), CommandError> {
    let output = Output::from_flag(json);

    if list_presets {
        return emit(output, &render_presets(WATTS_PRESETS), &WATTS_PRESETS);
    }

    let estimate = estimate(watts, preset, kwh_cost.unwrap_or(settings.kwh_cost))?;
    let text = format!(
        "{} W at {}/kWh = {} per hour\n",
        estimate.watts,
        report::fixed(estimate.kwh_cost, 2),
        report::fixed(estimate.cost_per_hour, 4)
    );
    emit(output, &text, &estimate)
}
