//! Printer power draw to energy cost per hour.

use rust_decimal::Decimal;
use serde::Serialize;

/// Energy cost of one printer hour: `watts / 1000 * kwh_cost`.
///
/// Returns zero when either input is zero or negative, so an unset printer
/// or rate never produces a negative cost.
///
/// ```
/// use printcost_core::energy::energy_cost_per_hour;
/// use rust_decimal::Decimal;
///
/// let per_hour = energy_cost_per_hour(Decimal::new(150, 0), Decimal::new(95, 2));
/// assert_eq!(per_hour, Decimal::new(1425, 4));
/// ```
#[must_use]
pub fn energy_cost_per_hour(watts: Decimal, kwh_cost: Decimal) -> Decimal {
    if watts <= Decimal::ZERO || kwh_cost <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    (watts / Decimal::ONE_THOUSAND).saturating_mul(kwh_cost)
}

/// Typical power draw of a printer class, for users who have not measured theirs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WattsPreset {
    /// Stable identifier used on the command line.
    pub slug: &'static str,
    /// Short human label.
    pub label: &'static str,
    /// Average draw while printing.
    pub watts: u32,
    /// What kind of machine this covers.
    pub description: &'static str,
}

/// Built-in estimates. A plug-in power meter gives better numbers.
pub const WATTS_PRESETS: &[WattsPreset] = &[
    WattsPreset {
        slug: "fdm-basic",
        label: "FDM without heated bed",
        watts: 80,
        description: "Small printers with no bed heating",
    },
    WattsPreset {
        slug: "fdm-heated-bed",
        label: "FDM with heated bed",
        watts: 150,
        description: "Most home FDM printers (PLA/PETG)",
    },
    WattsPreset {
        slug: "fdm-high-temp",
        label: "High-temperature FDM (ABS/ASA)",
        watts: 220,
        description: "Enclosed printers with a 100C+ bed",
    },
    WattsPreset {
        slug: "resin",
        label: "Resin",
        watts: 60,
        description: "LCD/DLP printers",
    },
];

/// Look up a preset by slug (case-insensitive).
#[must_use]
pub fn find_preset(slug: &str) -> Option<&'static WattsPreset> {
    WATTS_PRESETS
        .iter()
        .find(|p| p.slug.eq_ignore_ascii_case(slug.trim()))
}

impl WattsPreset {
    /// This preset's draw as a decimal.
    #[must_use]
    pub fn watts_decimal(&self) -> Decimal {
        Decimal::from(self.watts)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_energy_cost_per_hour() {
        let per_hour = energy_cost_per_hour(Decimal::new(200, 0), Decimal::new(95, 2));
        assert_eq!(per_hour, Decimal::new(19, 2));
    }

    #[test]
    fn test_energy_cost_per_hour_zero_inputs() {
        assert_eq!(energy_cost_per_hour(Decimal::ZERO, Decimal::ONE), Decimal::ZERO);
        assert_eq!(energy_cost_per_hour(Decimal::ONE_HUNDRED, Decimal::ZERO), Decimal::ZERO);
        assert_eq!(
            energy_cost_per_hour(Decimal::new(-150, 0), Decimal::ONE),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_find_preset() {
        assert_eq!(find_preset("resin").unwrap().watts, 60);
        assert_eq!(find_preset(" FDM-Heated-Bed ").unwrap().watts, 150);
        assert!(find_preset("laser").is_none());
    }

    #[test]
    fn test_preset_slugs_are_unique() {
        for (i, a) in WATTS_PRESETS.iter().enumerate() {
            for b in WATTS_PRESETS.iter().skip(i + 1) {
                assert_ne!(a.slug, b.slug);
            }
        }
    }
}
