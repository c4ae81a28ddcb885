//! Integration tests for Printcost.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p printcost-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `pricing_properties` - Engine properties through the public API
//! - `job_files` - YAML/JSON job and order documents from `fixtures/`
//!
//! This crate only holds shared helpers; the tests live in `tests/`.

use std::path::PathBuf;

use printcost_core::{Material, Percent, PricingInput};
use rust_decimal::Decimal;

/// Parse a decimal literal.
///
/// # Panics
///
/// Panics if `s` is not a valid decimal. Test helper only.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

/// Absolute path of a file under `fixtures/`.
#[must_use]
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(name)
}

/// Read a fixture file to a string.
///
/// # Panics
///
/// Panics if the fixture is missing. Test helper only.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name)).unwrap()
}

/// The reference product: one 120 g print sold through a marketplace.
///
/// Material 10.80, energy 0.675, packaging and label 2, shipping 22,
/// fees 16.5% + 3.5%, margin 50%.
#[must_use]
pub fn reference_input() -> PricingInput {
    PricingInput {
        materials: vec![Material::new(dec("120"), dec("90"))],
        print_time_hours: dec("4.5"),
        energy_cost_per_hour: dec("0.15"),
        unit_quantity: 1,
        fixed_costs_per_unit: dec("2"),
        shared_fixed_costs: dec("22"),
        extra_costs: Vec::new(),
        marketplace_fee_percent: Percent::new(dec("16.5")),
        anticipation_fee_percent: Percent::new(dec("3.5")),
        margin_percent: Percent::new(dec("50")),
        custom_sell_price: None,
    }
}
