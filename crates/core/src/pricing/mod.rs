//! Cost breakdown and suggested price calculation.
//!
//! Every screen that prices a print (product creation, the quick calculator,
//! the manual editor) goes through [`compute_cost_breakdown`]. The engine is
//! a set of pure functions: no I/O, no ambient settings, no cached state.
//! Callers rebuild a [`PricingInput`] on every field change and discard the
//! previous [`PricingResult`].
//!
//! Invalid intermediate input (negative weights, a margin typed as `-5`) is
//! clamped rather than rejected, and every division is guarded, so any input
//! produces a finite, displayable result.
//!
//! # Example
//!
//! ```
//! use printcost_core::{Material, Percent, PricingInput, compute_cost_breakdown};
//! use rust_decimal::Decimal;
//!
//! let input = PricingInput {
//!     materials: vec![Material::new(Decimal::new(120, 0), Decimal::new(90, 0))],
//!     print_time_hours: Decimal::new(45, 1),
//!     energy_cost_per_hour: Decimal::new(15, 2),
//!     fixed_costs_per_unit: Decimal::TWO,
//!     shared_fixed_costs: Decimal::new(22, 0),
//!     marketplace_fee_percent: Percent::new(Decimal::new(165, 1)),
//!     anticipation_fee_percent: Percent::new(Decimal::new(35, 1)),
//!     margin_percent: Percent::new(Decimal::new(50, 0)),
//!     ..PricingInput::default()
//! };
//!
//! let result = compute_cost_breakdown(&input);
//! assert_eq!(result.unit_cost_with_shared, Decimal::new(35475, 3));
//! assert_eq!(result.suggested_price, Decimal::new(11825, 2));
//! ```

mod engine;
mod input;
mod result;

pub use engine::{
    MINIMUM_PRICE_MARKUP_PERCENT, compute_cost_breakdown, compute_energy_cost,
    compute_material_cost, compute_production_total, compute_realized_margin,
    compute_suggested_price, unit_cost,
};
pub use input::{ExtraCost, Material, PricingInput};
pub use result::{PricingResult, RealizedMargin, SuggestedPrice};
