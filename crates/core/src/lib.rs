//! Printcost Core - Pricing engine and shared types.
//!
//! This crate provides the cost model used by every pricing surface:
//! - the quick calculator (`printcost quote`)
//! - job files produced from slicer/vision extraction (`printcost job`)
//! - filament purchase and sale bookkeeping helpers
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no
//! database access, no global configuration. Settings such as the energy
//! rate or default margin are resolved by the caller and passed in as plain
//! values, so every calculation is a function of its input alone.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for IDs, percentages, colors and statuses
//! - [`pricing`] - Cost breakdown and suggested price calculation
//! - [`energy`] - Printer power draw to energy cost per hour
//! - [`settings`] - Per-user cost defaults and their fallback chain
//! - [`catalog`] - Normalizing extracted materials against a filament catalog
//! - [`purchase`] - Landed cost of filament purchases (shipping and fees)
//! - [`sale`] - Revenue and profit of a recorded sale
//! - [`job`] - Serializable pricing job documents

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod energy;
pub mod job;
pub mod pricing;
pub mod purchase;
pub mod sale;
pub mod settings;
pub mod types;

pub use catalog::{
    ExtractedMaterial, FilamentCatalog, PrintJobExtract, ResolvedMaterials, resolve_materials,
};
pub use pricing::{
    ExtraCost, Material, PricingInput, PricingResult, RealizedMargin, SuggestedPrice,
    compute_cost_breakdown, compute_energy_cost, compute_material_cost, compute_production_total,
    compute_realized_margin, compute_suggested_price, unit_cost,
};
pub use settings::CostSettings;
pub use types::*;
