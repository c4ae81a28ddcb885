//! Landed cost per kilogram for a filament order.
//!
//! # Usage
//!
//! ```bash
//! printcost landed order.yaml
//! ```
//!
//! ```yaml
//! shipping_total: "40"
//! fees_total: "8"
//! prorate_by_weight: true
//! items:
//!   - label: PLA black
//!     weight_grams: "1000"
//!     cost_per_kg: "100"
//!   - label: PETG grey
//!     weight_grams: "3000"
//!     cost_per_kg: "80"
//! ```

use printcost_core::purchase::{PurchaseExtras, PurchaseItem, prorate_purchase};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::{CommandError, Output, emit, load_document};
use crate::report;

/// A purchase order as stored in a YAML or JSON file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseFile {
    pub items: Vec<PurchaseItem>,
    #[serde(flatten)]
    pub extras: PurchaseExtras,
}

/// Load an order and print each item's landed cost.
///
/// # Errors
///
/// Returns an error if the file cannot be loaded or JSON output fails.
pub fn run(file_path: &str, json: bool) -> Result<(), CommandError> {
    let order: PurchaseFile = load_document(file_path)?;
    info!(path = %file_path, items = order.items.len(), "Loaded purchase order");

    let breakdown = prorate_purchase(&order.items, &order.extras);
    let labels: Vec<String> = order.items.iter().map(|i| i.label.clone()).collect();

    let text = report::purchase(&labels, &breakdown);
    emit(Output::from_flag(json), &text, &breakdown)
}
