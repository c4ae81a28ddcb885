//! Price a job file.
//!
//! # Usage
//!
//! ```bash
//! printcost job benchy.yaml
//! printcost job benchy.json --json
//!
//! # Refuse to price when a material has no catalog cost
//! printcost job benchy.yaml --strict
//! ```

use printcost_core::job::{PreparedJob, PricingJob};
use printcost_core::{CostSettings, compute_cost_breakdown};
use tracing::{info, warn};

use super::{CommandError, Output, emit, load_document};
use crate::report;

/// Convert a loaded job, rejecting unmapped materials in strict mode.
///
/// # Errors
///
/// Returns `CommandError::IncompleteMapping` if `strict` is set and any
/// material lacks a cost per kg.
pub fn prepare(
    job: &PricingJob,
    settings: &CostSettings,
    strict: bool,
) -> Result<PreparedJob, CommandError> {
    let prepared = job.to_input(settings);

    if !prepared.is_complete() {
        let positions = prepared
            .unmapped
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");

        if strict {
            return Err(CommandError::IncompleteMapping {
                count: prepared.unmapped.len(),
                positions,
            });
        }
        warn!(
            count = prepared.unmapped.len(),
            positions = %positions,
            "Materials without a catalog cost count as zero"
        );
    }

    Ok(prepared)
}

/// Load, price and print a job file.
///
/// # Errors
///
/// Returns an error if the file cannot be loaded, strict mode rejects it,
/// or JSON output fails.
pub fn run(
    file_path: &str,
    settings: &CostSettings,
    strict: bool,
    json: bool,
) -> Result<(), CommandError> {
    let job: PricingJob = load_document(file_path)?;
    info!(
        path = %file_path,
        materials = job.materials.len(),
        "Loaded pricing job"
    );

    let prepared = prepare(&job, settings, strict)?;
    let result = compute_cost_breakdown(&prepared.input);

    let text = report::breakdown(job.name.as_deref(), &prepared.input, &result);
    let document = report::Quote {
        name: job.name.as_deref(),
        input: &prepared.input,
        result: &result,
        unmapped: &prepared.unmapped,
    };
    emit(Output::from_flag(json), &text, &document)
}
