//! Normalizing extracted materials against the filament catalog.
//!
//! Slicer parsers, screenshot extraction and manual entry each report
//! materials in their own shape. They all convert into [`ExtractedMaterial`]
//! first; [`resolve_materials`] then looks up a cost for each one and
//! produces the engine's [`Material`] list plus the positions that could not
//! be mapped. The engine prices unmapped materials at zero, so callers must
//! check [`ResolvedMaterials::is_complete`] before allowing a save.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::pricing::Material;
use crate::types::{ColorHex, FilamentId, color};

/// A material as reported by an extractor, before cost lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedMaterial {
    /// Weight used, in grams.
    pub weight_grams: Decimal,
    /// Name reported by the slicer (e.g. "PLA Basic").
    #[serde(default)]
    pub name: Option<String>,
    /// Color reported by the slicer. Unparseable colors are dropped.
    #[serde(default, deserialize_with = "color::deserialize_lenient")]
    pub color: Option<ColorHex>,
    /// Catalog filament this material was mapped to, if any.
    #[serde(default)]
    pub filament_id: Option<FilamentId>,
}

impl ExtractedMaterial {
    /// A material with only a weight.
    #[must_use]
    pub const fn new(weight_grams: Decimal) -> Self {
        Self {
            weight_grams,
            name: None,
            color: None,
            filament_id: None,
        }
    }

    /// Map this material to a catalog filament.
    #[must_use]
    pub fn with_filament(mut self, filament_id: FilamentId) -> Self {
        self.filament_id = Some(filament_id);
        self
    }
}

/// What an extractor hands over for one print file or screenshot.
///
/// Partial results are normal: zero materials or zero time price to zero.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PrintJobExtract {
    /// Estimated print duration.
    pub print_time_hours: Decimal,
    /// Materials in slicer order.
    pub materials: Vec<ExtractedMaterial>,
}

impl PrintJobExtract {
    /// Total filament weight across all materials (negatives ignored).
    #[must_use]
    pub fn total_weight_grams(&self) -> Decimal {
        self.materials
            .iter()
            .map(|m| m.weight_grams.max(Decimal::ZERO))
            .sum()
    }

    /// Convert a slicer time estimate in minutes to hours.
    #[must_use]
    pub fn hours_from_minutes(minutes: Decimal) -> Decimal {
        minutes.max(Decimal::ZERO) / Decimal::from(60)
    }
}

/// Source of filament costs, keyed by catalog ID.
pub trait FilamentCatalog {
    /// Cost per kilogram for a filament, or `None` if it is not in the catalog.
    fn cost_per_kg(&self, id: FilamentId) -> Option<Decimal>;
}

impl FilamentCatalog for HashMap<FilamentId, Decimal> {
    fn cost_per_kg(&self, id: FilamentId) -> Option<Decimal> {
        self.get(&id).copied()
    }
}

/// Materials ready for the engine, plus the ones missing a cost.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResolvedMaterials {
    /// One entry per extracted material, in the same order.
    pub materials: Vec<Material>,
    /// Positions (into `materials`) that have no cost mapping.
    pub unmapped: Vec<usize>,
}

impl ResolvedMaterials {
    /// Whether every material has a cost.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.unmapped.is_empty()
    }
}

/// Look up a cost for every extracted material.
///
/// Materials without a `filament_id`, or whose ID is not in the catalog, are
/// kept with `cost_per_kg: None` and reported in
/// [`ResolvedMaterials::unmapped`].
#[must_use]
pub fn resolve_materials<C>(extracted: &[ExtractedMaterial], catalog: &C) -> ResolvedMaterials
where
    C: FilamentCatalog + ?Sized,
{
    let mut resolved = ResolvedMaterials {
        materials: Vec::with_capacity(extracted.len()),
        unmapped: Vec::new(),
    };

    for (index, item) in extracted.iter().enumerate() {
        let cost = item.filament_id.and_then(|id| catalog.cost_per_kg(id));
        if cost.is_none() {
            resolved.unmapped.push(index);
        }
        resolved.materials.push(Material {
            weight_grams: item.weight_grams,
            cost_per_kg: cost,
        });
    }

    resolved
}
