//! Status enums describing how a price was produced.

use serde::{Deserialize, Serialize};

/// How the suggested price was derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionMethod {
    /// Fees and margin taken as a share of the sale price (`cost / divisor`).
    #[default]
    MarginOfPrice,
    /// Fees plus margin reach 100% of the price; plain markup over cost.
    MarkupFallback,
}

impl std::fmt::Display for SuggestionMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MarginOfPrice => write!(f, "margin_of_price"),
            Self::MarkupFallback => write!(f, "markup_fallback"),
        }
    }
}

impl std::str::FromStr for SuggestionMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "margin_of_price" => Ok(Self::MarginOfPrice),
            "markup_fallback" => Ok(Self::MarkupFallback),
            _ => Err(format!("invalid suggestion method: {s}")),
        }
    }
}

/// Where the final price came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PriceSource {
    /// The engine's suggested price.
    #[default]
    Suggested,
    /// A positive price typed in by the user.
    Custom,
}

impl std::fmt::Display for PriceSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Suggested => write!(f, "suggested"),
            Self::Custom => write!(f, "custom"),
        }
    }
}

impl std::str::FromStr for PriceSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "suggested" => Ok(Self::Suggested),
            "custom" => Ok(Self::Custom),
            _ => Err(format!("invalid price source: {s}")),
        }
    }
}
