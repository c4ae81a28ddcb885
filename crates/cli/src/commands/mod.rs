//! CLI command implementations.

pub mod energy;
pub mod job;
pub mod landed;
pub mod quote;
pub mod sale;

use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Input file does not exist.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Input file could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// YAML document did not match the expected shape.
    #[error("Invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON document did not match the expected shape, or output failed.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Unknown watts preset slug.
    #[error("Unknown preset: {0}. Run `printcost energy --list-presets` for the list")]
    UnknownPreset(String),

    /// Neither watts nor a preset were given.
    #[error("Either --watts or --preset is required")]
    MissingWatts,

    /// Strict mode rejected materials without a cost.
    #[error("{count} material(s) have no cost mapping: positions {positions}")]
    IncompleteMapping { count: usize, positions: String },
}

/// How a result is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    Text,
    Json,
}

impl Output {
    /// Pick the output format from a `--json` flag.
    #[must_use]
    pub const fn from_flag(json: bool) -> Self {
        if json { Self::Json } else { Self::Text }
    }
}

/// Write a report to stdout, either the rendered text or `value` as JSON.
///
/// # Errors
///
/// Returns `CommandError::Json` if `value` cannot be serialized.
#[allow(clippy::print_stdout)]
pub fn emit<T: Serialize>(output: Output, text: &str, value: &T) -> Result<(), CommandError> {
    match output {
        Output::Text => print!("{text}"),
        Output::Json => println!("{}", serde_json::to_string_pretty(value)?),
    }
    Ok(())
}

/// Load a YAML or JSON document, chosen by file extension.
///
/// Files ending in `.json` are parsed as JSON; anything else as YAML.
///
/// # Errors
///
/// Returns an error if the file is missing, unreadable, or malformed.
pub fn load_document<T: DeserializeOwned>(file_path: &str) -> Result<T, CommandError> {
    let path = Path::new(file_path);
    if !path.exists() {
        return Err(CommandError::FileNotFound(file_path.to_string()));
    }

    let content = std::fs::read_to_string(path).map_err(|source| CommandError::Io {
        path: file_path.to_string(),
        source,
    })?;

    parse_document(path, &content)
}

fn parse_document<T: DeserializeOwned>(path: &Path, content: &str) -> Result<T, CommandError> {
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        Ok(serde_json::from_str(content)?)
    } else {
        Ok(serde_yaml::from_str(content)?)
    }
}
