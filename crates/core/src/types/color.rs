//! Filament color type.

use core::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Errors that can occur when parsing a [`ColorHex`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorHexError {
    /// The input string is empty.
    #[error("color cannot be empty")]
    Empty,
    /// The input has the wrong number of hex digits.
    #[error("color must have 3 or 6 hex digits (got {len})")]
    InvalidLength {
        /// Number of digits found after the optional `#`.
        len: usize,
    },
    /// The input contains a non-hex character.
    #[error("color contains non-hex character '{0}'")]
    InvalidDigit(char),
}

/// A filament color as an uppercase `#RRGGBB` string.
///
/// Slicer files and screenshot extraction report colors in several shapes
/// (`#ff8800`, `FF8800`, `#f80`); parsing normalizes all of them so the
/// catalog sees one representation.
///
/// ## Examples
///
/// ```
/// use printcost_core::ColorHex;
///
/// assert_eq!(ColorHex::parse("#ff8800").unwrap().as_str(), "#FF8800");
/// assert_eq!(ColorHex::parse("f80").unwrap().as_str(), "#FF8800");
///
/// assert!(ColorHex::parse("").is_err());
/// assert!(ColorHex::parse("#12345").is_err());
/// assert!(ColorHex::parse("#GG0000").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct ColorHex(String);

impl ColorHex {
    /// Parse a `ColorHex` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input:
    /// - Is empty
    /// - Does not have 3 or 6 hex digits after an optional `#`
    /// - Contains a character that is not a hex digit
    pub fn parse(s: &str) -> Result<Self, ColorHexError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ColorHexError::Empty);
        }

        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

        if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ColorHexError::InvalidDigit(bad));
        }

        let expanded = match digits.len() {
            6 => digits.to_ascii_uppercase(),
            3 => digits
                .chars()
                .flat_map(|c| [c, c])
                .collect::<String>()
                .to_ascii_uppercase(),
            len => return Err(ColorHexError::InvalidLength { len }),
        };

        Ok(Self(format!("#{expanded}")))
    }

    /// Returns the color as a string slice (`#RRGGBB`).
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the red, green and blue channels.
    #[must_use]
    pub fn rgb(&self) -> (u8, u8, u8) {
        let channel = |range: core::ops::Range<usize>| {
            self.0
                .get(range)
                .and_then(|hex| u8::from_str_radix(hex, 16).ok())
                .unwrap_or(0)
        };
        (channel(1..3), channel(3..5), channel(5..7))
    }
}

/// Deserialize an optional color, dropping values that do not parse.
///
/// Extractors guess colors from slicer metadata and screenshots, so a
/// malformed color (a name like "Red", an `#RRGGBBAA` value) is treated as
/// absent instead of rejecting the whole material.
///
/// # Errors
///
/// Returns an error only if the value is neither null nor a string.
pub fn deserialize_lenient<'de, D>(deserializer: D) -> Result<Option<ColorHex>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| ColorHex::parse(&s).ok()))
}

impl fmt::Display for ColorHex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ColorHex {
    type Err = ColorHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ColorHex {
    type Error = ColorHexError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ColorHex> for String {
    fn from(color: ColorHex) -> Self {
        color.0
    }
}

impl AsRef<str> for ColorHex {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_colors() {
        assert!(ColorHex::parse("#000000").is_ok());
        assert!(ColorHex::parse("ffffff").is_ok());
        assert!(ColorHex::parse("#abc").is_ok());
        assert!(ColorHex::parse("  #1A2b3C ").is_ok());
    }

    #[test]
    fn test_parse_normalizes_case() {
        let color = ColorHex::parse("#ff8800").unwrap();
        assert_eq!(color.as_str(), "#FF8800");
    }

    #[test]
    fn test_parse_expands_short_form() {
        let color = ColorHex::parse("#0f8").unwrap();
        assert_eq!(color.as_str(), "#00FF88");
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(ColorHex::parse(""), Err(ColorHexError::Empty));
        assert_eq!(ColorHex::parse("   "), Err(ColorHexError::Empty));
    }

    #[test]
    fn test_parse_bad_length() {
        assert_eq!(
            ColorHex::parse("#1234"),
            Err(ColorHexError::InvalidLength { len: 4 })
        );
        assert_eq!(
            ColorHex::parse("#"),
            Err(ColorHexError::InvalidLength { len: 0 })
        );
    }

    #[test]
    fn test_parse_bad_digit() {
        assert_eq!(
            ColorHex::parse("#12345Z"),
            Err(ColorHexError::InvalidDigit('Z'))
        );
    }

    #[test]
    fn test_rgb() {
        let color = ColorHex::parse("#FF8001").unwrap();
        assert_eq!(color.rgb(), (255, 128, 1));
    }

    #[test]
    fn test_serde_roundtrip() {
        let color = ColorHex::parse("#ff0000").unwrap();
        let json = serde_json::to_string(&color).unwrap();
        assert_eq!(json, "\"#FF0000\"");

        let parsed: ColorHex = serde_json::from_str("\"f00\"").unwrap();
        assert_eq!(parsed, color);
    }

    #[test]
    fn test_deserialize_rejects_invalid() {
        assert!(serde_json::from_str::<ColorHex>("\"nope\"").is_err());
    }

    #[derive(Debug, Deserialize)]
    struct Swatch {
        #[serde(default, deserialize_with = "deserialize_lenient")]
        color: Option<ColorHex>,
    }

    #[test]
    fn test_lenient_drops_invalid_colors() {
        let inputs = [
            r#"{"color":"Vermelho"}"#,
            r##"{"color":"#FFFFFFFF"}"##,
            r#"{"color":""}"#,
        ];
        for raw in inputs {
            let swatch: Swatch = serde_json::from_str(raw).unwrap();
            assert_eq!(swatch.color, None, "{raw}");
        }
    }

    #[test]
    fn test_lenient_keeps_valid_and_missing() {
        let swatch: Swatch = serde_json::from_str(r#"{"color":"0f8"}"#).unwrap();
        assert_eq!(swatch.color.unwrap().as_str(), "#00FF88");

        let swatch: Swatch = serde_json::from_str(r#"{"color":null}"#).unwrap();
        assert_eq!(swatch.color, None);

        let swatch: Swatch = serde_json::from_str("{}").unwrap();
        assert_eq!(swatch.color, None);
    }

    #[test]
    fn test_lenient_rejects_non_string() {
        assert!(serde_json::from_str::<Swatch>(r#"{"color":42}"#).is_err());
    }

    #[test]
    fn test_from_str() {
        let color: ColorHex = "#00ff00".parse().unwrap();
        assert_eq!(color.to_string(), "#00FF00");
    }
}
