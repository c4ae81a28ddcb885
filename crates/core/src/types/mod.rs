//! Core types for Printcost.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod color;
pub mod id;
pub mod percent;
pub mod status;

pub use color::{ColorHex, ColorHexError};
pub use id::*;
pub use percent::Percent;
pub use status::*;
