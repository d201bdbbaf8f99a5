//! Output format modules for lexis

pub mod json;

use serde::Serialize;

use crate::config::OutputStyle;
use crate::error::Result;

pub use json::SpacedFormatter;

/// Serializes a result in the requested style, without a trailing newline.
pub fn to_json<T: Serialize + ?Sized>(result: &T, style: OutputStyle) -> Result<String> {
    match style {
        OutputStyle::Compact => json::to_spaced_string(result),
        OutputStyle::Pretty => Ok(serde_json::to_string_pretty(result)?),
    }
}
