//! Floating-point ABI policy.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which float calling convention to compile for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FloatPolicy {
    /// Software float ABI; no float-specific flags are added.
    #[default]
    Soft,
    /// Hard float ABI using the hardware FPU. Only valid for families
    /// that have one.
    Hard,
}

impl FloatPolicy {
    /// Interpret the optional `float` build parameter.
    ///
    /// Only the literal `"hard"` selects the hard ABI; absence and any
    /// other value fall back to the software ABI without error,
    /// matching the long-standing behavior of the build scripts this
    /// replaces.
    pub fn from_option(value: Option<&str>) -> Self {
        match value {
            Some("hard") => FloatPolicy::Hard,
            _ => FloatPolicy::Soft,
        }
    }
}

impl fmt::Display for FloatPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FloatPolicy::Soft => f.write_str("soft"),
            FloatPolicy::Hard => f.write_str("hard"),
        }
    }
}
