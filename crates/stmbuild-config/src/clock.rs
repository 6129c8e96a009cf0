//! Oscillator clock source selection.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// The oscillator driving the MCU clock tree.
///
/// Exactly one of the two must be supplied per build. The frequency is
/// carried verbatim in Hz; the ST peripheral library reads it through
/// the `HSE_VALUE` / `HSI_VALUE` macro this produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClockSource {
    /// External oscillator at the given frequency in Hz.
    Hse(u64),
    /// Internal oscillator at the given frequency in Hz.
    Hsi(u64),
}

impl ClockSource {
    /// Build a clock source from the optional `hse` / `hsi` parameters,
    /// enforcing that exactly one is present.
    pub fn from_options(hse: Option<u64>, hsi: Option<u64>) -> Result<Self, ConfigError> {
        match (hse, hsi) {
            (Some(hse), Some(hsi)) => Err(ConfigError::ConflictingClock { hse, hsi }),
            (Some(hz), None) => Ok(ClockSource::Hse(hz)),
            (None, Some(hz)) => Ok(ClockSource::Hsi(hz)),
            (None, None) => Err(ConfigError::MissingClock),
        }
    }

    /// The preprocessor definition this clock source contributes.
    pub fn define(&self) -> (&'static str, String) {
        match self {
            ClockSource::Hse(hz) => ("HSE_VALUE", hz.to_string()),
            ClockSource::Hsi(hz) => ("HSI_VALUE", hz.to_string()),
        }
    }

    /// Oscillator frequency in Hz.
    pub fn frequency_hz(&self) -> u64 {
        match self {
            ClockSource::Hse(hz) | ClockSource::Hsi(hz) => *hz,
        }
    }
}

impl fmt::Display for ClockSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClockSource::Hse(hz) => write!(f, "hse={hz}"),
            ClockSource::Hsi(hz) => write!(f, "hsi={hz}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hse_alone() {
        let clock = ClockSource::from_options(Some(8_000_000), None).unwrap();
        assert_eq!(clock, ClockSource::Hse(8_000_000));
        assert_eq!(clock.define(), ("HSE_VALUE", "8000000".to_string()));
    }

    #[test]
    fn hsi_alone() {
        let clock = ClockSource::from_options(None, Some(16_000_000)).unwrap();
        assert_eq!(clock, ClockSource::Hsi(16_000_000));
        assert_eq!(clock.define(), ("HSI_VALUE", "16000000".to_string()));
    }

    #[test]
    fn both_sources_conflict() {
        let err = ClockSource::from_options(Some(8_000_000), Some(16_000_000)).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::ConflictingClock {
                hse: 8_000_000,
                hsi: 16_000_000
            }
        ));
    }

    #[test]
    fn neither_source_fails() {
        let err = ClockSource::from_options(None, None).unwrap_err();
        assert!(matches!(err, ConfigError::MissingClock));
    }

    #[test]
    fn frequency_passes_through_verbatim() {
        // No unit conversion: 25 MHz stays 25000000.
        let clock = ClockSource::from_options(Some(25_000_000), None).unwrap();
        assert_eq!(clock.frequency_hz(), 25_000_000);
        assert_eq!(clock.define().1, "25000000");
    }
}
